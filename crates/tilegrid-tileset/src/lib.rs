//! Tilegrid Tileset -- data model and JSON loading for tile definitions.
//!
//! A tileset is an ordered list of named tiles, each carrying the wall
//! polygons that make up its solid geometry. Coordinates live in normalized
//! tile space: both axes range over [0, 1] with the origin at the bottom-left
//! (Cartesian convention). The renderer crate maps them into canvas space.
//!
//! # Data shape
//!
//! The on-disk format is a single JSON array of tile records:
//!
//! ```json
//! [
//!   { "name": "room_a", "walls": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]] }
//! ]
//! ```
//!
//! Each wall is an ordered sequence of `[x, y]` pairs and is implicitly
//! closed: the renderer connects the last point back to the first.
//!
//! # Example
//!
//! ```
//! use tilegrid_tileset::parse_tileset;
//!
//! let tiles = parse_tileset(r#"[{"name": "corridor", "walls": []}]"#).unwrap();
//! assert_eq!(tiles[0].name, "corridor");
//! assert!(tiles[0].walls.is_empty());
//! ```

#![deny(unsafe_code)]

pub mod tileset;

pub use tileset::{load_tileset, parse_tileset, Point, Polygon, Tile};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced while loading a tileset file.
#[derive(Debug, thiserror::Error)]
pub enum TilesetError {
    /// The tileset file could not be read.
    #[error("failed to read tileset file {path}: {source}")]
    Read {
        /// The path that was being read.
        path: std::path::PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The tileset file is not valid JSON, or a record is missing a required
    /// field (`name` or `walls`).
    #[error("malformed tileset: {0}")]
    Parse(#[from] serde_json::Error),
}
