//! Tile records and tileset loading.
//!
//! Types mirror the JSON format directly: a tileset is `Vec<Tile>`, a tile is
//! a name plus wall polygons, a point is a two-element array. Loading reads
//! the whole file once; tiles are held in memory for the duration of the run
//! and never mutated.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::TilesetError;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D point in normalized tile space.
///
/// Serde maps the tuple struct to the JSON `[x, y]` pair. Both coordinates
/// are expected to lie in [0, 1]; this is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Point {
    /// The horizontal coordinate.
    pub fn x(&self) -> f64 {
        self.0
    }

    /// The vertical coordinate (bottom-up convention).
    pub fn y(&self) -> f64 {
        self.1
    }
}

/// An ordered, implicitly-closed sequence of points describing one solid
/// obstacle shape within a tile.
pub type Polygon = Vec<Point>;

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// A named unit of map geometry.
///
/// `name` doubles as the output filename stem; the loader does not validate
/// or sanitize it. `walls` may be empty, which renders as a grid-only image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Unique tile name, used directly as the output filename stem.
    pub name: String,
    /// Wall polygons in draw order. Later polygons layer over earlier ones.
    pub walls: Vec<Polygon>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Parse a tileset from JSON text.
///
/// The input must be a JSON array of tile records; a record missing `name`
/// or `walls` is a [`TilesetError::Parse`].
pub fn parse_tileset(json: &str) -> Result<Vec<Tile>, TilesetError> {
    let tiles: Vec<Tile> = serde_json::from_str(json)?;
    Ok(tiles)
}

/// Load a tileset from a JSON file.
///
/// Reads the whole file up front, so a failure here happens before any
/// output is written.
pub fn load_tileset(path: impl AsRef<Path>) -> Result<Vec<Tile>, TilesetError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| TilesetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let tiles = parse_tileset(&json)?;
    tracing::debug!(
        path = %path.display(),
        tile_count = tiles.len(),
        "loaded tileset"
    );
    Ok(tiles)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_tile() {
        let tiles = parse_tileset(
            r#"[{"name": "room_a", "walls": [[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,1.0]]]}]"#,
        )
        .unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].name, "room_a");
        assert_eq!(tiles[0].walls.len(), 1);
        assert_eq!(tiles[0].walls[0][1], Point(1.0, 0.0));
    }

    #[test]
    fn parse_empty_array() {
        let tiles = parse_tileset("[]").unwrap();
        assert!(tiles.is_empty());
    }

    #[test]
    fn tile_with_no_walls_is_valid() {
        let tiles = parse_tileset(r#"[{"name": "empty", "walls": []}]"#).unwrap();
        assert!(tiles[0].walls.is_empty());
    }

    #[test]
    fn missing_name_is_parse_error() {
        let err = parse_tileset(r#"[{"walls": []}]"#).unwrap_err();
        assert!(matches!(err, TilesetError::Parse(_)));
    }

    #[test]
    fn missing_walls_is_parse_error() {
        let err = parse_tileset(r#"[{"name": "broken"}]"#).unwrap_err();
        assert!(matches!(err, TilesetError::Parse(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_tileset("not json at all").unwrap_err();
        assert!(matches!(err, TilesetError::Parse(_)));
    }

    #[test]
    fn point_accessors() {
        let p = Point(0.25, 0.75);
        assert_eq!(p.x(), 0.25);
        assert_eq!(p.y(), 0.75);
    }

    #[test]
    fn point_round_trips_as_json_pair() {
        let json = serde_json::to_string(&Point(0.5, 1.0)).unwrap();
        assert_eq!(json, "[0.5,1.0]");
        let p: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, Point(0.5, 1.0));
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let err = load_tileset("/nonexistent/tileset.json").unwrap_err();
        assert!(matches!(err, TilesetError::Read { .. }));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tileset.json");
        std::fs::write(&path, r#"[{"name": "a", "walls": []}]"#).unwrap();
        let tiles = load_tileset(&path).unwrap();
        assert_eq!(tiles[0].name, "a");
    }
}
