//! Tilegrid Render -- SVG output for tileset geometry.
//!
//! This crate turns the tile records from [`tilegrid_tileset`] into one SVG
//! document per tile: a background rectangle, a reference grid with axis tick
//! labels, the tile's name as a title, and each wall polygon as a filled
//! closed shape.
//!
//! # Pipeline
//!
//! 1. [`coords`]: maps normalized bottom-up coordinates into top-down canvas
//!    coordinates.
//! 2. [`grid`]: generates the reference grid once per run; it depends only on
//!    the configuration, never on tile data.
//! 3. [`svg`]: minimal SVG document assembly (header, indented elements,
//!    footer).
//! 4. [`renderer`]: the [`TileRenderer`](renderer::TileRenderer) that draws
//!    each tile and writes the batch to an output directory.
//!
//! # Example
//!
//! ```
//! use tilegrid_render::prelude::*;
//!
//! let tile = Tile {
//!     name: "room_a".to_owned(),
//!     walls: vec![vec![Point(0.0, 0.0), Point(1.0, 0.0), Point(1.0, 1.0)]],
//! };
//!
//! let renderer = TileRenderer::new(RenderConfig::default());
//! let svg = renderer.render_tile(&tile);
//! assert!(svg.contains("room_a"));
//! ```

#![deny(unsafe_code)]

pub mod coords;
pub mod grid;
pub mod renderer;
pub mod svg;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

/// Re-export the tileset crate for convenience.
pub use tilegrid_tileset;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::coords::{to_canvas, to_normalized};
    pub use crate::grid::grid_elements;
    pub use crate::renderer::{RenderConfig, RenderError, TileRenderer};
    pub use crate::svg::SvgDocument;
    pub use tilegrid_tileset::{load_tileset, parse_tileset, Point, Polygon, Tile};
}
