//! Per-tile rendering and the batch driver.
//!
//! [`TileRenderer`] holds the render configuration and the precomputed grid.
//! [`render_tile`](TileRenderer::render_tile) produces one SVG document as a
//! string; [`render_all`](TileRenderer::render_all) walks the tileset in
//! input order and writes `<name>.svg` per tile into the output directory.
//!
//! The batch is strictly sequential with no per-tile failure isolation: the
//! first I/O error aborts the run, and tiles already written stay on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tilegrid_tileset::{Point, Tile};

use crate::coords::to_canvas;
use crate::grid::grid_elements;
use crate::svg::SvgDocument;

// ---------------------------------------------------------------------------
// RenderConfig
// ---------------------------------------------------------------------------

/// Fixed rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Canvas width and height in output units.
    pub svg_size: u32,
    /// Number of grid cells per axis.
    pub grid_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            svg_size: 400,
            grid_size: 10,
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced while writing the rendered batch.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        /// The directory that was being created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A tile image could not be written.
    #[error("failed to write tile image {path}: {source}")]
    WriteFile {
        /// The file that was being written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// TileRenderer
// ---------------------------------------------------------------------------

/// Renders tiles into SVG documents.
///
/// The reference grid depends only on the configuration, so it is generated
/// once at construction and shared by every tile in the batch.
#[derive(Debug, Clone)]
pub struct TileRenderer {
    config: RenderConfig,
    grid: Vec<String>,
}

impl TileRenderer {
    /// Create a renderer, precomputing the grid for `config`.
    pub fn new(config: RenderConfig) -> Self {
        let grid = grid_elements(config.svg_size, config.grid_size);
        Self { config, grid }
    }

    /// The active configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render one tile into a complete SVG document.
    ///
    /// Paint order: background, grid, title, then wall polygons in input
    /// order, so overlapping walls layer later-over-earlier.
    pub fn render_tile(&self, tile: &Tile) -> String {
        let size = self.config.svg_size;
        let canvas = size as f64;

        let mut doc = SvgDocument::new(size);
        doc.push(r##"<rect width="100%" height="100%" fill="#f8f8f8"/>"##);
        doc.extend(self.grid.iter().cloned());
        doc.push(format!(
            r##"<text x="{center:.1}" y="30" text-anchor="middle" font-size="20" fill="#666">{name}</text>"##,
            center = canvas / 2.0,
            name = tile.name,
        ));
        for wall in &tile.walls {
            doc.push(wall_path(wall, canvas));
        }
        doc.finish()
    }

    /// Render every tile and write `<name>.svg` into `out_dir`.
    ///
    /// Creates `out_dir` if absent and overwrites existing files silently.
    /// Tile names are used as filename stems with no sanitization.
    pub fn render_all(&self, tiles: &[Tile], out_dir: &Path) -> Result<(), RenderError> {
        fs::create_dir_all(out_dir).map_err(|source| RenderError::CreateDir {
            path: out_dir.to_path_buf(),
            source,
        })?;

        for tile in tiles {
            let svg = self.render_tile(tile);
            let path = out_dir.join(format!("{}.svg", tile.name));
            fs::write(&path, svg).map_err(|source| RenderError::WriteFile {
                path: path.clone(),
                source,
            })?;
            tracing::info!(tile = %tile.name, path = %path.display(), "wrote tile image");
        }
        Ok(())
    }
}

/// Format one wall polygon as a filled, closed `<path>` element.
///
/// Vertices are transformed into canvas space and connected in order with
/// `M`/`L` segments; `Z` closes the shape back to the first vertex. A
/// zero-point polygon yields a degenerate path element (invalid SVG data,
/// but no panic).
fn wall_path(wall: &[Point], canvas: f64) -> String {
    let mut d = String::new();
    for (i, &p) in wall.iter().enumerate() {
        let (x, y) = to_canvas(p, canvas);
        if i == 0 {
            d.push_str(&format!("M {x:.1},{y:.1}"));
        } else {
            d.push_str(&format!(" L {x:.1},{y:.1}"));
        }
    }
    d.push_str(" Z");
    format!(r##"<path d="{d}" fill="#333333" stroke="none"/>"##)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
