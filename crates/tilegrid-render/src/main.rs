//! tileset2svg -- batch-convert a tileset file into per-tile SVG images.
//!
//! Reads `tileset.json` from the working directory and writes one
//! `<name>.svg` per tile into `svg_tiles/`. No flags, no environment
//! variables; a run is a short-lived all-or-nothing batch job. Any failure
//! propagates out of `main` and exits non-zero with a diagnostic on stderr.

use std::path::Path;

use tilegrid_render::prelude::*;

/// Input tileset, read once at startup.
const TILESET_PATH: &str = "tileset.json";

/// Output directory, created if absent.
const OUTPUT_DIR: &str = "svg_tiles";

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let tiles = load_tileset(TILESET_PATH)?;
    tracing::info!(tile_count = tiles.len(), "rendering tileset");

    let renderer = TileRenderer::new(RenderConfig::default());
    renderer.render_all(&tiles, Path::new(OUTPUT_DIR))?;

    println!("SVG files generated in {OUTPUT_DIR}/ directory");
    Ok(())
}
