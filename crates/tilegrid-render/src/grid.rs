//! Reference grid generation.
//!
//! The grid is a pure function of the canvas size and cell count, independent
//! of tile data, so the renderer computes it once and reuses it for every
//! tile in the batch.

/// Generate the reference grid elements for a `size x size` canvas divided
/// into `grid_size` cells per axis.
///
/// Produces `2 * (grid_size + 1)` line elements (one horizontal and one
/// vertical per grid position, edges included) and `2 * (grid_size - 1)`
/// text labels (interior positions only -- the canvas edges stay unlabeled).
/// Labels show the fractional position `i / grid_size` to one decimal place:
/// x-axis labels centered along the bottom edge, y-axis labels along the
/// left edge at the matching height.
pub fn grid_elements(size: u32, grid_size: u32) -> Vec<String> {
    let canvas = size as f64;
    let step = canvas / grid_size as f64;

    let mut elements = Vec::with_capacity(4 * grid_size as usize);
    for i in 0..=grid_size {
        let pos = i as f64 * step;
        elements.push(format!(
            r##"<line x1="0" y1="{pos:.1}" x2="{size}" y2="{pos:.1}" stroke="#ddd" stroke-width="1"/>"##
        ));
        elements.push(format!(
            r##"<line x1="{pos:.1}" y1="0" x2="{pos:.1}" y2="{size}" stroke="#ddd" stroke-width="1"/>"##
        ));

        if i > 0 && i < grid_size {
            let frac = i as f64 / grid_size as f64;
            elements.push(format!(
                r#"<text x="{pos:.1}" y="{edge:.1}" text-anchor="middle" font-size="12">{frac:.1}</text>"#,
                edge = canvas - 5.0,
            ));
            elements.push(format!(
                r#"<text x="5" y="{flipped:.1}" font-size="12">{frac:.1}</text>"#,
                flipped = canvas - pos,
            ));
        }
    }
    elements
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
