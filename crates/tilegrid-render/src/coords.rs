//! Normalized-to-canvas coordinate mapping.
//!
//! Normalized tile space is bottom-up (Cartesian, both axes in [0, 1]);
//! canvas space is top-down with the origin at the top-left, so the y axis
//! is inverted. Scaling by the canvas size is the only other operation: no
//! rotation, no offset.

use tilegrid_tileset::Point;

/// Map a normalized point into canvas coordinates.
///
/// `(x, y)` becomes `(x * size, size - y * size)`.
pub fn to_canvas(p: Point, size: f64) -> (f64, f64) {
    (p.x() * size, size - p.y() * size)
}

/// Map a canvas coordinate back into normalized space.
///
/// Inverse of [`to_canvas`], up to floating-point rounding.
pub fn to_normalized(canvas: (f64, f64), size: f64) -> Point {
    Point(canvas.0 / size, (size - canvas.1) / size)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_canvas_corners() {
        // Normalized origin is the bottom-left of the canvas.
        assert_eq!(to_canvas(Point(0.0, 0.0), 400.0), (0.0, 400.0));
        assert_eq!(to_canvas(Point(1.0, 0.0), 400.0), (400.0, 400.0));
        assert_eq!(to_canvas(Point(1.0, 1.0), 400.0), (400.0, 0.0));
        assert_eq!(to_canvas(Point(0.0, 1.0), 400.0), (0.0, 0.0));
    }

    #[test]
    fn center_maps_to_center() {
        assert_eq!(to_canvas(Point(0.5, 0.5), 400.0), (200.0, 200.0));
    }

    #[test]
    fn inverse_recovers_corners() {
        assert_eq!(to_normalized((0.0, 400.0), 400.0), Point(0.0, 0.0));
        assert_eq!(to_normalized((400.0, 0.0), 400.0), Point(1.0, 1.0));
    }
}
