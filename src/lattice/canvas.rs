use nalgebra::{Point2, Vector2};

use super::LatticePoint;

/// A point in drawing units. Each lattice cell covers a 2x2 region.
pub type CanvasPoint = Point2<i64>;

/// Offset applied on top of [`to_canvas`], e.g. to move an arc origin to a
/// corner of its cell.
pub type CanvasShift = Vector2<i64>;

/// Takes lattice coords to drawn coords: `(2x + 1, 2y + 1)`.
pub fn to_canvas(site: &LatticePoint) -> CanvasPoint {
    Point2::new(2 * site.x + 1, 2 * site.y + 1)
}

/// [`to_canvas`] followed by a fixed shift.
pub fn to_canvas_shifted(site: &LatticePoint, shift: &CanvasShift) -> CanvasPoint {
    to_canvas(site) + *shift
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_to_canvas() {
        assert_eq!(to_canvas(&Point2::new(0, 0)), Point2::new(1, 1));
        assert_eq!(to_canvas(&Point2::new(3, 1)), Point2::new(7, 3));
    }

    #[test]
    fn test_shifted() {
        let p = to_canvas_shifted(&Point2::new(1, 0), &Vector2::new(2, 0));
        assert_eq!(p, Point2::new(5, 1));
    }
}
