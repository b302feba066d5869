use crate::Coord;
use crate::geometry::primitives::Point;
use anyhow::Result;
use anyhow::ensure;

/// Axis-aligned rectangle, closed on all four sides
#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy)]
pub struct Rect {
    pub x_min: Coord,
    pub y_min: Coord,
    pub x_max: Coord,
    pub y_max: Coord,
}

impl Rect {
    pub fn try_new(x_min: Coord, y_min: Coord, x_max: Coord, y_max: Coord) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    pub fn from_diagonal_corners(c1: Point, c2: Point) -> Result<Self> {
        let x_min = Coord::min(c1.x(), c2.x());
        let y_min = Coord::min(c1.y(), c2.y());
        let x_max = Coord::max(c1.x(), c2.x());
        let y_max = Coord::max(c1.y(), c2.y());
        Rect::try_new(x_min, y_min, x_max, y_max)
    }

    pub fn width(&self) -> Coord {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> Coord {
        self.y_max - self.y_min
    }

    /// Area as `i128`: a single span, let alone the product, can exceed
    /// `Coord` range, so both subtractions are widened first.
    pub fn area(&self) -> i128 {
        (self.x_max as i128 - self.x_min as i128) * (self.y_max as i128 - self.y_min as i128)
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = Coord::max(a.x_min, b.x_min);
        let y_min = Coord::max(a.y_min, b.y_min);
        let x_max = Coord::min(a.x_max, b.x_max);
        let y_max = Coord::min(a.y_max, b.y_max);
        if x_min < x_max && y_min < y_max {
            Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            })
        } else {
            None
        }
    }

    /// Returns the smallest rectangle that contains both `a` and `b`.
    pub fn bounding_rect(a: Rect, b: Rect) -> Rect {
        let x_min = Coord::min(a.x_min, b.x_min);
        let y_min = Coord::min(a.y_min, b.y_min);
        let x_max = Coord::max(a.x_max, b.x_max);
        let y_max = Coord::max(a.y_max, b.y_max);
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_corners_normalize_in_any_order() {
        let rect = Rect::from_diagonal_corners(Point(8, 5), Point(2, 1)).unwrap();
        assert_eq!(rect, Rect::try_new(2, 1, 8, 5).unwrap());
    }

    #[test]
    fn diagonal_corners_on_one_line_are_rejected() {
        assert!(Rect::from_diagonal_corners(Point(3, 0), Point(3, 4)).is_err());
    }

    #[test]
    fn area_survives_spans_beyond_coord_range() {
        let rect = Rect::try_new(-5_000_000_000_000_000_000, 0, 5_000_000_000_000_000_000, 1)
            .unwrap();
        assert_eq!(rect.area(), 10_000_000_000_000_000_000_i128);
    }

    #[test]
    fn intersection_is_the_shared_region() {
        let a = Rect::try_new(0, 0, 4, 4).unwrap();
        let b = Rect::try_new(2, 1, 6, 3).unwrap();
        let shared = Rect::try_new(2, 1, 4, 3).unwrap();
        assert_eq!(Rect::intersection(a, b), Some(shared));
    }

    #[test]
    fn edge_sharing_rects_do_not_intersect() {
        let a = Rect::try_new(0, 0, 4, 4).unwrap();
        let b = Rect::try_new(4, 0, 6, 4).unwrap();
        assert_eq!(Rect::intersection(a, b), None);
    }
}
