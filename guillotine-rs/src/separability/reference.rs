//! Straightforward reference implementation of the separability decision.
//! Sorts and scans from scratch at every level of the recursion, no shared
//! state, no soft deletion. Quadratic in the worst case and only meant as a
//! differential oracle for the engine, never as the production path.

use crate::Coord;
use crate::geometry::primitives::Rect;

/// Same verdict as [`decide`](crate::separability::decide), computed naively.
pub fn is_separable(rects: &[Rect]) -> bool {
    if rects.len() < 2 {
        return true;
    }
    let mut sorted = rects.to_vec();

    sorted.sort_by_key(|r| r.x_min);
    if let Some(split) = first_gap(&sorted, |r| r.x_min, |r| r.x_max) {
        let (near, far) = sorted.split_at(split);
        return is_separable(near) && is_separable(far);
    }

    sorted.sort_by_key(|r| r.y_min);
    if let Some(split) = first_gap(&sorted, |r| r.y_min, |r| r.y_max) {
        let (near, far) = sorted.split_at(split);
        return is_separable(near) && is_separable(far);
    }

    false
}

/// First index at which the sorted run splits cleanly: everything before it
/// ends at or before everything after it begins.
fn first_gap(
    sorted: &[Rect],
    near: impl Fn(&Rect) -> Coord,
    far: impl Fn(&Rect) -> Coord,
) -> Option<usize> {
    let mut reach = far(&sorted[0]);
    for (i, rect) in sorted.iter().enumerate().skip(1) {
        if near(rect) >= reach {
            return Some(i);
        }
        reach = reach.max(far(rect));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rects(coords: &[(i64, i64, i64, i64)]) -> Vec<Rect> {
        coords
            .iter()
            .map(|&(x0, y0, x1, y1)| Rect::try_new(x0, y0, x1, y1).unwrap())
            .collect()
    }

    #[test]
    fn trivial_inputs_are_separable() {
        assert!(is_separable(&[]));
        assert!(is_separable(&rects(&[(0, 0, 4, 4)])));
    }

    #[test]
    fn pinwheel_is_rejected() {
        assert!(!is_separable(&rects(&[
            (0, 0, 2, 1),
            (2, 0, 3, 2),
            (1, 2, 3, 3),
            (0, 1, 1, 3),
            (1, 1, 2, 2),
        ])));
    }

    #[test]
    fn grid_of_strips_is_accepted() {
        assert!(is_separable(&rects(&[
            (0, 0, 1, 1),
            (1, 0, 2, 1),
            (0, 1, 1, 2),
            (1, 1, 2, 2),
        ])));
    }
}
