//! Seeded instance generators, used by the test suites and benches.

use itertools::Itertools;
use rand::Rng;

use crate::geometry::primitives::Rect;

/// Recursively slices `region` into at most `n_target` cells with random
/// full-span cuts. The result is an exact tiling of `region` that is
/// guillotine separable by construction.
pub fn guillotine_tiling(rng: &mut impl Rng, region: Rect, n_target: usize) -> Vec<Rect> {
    let mut cells = vec![];
    let mut stack = vec![(region, n_target.max(1))];
    while let Some((cell, budget)) = stack.pop() {
        let can_x = cell.width() > 1;
        let can_y = cell.height() > 1;
        if budget <= 1 || (!can_x && !can_y) {
            cells.push(cell);
            continue;
        }
        let split_x = match (can_x, can_y) {
            (true, true) => rng.random_bool(0.5),
            _ => can_x,
        };
        let near_budget = rng.random_range(1..budget);
        match split_x {
            true => {
                let at = rng.random_range(cell.x_min + 1..cell.x_max);
                stack.push((Rect { x_max: at, ..cell }, near_budget));
                stack.push((Rect { x_min: at, ..cell }, budget - near_budget));
            }
            false => {
                let at = rng.random_range(cell.y_min + 1..cell.y_max);
                stack.push((Rect { y_max: at, ..cell }, near_budget));
                stack.push((Rect { y_min: at, ..cell }, budget - near_budget));
            }
        }
    }
    cells
}

/// The canonical non-separable arrangement: four tiles wound around a centre
/// cell. `region` must measure at least 3x3.
pub fn pinwheel(region: Rect) -> Vec<Rect> {
    assert!(
        region.width() >= 3 && region.height() >= 3,
        "pinwheel needs a region of at least 3x3, got {region:?}"
    );
    let Rect {
        x_min,
        y_min,
        x_max,
        y_max,
    } = region;
    vec![
        Rect {
            x_min,
            y_min,
            x_max: x_max - 1,
            y_max: y_min + 1,
        },
        Rect {
            x_min: x_max - 1,
            y_min,
            x_max,
            y_max: y_max - 1,
        },
        Rect {
            x_min: x_min + 1,
            y_min: y_max - 1,
            x_max,
            y_max,
        },
        Rect {
            x_min,
            y_min: y_min + 1,
            x_max: x_min + 1,
            y_max,
        },
        Rect {
            x_min: x_min + 1,
            y_min: y_min + 1,
            x_max: x_max - 1,
            y_max: y_max - 1,
        },
    ]
}

/// A random guillotine tiling of `region` with one sufficiently large cell
/// replaced by a pinwheel, guaranteed not to be separable.
pub fn tiling_with_pinwheel(rng: &mut impl Rng, region: Rect, n_target: usize) -> Vec<Rect> {
    assert!(
        region.width() >= 3 && region.height() >= 3,
        "pinwheel host needs a region of at least 3x3, got {region:?}"
    );
    let mut cells = guillotine_tiling(rng, region, n_target);
    let hosts = cells
        .iter()
        .positions(|cell| cell.width() >= 3 && cell.height() >= 3)
        .collect_vec();
    match hosts.is_empty() {
        // none of the cells can host a pinwheel, wind up the whole region instead
        true => pinwheel(region),
        false => {
            let host = cells.swap_remove(hosts[rng.random_range(0..hosts.len())]);
            cells.extend(pinwheel(host));
            cells
        }
    }
}
