//Various checks to verify the internal state of the engine
//Used in debug_assert!() blocks

use crate::Coord;
use crate::entities::Tile;
use crate::separability::{BoundAgg, FarMax, NearMin, ScanOrder, SepWindow};

pub fn tile_ids_are_dense(tiles: &[Tile]) -> bool {
    tiles.iter().enumerate().all(|(i, tile)| tile.id == i)
}

/// Exhaustive consistency check of a window: inverse view maps, sorted view
/// order, fully dead prefixes before the `lo` markers, leaf values matching
/// the live flags and counters. Expensive, only meant for debug builds.
pub fn window_is_consistent(window: &SepWindow) -> bool {
    let n = window.n_leaves();
    assert_eq!(
        window.live.iter().filter(|&&live| live).count(),
        window.n_active
    );
    assert!(window.n_active <= window.n_start);

    for view in &window.views {
        let order = view.order;
        assert_eq!(view.len(), n);
        for pos in 0..n {
            assert_eq!(view.pos_of(view.id_at(pos)), pos);
            let local = view.id_at(pos);
            let expected = match window.live[local] {
                true => order.agg_key(&window.tiles[local].rect),
                false => neutral(order),
            };
            assert_eq!(window.leaf(order, pos), expected);
        }
        for pos in 1..n {
            assert!(
                order.sort_key(&window.tiles[view.id_at(pos - 1)].rect)
                    <= order.sort_key(&window.tiles[view.id_at(pos)].rect)
            );
        }
        for pos in 0..window.lo[order.idx()] {
            assert!(!window.live[view.id_at(pos)]);
        }
    }
    true
}

/// Every `lo` marker points at an active position (or past the end).
pub fn boundaries_settled(window: &SepWindow) -> bool {
    ScanOrder::PRIORITY.iter().all(|&order| {
        let lo = window.lo(order);
        lo == window.n_leaves() || window.is_live_at(order, lo)
    })
}

fn neutral(order: ScanOrder) -> Coord {
    match order.is_ascending() {
        true => FarMax::NEUTRAL,
        false => NearMin::NEUTRAL,
    }
}
