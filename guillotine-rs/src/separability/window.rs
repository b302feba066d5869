use itertools::Itertools;

use crate::Coord;
use crate::entities::Tile;
use crate::separability::agg_index::{AggIndex, FarMax, NearMin};
use crate::separability::cut_finder::Cut;
use crate::separability::ordered_view::OrderedView;
use crate::separability::scan_order::ScanOrder;
use crate::util::assertions;

/// A window of tiles on which the engine searches for a cut.
///
/// Holds a local arena of tiles together with the four sorted views and their
/// range indices. Peeling a side off soft-deletes its tiles in all four
/// indices at once; the views themselves are never reordered or rebuilt.
/// A peeled side is no longer contiguous in the other three orders, so it is
/// always recollected into a fresh window of its own.
#[derive(Clone, Debug)]
pub struct SepWindow {
    /// Local arena, indexed by local tile index
    pub tiles: Vec<Tile>,
    /// One view per order, indexed by [`ScanOrder::idx`]
    pub views: [OrderedView; 4],
    pub asc_x: AggIndex<FarMax>,
    pub asc_y: AggIndex<FarMax>,
    pub desc_x: AggIndex<NearMin>,
    pub desc_y: AggIndex<NearMin>,
    /// Active flag per local tile index
    pub live: Vec<bool>,
    /// Per order: position of the first active tile, indexed by [`ScanOrder::idx`].
    /// All positions before it are soft-deleted.
    pub lo: [usize; 4],
    pub n_active: usize,
    /// Number of tiles the window started with, for stall detection
    pub n_start: usize,
}

impl SepWindow {
    pub fn build(tiles: Vec<Tile>) -> Self {
        let n = tiles.len();
        let views = ScanOrder::PRIORITY.map(|order| OrderedView::build(order, &tiles));
        let leaves = |view: &OrderedView| {
            view.ids()
                .iter()
                .map(|&local| view.order.agg_key(&tiles[local].rect))
                .collect_vec()
        };
        let asc_x = AggIndex::build(leaves(&views[0]).into_iter());
        let asc_y = AggIndex::build(leaves(&views[1]).into_iter());
        let desc_x = AggIndex::build(leaves(&views[2]).into_iter());
        let desc_y = AggIndex::build(leaves(&views[3]).into_iter());

        let window = Self {
            tiles,
            views,
            asc_x,
            asc_y,
            desc_x,
            desc_y,
            live: vec![true; n],
            lo: [0; 4],
            n_active: n,
            n_start: n,
        };
        debug_assert!(assertions::window_is_consistent(&window));
        window
    }

    /// Number of leaves (active or not) in each view.
    #[inline(always)]
    pub fn n_leaves(&self) -> usize {
        self.tiles.len()
    }

    #[inline(always)]
    pub fn lo(&self, order: ScanOrder) -> usize {
        self.lo[order.idx()]
    }

    #[inline(always)]
    pub fn tile_at(&self, order: ScanOrder, pos: usize) -> Tile {
        self.tiles[self.views[order.idx()].id_at(pos)]
    }

    #[inline(always)]
    pub fn is_live_at(&self, order: ScanOrder, pos: usize) -> bool {
        self.live[self.views[order.idx()].id_at(pos)]
    }

    /// Aggregate over the active leaves at positions `[l, r]` of `order`.
    #[inline(always)]
    pub fn range_agg(&self, order: ScanOrder, l: usize, r: usize) -> Coord {
        match order {
            ScanOrder::XAsc => self.asc_x.range_agg(l, r),
            ScanOrder::YAsc => self.asc_y.range_agg(l, r),
            ScanOrder::XDesc => self.desc_x.range_agg(l, r),
            ScanOrder::YDesc => self.desc_y.range_agg(l, r),
        }
    }

    /// Leaf value at position `pos` of `order`: the aggregate key of the tile
    /// when active, the neutral element when soft-deleted.
    pub fn leaf(&self, order: ScanOrder, pos: usize) -> Coord {
        match order {
            ScanOrder::XAsc => self.asc_x.leaf(pos),
            ScanOrder::YAsc => self.asc_y.leaf(pos),
            ScanOrder::XDesc => self.desc_x.leaf(pos),
            ScanOrder::YDesc => self.desc_y.leaf(pos),
        }
    }

    /// Advances every order's `lo` marker past soft-deleted leaves, restoring
    /// the invariant that `lo` points at the first active position.
    /// Must be called before probing, deletions by earlier cuts in other
    /// orders may have overtaken a marker.
    pub fn advance_boundaries(&mut self) {
        for order in ScanOrder::PRIORITY {
            let (o, n) = (order.idx(), self.n_leaves());
            while self.lo[o] < n && !self.live[self.views[o].id_at(self.lo[o])] {
                self.lo[o] += 1;
            }
        }
        debug_assert!(assertions::boundaries_settled(self));
    }

    /// Applies `cut`: soft-deletes the active tiles at positions
    /// `[lo(order), pos)` of the cut's order in all four indices and returns
    /// them, in that order, as the separated side.
    /// The side is always non-empty and strictly smaller than the window.
    pub fn split_off(&mut self, cut: Cut) -> Vec<Tile> {
        let o = cut.order.idx();
        debug_assert!(cut.pos > self.lo[o] && cut.pos < self.n_leaves());
        debug_assert!(self.is_live_at(cut.order, cut.pos));

        let side = (self.lo[o]..cut.pos)
            .map(|pos| self.views[o].id_at(pos))
            .filter(|&local| self.live[local])
            .collect_vec();
        debug_assert!(!side.is_empty() && side.len() < self.n_active);

        for &local in &side {
            self.deactivate(local);
        }
        self.lo[o] = cut.pos;

        debug_assert!(assertions::window_is_consistent(self));
        side.iter().map(|&local| self.tiles[local]).collect_vec()
    }

    /// Soft-deletes one tile in all four range indices.
    /// Cross-index consistency: a tile is active in all indices or in none.
    fn deactivate(&mut self, local: usize) {
        debug_assert!(self.live[local]);
        self.live[local] = false;
        self.n_active -= 1;
        self.asc_x.deactivate(self.views[0].pos_of(local));
        self.asc_y.deactivate(self.views[1].pos_of(local));
        self.desc_x.deactivate(self.views[2].pos_of(local));
        self.desc_y.deactivate(self.views[3].pos_of(local));
    }

    /// All tiles still active in the window, in arena order.
    pub fn active_tiles(&self) -> Vec<Tile> {
        self.tiles
            .iter()
            .zip(self.live.iter())
            .filter_map(|(tile, live)| live.then_some(*tile))
            .collect_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::Rect;

    fn window(rects: &[(i64, i64, i64, i64)]) -> SepWindow {
        let tiles = rects
            .iter()
            .enumerate()
            .map(|(id, &(x0, y0, x1, y1))| Tile {
                id,
                rect: Rect::try_new(x0, y0, x1, y1).unwrap(),
            })
            .collect_vec();
        SepWindow::build(tiles)
    }

    #[test]
    fn split_off_peels_the_near_block() {
        // three vertical strips
        let mut win = window(&[(0, 0, 1, 1), (1, 0, 2, 1), (2, 0, 3, 1)]);
        let side = win.split_off(Cut {
            order: ScanOrder::XAsc,
            pos: 1,
        });
        assert_eq!(side.len(), 1);
        assert_eq!(side[0].id, 0);
        assert_eq!(win.n_active, 2);
        assert_eq!(win.lo(ScanOrder::XAsc), 1);
    }

    #[test]
    fn deactivation_reaches_all_four_indices() {
        let mut win = window(&[(0, 0, 1, 1), (1, 0, 2, 1), (2, 0, 3, 1)]);
        win.split_off(Cut {
            order: ScanOrder::XAsc,
            pos: 1,
        });
        // tile 0 is gone from every order
        for order in ScanOrder::PRIORITY {
            let dead_pos = win.views[order.idx()].pos_of(0);
            assert!(!win.is_live_at(order, dead_pos));
        }
        // the x-ascending aggregate over the full range no longer sees tile 0
        assert_eq!(win.range_agg(ScanOrder::XAsc, 0, 2), 3);
        win.advance_boundaries();
        assert_eq!(win.lo(ScanOrder::XAsc), 1);
        assert_eq!(win.lo(ScanOrder::XDesc), 0);
    }

    #[test]
    fn active_tiles_skips_soft_deleted() {
        let mut win = window(&[(0, 0, 1, 1), (1, 0, 2, 1), (2, 0, 3, 1)]);
        win.split_off(Cut {
            order: ScanOrder::XDesc,
            pos: 1,
        });
        let active = win.active_tiles();
        assert_eq!(active.iter().map(|t| t.id).collect_vec(), vec![0, 1]);
    }
}
