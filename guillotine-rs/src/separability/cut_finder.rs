use crate::separability::scan_order::ScanOrder;
use crate::separability::window::SepWindow;
use crate::util::assertions;

/// A valid full-span cut located by the [`CutFinder`].
/// The active tiles at positions `[lo(order), pos)` of `order` form the
/// separated side, the tile at `pos` is the first one beyond the cut line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cut {
    pub order: ScanOrder,
    pub pos: usize,
}

/// Searches a window for a valid cut by probing all four orders in lockstep.
///
/// Every order scans with two pointers that expand outward from a hint in the
/// middle of its active position range, one pointer walking down, one walking
/// up. Per round each order advances by one active candidate, in
/// [`ScanOrder::PRIORITY`] order, and the first candidate that passes its
/// order's boundary test wins. A candidate position `p` passes if every
/// active tile before it stays on the near side of the cut line through its
/// probe boundary:
///
/// * ascending orders: `max(far boundaries of [lo, p)) <= near boundary at p`
/// * descending orders: `min(near boundaries of [lo, p)) >= far boundary at p`
///
/// Exhausting all four orders without a hit means the window admits no cut
/// in its current state.
pub struct CutFinder<'a> {
    window: &'a SepWindow,
    scans: [OrderScan; 4],
}

impl<'a> CutFinder<'a> {
    pub fn new(window: &'a SepWindow) -> Self {
        debug_assert!(assertions::boundaries_settled(window));
        Self {
            window,
            scans: ScanOrder::PRIORITY.map(|order| OrderScan::new(window, order)),
        }
    }

    pub fn find(mut self) -> Option<Cut> {
        loop {
            let mut exhausted = true;
            for scan in self.scans.iter_mut() {
                if let Some(pos) = scan.next_candidate(self.window) {
                    exhausted = false;
                    if admits_cut(self.window, scan.order, scan.lo, pos) {
                        return Some(Cut {
                            order: scan.order,
                            pos,
                        });
                    }
                }
            }
            if exhausted {
                return None;
            }
        }
    }
}

/// Two-pointer scan state of a single order.
#[derive(Clone, Copy, Debug)]
struct OrderScan {
    order: ScanOrder,
    /// First active position of the order, candidates lie strictly beyond it
    lo: usize,
    /// Next candidate of the downward pointer (inclusive)
    down: usize,
    /// Next candidate of the upward pointer (inclusive)
    up: usize,
    n_leaves: usize,
    probe_down: bool,
}

impl OrderScan {
    fn new(window: &SepWindow, order: ScanOrder) -> Self {
        let lo = window.lo(order);
        let n_leaves = window.n_leaves();
        let hint = usize::midpoint(lo, n_leaves);
        Self {
            order,
            lo,
            down: hint,
            up: hint + 1,
            n_leaves,
            probe_down: false,
        }
    }

    /// Next unprobed active position, alternating between the two pointers.
    /// Falls back to the other pointer once one side is exhausted.
    fn next_candidate(&mut self, window: &SepWindow) -> Option<usize> {
        for _ in 0..2 {
            self.probe_down = !self.probe_down;
            if self.probe_down {
                while self.down > self.lo {
                    let pos = self.down;
                    self.down -= 1;
                    if window.is_live_at(self.order, pos) {
                        return Some(pos);
                    }
                }
            } else {
                while self.up < self.n_leaves {
                    let pos = self.up;
                    self.up += 1;
                    if window.is_live_at(self.order, pos) {
                        return Some(pos);
                    }
                }
            }
        }
        None
    }
}

fn admits_cut(window: &SepWindow, order: ScanOrder, lo: usize, pos: usize) -> bool {
    let boundary = order.probe_key(&window.tile_at(order, pos).rect);
    let agg = window.range_agg(order, lo, pos - 1);
    match order.is_ascending() {
        true => agg <= boundary,
        false => agg >= boundary,
    }
}
