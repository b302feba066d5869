use crate::Coord;
use crate::geometry::primitives::Rect;

/// The four sorted orders in which the engine scans for a cut.
/// Ascending orders are anchored at the near side of the window,
/// descending orders at the far side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanOrder {
    /// Sorted by `x_min` ascending, cut peels the leftmost block
    XAsc,
    /// Sorted by `y_min` ascending, cut peels the bottommost block
    YAsc,
    /// Sorted by `x_max` descending, cut peels the rightmost block
    XDesc,
    /// Sorted by `y_max` descending, cut peels the topmost block
    YDesc,
}

impl ScanOrder {
    /// Probe priority: when multiple orders admit a cut at the same probe
    /// step, the first of these wins.
    pub const PRIORITY: [ScanOrder; 4] = [
        ScanOrder::XAsc,
        ScanOrder::YAsc,
        ScanOrder::XDesc,
        ScanOrder::YDesc,
    ];

    /// Key the order sorts by.
    /// For descending orders the key is negated, so that every view can be
    /// built with a single ascending sort.
    #[inline(always)]
    pub fn sort_key(&self, rect: &Rect) -> Coord {
        match self {
            ScanOrder::XAsc => rect.x_min,
            ScanOrder::YAsc => rect.y_min,
            ScanOrder::XDesc => -rect.x_max,
            ScanOrder::YDesc => -rect.y_max,
        }
    }

    /// Key aggregated over the leaves of the order's range index:
    /// the far boundary for ascending orders (running max),
    /// the near boundary for descending orders (running min).
    #[inline(always)]
    pub fn agg_key(&self, rect: &Rect) -> Coord {
        match self {
            ScanOrder::XAsc => rect.x_max,
            ScanOrder::YAsc => rect.y_max,
            ScanOrder::XDesc => rect.x_min,
            ScanOrder::YDesc => rect.y_min,
        }
    }

    /// Boundary of the rectangle that a cut candidate at this order is
    /// compared against: the near boundary for ascending orders, the far
    /// boundary for descending ones.
    #[inline(always)]
    pub fn probe_key(&self, rect: &Rect) -> Coord {
        match self {
            ScanOrder::XAsc => rect.x_min,
            ScanOrder::YAsc => rect.y_min,
            ScanOrder::XDesc => rect.x_max,
            ScanOrder::YDesc => rect.y_max,
        }
    }

    /// `true` for the two orders whose aggregate is a running max over far
    /// boundaries, `false` for the running-min orders.
    #[inline(always)]
    pub fn is_ascending(&self) -> bool {
        matches!(self, ScanOrder::XAsc | ScanOrder::YAsc)
    }

    pub fn idx(&self) -> usize {
        match self {
            ScanOrder::XAsc => 0,
            ScanOrder::YAsc => 1,
            ScanOrder::XDesc => 2,
            ScanOrder::YDesc => 3,
        }
    }
}
