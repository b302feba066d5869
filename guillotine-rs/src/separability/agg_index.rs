use crate::Coord;
use std::marker::PhantomData;

/// Aggregate maintained by an [`AggIndex`] over a range of boundary values.
/// Instantiated exactly twice: [`FarMax`] for the ascending scan orders and
/// [`NearMin`] for the descending ones.
pub trait BoundAgg {
    /// Result of aggregating an empty range.
    /// Soft-deleted leaves contribute this value, so they never influence
    /// live queries.
    const NEUTRAL: Coord;

    fn combine(a: Coord, b: Coord) -> Coord;
}

/// Running max of far boundaries (`x_max`/`y_max`), for ascending orders.
#[derive(Clone, Copy, Debug)]
pub struct FarMax;

impl BoundAgg for FarMax {
    const NEUTRAL: Coord = Coord::MIN;

    #[inline(always)]
    fn combine(a: Coord, b: Coord) -> Coord {
        Coord::max(a, b)
    }
}

/// Running min of near boundaries (`x_min`/`y_min`), for descending orders.
#[derive(Clone, Copy, Debug)]
pub struct NearMin;

impl BoundAgg for NearMin {
    const NEUTRAL: Coord = Coord::MAX;

    #[inline(always)]
    fn combine(a: Coord, b: Coord) -> Coord {
        Coord::min(a, b)
    }
}

/// Augmented range index: a flat, balanced binary tree over the boundary
/// values of one sorted order, answering range-aggregate queries and
/// soft-deleting single leaves in O(log n).
///
/// Leaves sit at `nodes[n..2n)` in sorted-order position; internal node `k`
/// aggregates its children `2k` and `2k + 1`. Soft deletion overwrites the
/// leaf with the aggregate's neutral element; positions never shift.
#[derive(Clone, Debug)]
pub struct AggIndex<A: BoundAgg> {
    n_leaves: usize,
    nodes: Vec<Coord>,
    _agg: PhantomData<A>,
}

impl<A: BoundAgg> AggIndex<A> {
    /// Builds the index bottom-up from the leaf values of one sorted order.
    pub fn build(leaves: impl ExactSizeIterator<Item = Coord>) -> Self {
        let n = leaves.len();
        let mut nodes = vec![A::NEUTRAL; 2 * n];
        for (i, v) in leaves.enumerate() {
            nodes[n + i] = v;
        }
        for k in (1..n).rev() {
            nodes[k] = A::combine(nodes[2 * k], nodes[2 * k + 1]);
        }
        AggIndex {
            n_leaves: n,
            nodes,
            _agg: PhantomData,
        }
    }

    pub fn n_leaves(&self) -> usize {
        self.n_leaves
    }

    /// Aggregate over the closed position range `[l, r]`, skipping
    /// soft-deleted leaves. An empty range (`l > r`) yields the neutral
    /// element: a defined result, not an error.
    pub fn range_agg(&self, l: usize, r: usize) -> Coord {
        if l > r {
            return A::NEUTRAL;
        }
        assert!(
            r < self.n_leaves,
            "range [{l}, {r}] out of bounds for {} leaves",
            self.n_leaves
        );
        let mut res = A::NEUTRAL;
        let mut l = l + self.n_leaves;
        let mut r = r + self.n_leaves + 1;
        while l < r {
            if l & 1 == 1 {
                res = A::combine(res, self.nodes[l]);
                l += 1;
            }
            if r & 1 == 1 {
                r -= 1;
                res = A::combine(res, self.nodes[r]);
            }
            l >>= 1;
            r >>= 1;
        }
        res
    }

    /// Soft-deletes the leaf at `pos`: it contributes the neutral element to
    /// every query from now on. Aggregates along the root path are recomputed.
    pub fn deactivate(&mut self, pos: usize) {
        assert!(
            pos < self.n_leaves,
            "position {pos} out of bounds for {} leaves",
            self.n_leaves
        );
        let mut k = pos + self.n_leaves;
        self.nodes[k] = A::NEUTRAL;
        k >>= 1;
        while k >= 1 {
            self.nodes[k] = A::combine(self.nodes[2 * k], self.nodes[2 * k + 1]);
            k >>= 1;
        }
    }

    /// Current value of the leaf at `pos` (neutral if soft-deleted).
    pub fn leaf(&self, pos: usize) -> Coord {
        self.nodes[pos + self.n_leaves]
    }
}
