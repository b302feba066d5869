use itertools::Itertools;

use crate::entities::Tile;
use crate::separability::scan_order::ScanOrder;

/// One of the four sorted views over a window's tiles.
/// Maps positions in the view to local tile indices and back.
/// Built once per window with a single stable ascending sort, never reordered
/// afterwards. Soft deletion happens in the range indices, not here.
#[derive(Clone, Debug)]
pub struct OrderedView {
    pub order: ScanOrder,
    /// position in the view -> local tile index
    ids: Vec<usize>,
    /// local tile index -> position in the view
    pos_of: Vec<usize>,
}

impl OrderedView {
    pub fn build(order: ScanOrder, tiles: &[Tile]) -> Self {
        let ids = (0..tiles.len())
            .sorted_by_key(|&i| order.sort_key(&tiles[i].rect))
            .collect_vec();
        let mut pos_of = vec![0; tiles.len()];
        for (pos, &local) in ids.iter().enumerate() {
            pos_of[local] = pos;
        }
        Self { order, ids, pos_of }
    }

    /// Local index of the tile at position `pos` of the view.
    #[inline(always)]
    pub fn id_at(&self, pos: usize) -> usize {
        self.ids[pos]
    }

    /// Position of the tile with local index `local` in the view.
    #[inline(always)]
    pub fn pos_of(&self, local: usize) -> usize {
        self.pos_of[local]
    }

    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
