use crate::geometry::primitives::Rect;
use crate::util::assertions;
use itertools::Itertools;

/// A rectangle of a [`Tiling`], together with its identity.
/// The `id` is stable: it survives sorting, windowing and recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: usize,
    pub rect: Rect,
}

/// A `Tiling` is the static (unmodifiable) representation of a problem instance:
/// a set of axis-aligned rectangles assumed to exactly tile a bounded region.
/// The engine never re-validates this precondition; see
/// [`Importer`](crate::io::import::Importer) for the layer that does.
#[derive(Debug, Clone, Default)]
pub struct Tiling {
    /// Tiles of the instance, `tiles[i].id == i`
    pub tiles: Vec<Tile>,
}

impl Tiling {
    /// Wraps a set of rectangles into a tiling, assigning dense ids in input order.
    pub fn new(rects: impl IntoIterator<Item = Rect>) -> Self {
        let tiles = rects
            .into_iter()
            .enumerate()
            .map(|(id, rect)| Tile { id, rect })
            .collect_vec();
        debug_assert!(assertions::tile_ids_are_dense(&tiles));
        Tiling { tiles }
    }

    pub fn tile(&self, id: usize) -> &Tile {
        &self.tiles[id]
    }

    pub fn n_tiles(&self) -> usize {
        self.tiles.len()
    }
}
