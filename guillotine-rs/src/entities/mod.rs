mod tiling;

#[doc(inline)]
pub use tiling::Tile;

#[doc(inline)]
pub use tiling::Tiling;
