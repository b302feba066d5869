mod agg_index;
mod cut_finder;
mod engine;
mod ordered_view;
mod scan_order;
mod window;

/// Rebuild-per-call reference checker, for differential testing
pub mod reference;

#[doc(inline)]
pub use agg_index::AggIndex;
#[doc(inline)]
pub use agg_index::BoundAgg;
#[doc(inline)]
pub use agg_index::FarMax;
#[doc(inline)]
pub use agg_index::NearMin;
#[doc(inline)]
pub use cut_finder::Cut;
#[doc(inline)]
pub use cut_finder::CutFinder;
#[doc(inline)]
pub use engine::SepVerdict;
#[doc(inline)]
pub use engine::decide;
#[doc(inline)]
pub use engine::is_guillotine_separable;
#[doc(inline)]
pub use ordered_view::OrderedView;
#[doc(inline)]
pub use scan_order::ScanOrder;
#[doc(inline)]
pub use window::SepWindow;
