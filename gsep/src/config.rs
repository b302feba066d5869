use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the gsep CLI
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct GsepConfig {
    /// Verify that the input is an exact tiling of its bounding box before deciding.
    /// Quadratic in the number of tiles, disable for very large instances
    pub validate_input: bool,
    /// Re-decide the instance with the naive reference checker and a shuffled
    /// rerun of the engine, and fail on any disagreement
    pub cross_check: bool,
    /// Seed for the PRNG driving the shuffled rerun. If undefined, the shuffle
    /// is non-deterministic using entropy
    pub prng_seed: Option<u64>,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for GsepConfig {
    fn default() -> Self {
        Self {
            validate_input: true,
            cross_check: false,
            prng_seed: Some(0),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
