use std::time::Duration;

use serde::{Deserialize, Serialize};

use guillotine_rs::io::ext_repr::ExtTiling;
use guillotine_rs::separability::SepVerdict;

use crate::config::GsepConfig;

/// Standardized output of a gsep run
#[derive(Serialize, Deserialize, Clone)]
pub struct GsepOutput {
    #[serde(flatten)]
    pub instance: ExtTiling,
    pub report: SepReport,
    pub config: GsepConfig,
}

/// The verdict and the run statistics behind it
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct SepReport {
    pub separable: bool,
    pub n_tiles: usize,
    pub n_cuts: usize,
    pub n_recollects: usize,
    pub n_windows: usize,
    pub peak_stack: usize,
    pub run_time_ms: u64,
}

impl SepReport {
    pub fn new(n_tiles: usize, verdict: SepVerdict, run_time: Duration) -> Self {
        Self {
            separable: verdict.separable,
            n_tiles,
            n_cuts: verdict.n_cuts,
            n_recollects: verdict.n_recollects,
            n_windows: verdict.n_windows,
            peak_stack: verdict.peak_stack,
            run_time_ms: run_time.as_millis() as u64,
        }
    }
}
