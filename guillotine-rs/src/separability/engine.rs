use log::{debug, trace};

use crate::entities::Tiling;
use crate::geometry::primitives::Rect;
use crate::separability::cut_finder::CutFinder;
use crate::separability::window::SepWindow;

/// Outcome of [`decide`], the verdict plus counters describing the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SepVerdict {
    pub separable: bool,
    /// Cuts applied across all windows
    pub n_cuts: usize,
    /// Stalled windows that were recollected into a fresh one
    pub n_recollects: usize,
    /// Windows built, recollected ones included
    pub n_windows: usize,
    /// Peak size of the work stack
    pub peak_stack: usize,
}

/// Whether `rects` can be recursively separated by full-span guillotine cuts.
/// The rectangles must form an exact tiling of their bounding box, use
/// [`Importer`](crate::io::import::Importer) to verify that precondition for
/// untrusted input.
pub fn is_guillotine_separable(rects: &[Rect]) -> bool {
    decide(&Tiling::new(rects.iter().copied())).separable
}

/// Runs the full decision procedure on `tiling`.
///
/// Windows are processed depth-first from an explicit work stack. After a cut
/// the peeled side is pushed on top of its remainder, so a side that turns
/// out non-separable fails the run before any more of the remainder is
/// probed. A window that yields no cut but has lost tiles since it was built
/// is recollected: its active tiles are rebuilt into a fresh window with
/// compact views. A window that yields no cut and never lost a tile is
/// proof that the tiling is not separable.
pub fn decide(tiling: &Tiling) -> SepVerdict {
    let mut verdict = SepVerdict {
        separable: true,
        n_cuts: 0,
        n_recollects: 0,
        n_windows: 0,
        peak_stack: 0,
    };
    let mut work: Vec<SepWindow> = vec![];
    if tiling.n_tiles() > 1 {
        work.push(SepWindow::build(tiling.tiles.clone()));
        verdict.n_windows = 1;
        verdict.peak_stack = 1;
    }

    while let Some(mut window) = work.pop() {
        if window.n_active <= 1 {
            continue;
        }
        window.advance_boundaries();
        match CutFinder::new(&window).find() {
            Some(cut) => {
                let side = window.split_off(cut);
                verdict.n_cuts += 1;
                trace!(
                    "[SEP] cut in {:?} at position {}: peeled {} tile(s), {} remain",
                    cut.order,
                    cut.pos,
                    side.len(),
                    window.n_active
                );
                work.push(window);
                if side.len() > 1 {
                    work.push(SepWindow::build(side));
                    verdict.n_windows += 1;
                }
            }
            None if window.n_active < window.n_start => {
                debug!(
                    "[SEP] stalled window, recollecting {}/{} tiles",
                    window.n_active, window.n_start
                );
                verdict.n_recollects += 1;
                verdict.n_windows += 1;
                work.push(SepWindow::build(window.active_tiles()));
            }
            None => {
                debug!(
                    "[SEP] window of {} tiles admits no cut, not separable",
                    window.n_active
                );
                verdict.separable = false;
                return verdict;
            }
        }
        verdict.peak_stack = verdict.peak_stack.max(work.len());
    }
    verdict
}
