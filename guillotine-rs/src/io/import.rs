use anyhow::{Result, bail, ensure};
use itertools::Itertools;
use log::warn;

use crate::entities::Tiling;
use crate::geometry::primitives::{Point, Rect};
use crate::io::ext_repr::ExtTiling;

/// Converts external tilings into validated internal [`Tiling`]s.
/// All precondition checking lives here, the engine itself trusts its input.
#[derive(Clone, Copy, Debug)]
pub struct Importer {
    /// Verify that the input is an exact tiling of its bounding box.
    /// Quadratic in the number of tiles, disable for very large instances.
    pub validate_tiling: bool,
}

impl Importer {
    pub fn new(validate_tiling: bool) -> Importer {
        Importer { validate_tiling }
    }

    /// External rectangles are read as diagonal corner pairs: reversed bounds
    /// normalize, degenerate rectangles are rejected.
    pub fn import_tiling(&self, ext_tiling: &ExtTiling) -> Result<Tiling> {
        if ext_tiling.tiles.is_empty() {
            warn!("[IMPORT] empty tiling, trivially separable");
        }
        let rects = ext_tiling
            .tiles
            .iter()
            .map(|ext| {
                Rect::from_diagonal_corners(
                    Point(ext.x_min, ext.y_min),
                    Point(ext.x_max, ext.y_max),
                )
            })
            .collect::<Result<Vec<_>>>()?;
        if self.validate_tiling {
            if rects.len() > 10_000 {
                warn!(
                    "[IMPORT] validating an exact tiling of {} tiles is quadratic, consider disabling it",
                    rects.len()
                );
            }
            validate_exact_tiling(&rects)?;
        }
        Ok(Tiling::new(rects))
    }
}

/// Checks the engine's precondition: pairwise interior-disjoint rectangles
/// whose areas sum to the area of their common bounding box, so no overlaps
/// and no gaps.
pub fn validate_exact_tiling(rects: &[Rect]) -> Result<()> {
    let Some(&first) = rects.first() else {
        return Ok(());
    };
    for ((i, a), (j, b)) in rects.iter().enumerate().tuple_combinations() {
        if let Some(region) = Rect::intersection(*a, *b) {
            bail!("tiles {i} and {j} overlap in {region:?}");
        }
    }
    let bbox = rects
        .iter()
        .skip(1)
        .fold(first, |acc, &rect| Rect::bounding_rect(acc, rect));
    let covered: i128 = rects.iter().map(|rect| rect.area()).sum();
    ensure!(
        covered == bbox.area(),
        "tiles cover area {covered} but their bounding box has area {}, the tiling has gaps",
        bbox.area()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ext_repr::ExtRect;

    fn ext(tiles: &[(i64, i64, i64, i64)]) -> ExtTiling {
        ExtTiling {
            tiles: tiles
                .iter()
                .map(|&(x_min, y_min, x_max, y_max)| ExtRect {
                    x_min,
                    y_min,
                    x_max,
                    y_max,
                })
                .collect(),
        }
    }

    #[test]
    fn accepts_an_exact_tiling() {
        let tiling = Importer::new(true)
            .import_tiling(&ext(&[(0, 0, 2, 1), (0, 1, 2, 2)]))
            .unwrap();
        assert_eq!(tiling.n_tiles(), 2);
    }

    #[test]
    fn rejects_degenerate_rectangles() {
        assert!(
            Importer::new(false)
                .import_tiling(&ext(&[(0, 0, 0, 1)]))
                .is_err()
        );
    }

    #[test]
    fn reversed_corners_are_normalized() {
        let tiling = Importer::new(true)
            .import_tiling(&ext(&[(2, 1, 0, 0), (0, 1, 2, 2)]))
            .unwrap();
        assert_eq!(tiling.tile(0).rect, Rect::try_new(0, 0, 2, 1).unwrap());
    }

    #[test]
    fn overlap_errors_name_the_shared_region() {
        let result = Importer::new(true).import_tiling(&ext(&[(0, 0, 2, 2), (1, 0, 3, 2)]));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("overlap"));
        assert!(message.contains("x_min: 1"));
        assert!(message.contains("x_max: 2"));
    }

    #[test]
    fn rejects_gaps() {
        let result = Importer::new(true).import_tiling(&ext(&[(0, 0, 1, 2), (2, 0, 3, 2)]));
        assert!(result.unwrap_err().to_string().contains("gaps"));
    }

    #[test]
    fn edge_sharing_is_not_an_overlap() {
        assert!(validate_exact_tiling(&[
            Rect::try_new(0, 0, 1, 1).unwrap(),
            Rect::try_new(1, 0, 2, 1).unwrap(),
        ])
        .is_ok());
    }
}
