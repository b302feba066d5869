//! The external (serializable) representation of tilings.
//! Everything in here is agnostic of the internal representation and puts no
//! constraint on how it is stored on disk, [`crate::io::import`] converts it
//! into validated internal entities.

use serde::{Deserialize, Serialize};

use crate::Coord;

/// External representation of a tiling instance.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtTiling {
    /// Tiles in input order, ids are assigned densely by position
    pub tiles: Vec<ExtRect>,
}

/// External representation of one tile, a closed axis-aligned rectangle
/// given by its diagonal corners.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtRect {
    pub x_min: Coord,
    pub y_min: Coord,
    pub x_max: Coord,
    pub y_max: Coord,
}
