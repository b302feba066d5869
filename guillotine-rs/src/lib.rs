//! Decides whether an exact rectangle tiling can be produced by a sequence of
//! guillotine cuts: straight cuts spanning the full width or height of the
//! sub-region they are applied to, never crossing the interior of any tile.

/// Entities to model a rectangle tiling instance
pub mod entities;

/// Geometric primitives
pub mod geometry;

/// Importing tiling instances into the library
pub mod io;

/// The guillotine-separability engine and its supporting structures
pub mod separability;

/// Helper functions which do not belong to any specific module
pub mod util;

/// The numeric type used for all coordinates.
pub type Coord = i64;
