pub mod assertions;
pub mod generator;
