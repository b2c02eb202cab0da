#![deny(missing_docs)]
#![doc = "Facelet and cubie level model of the 3x3x3 cube: surface encodings, coordinates, parity, and the structural consistency check."]

mod color;
mod cubie;
mod facelet;
mod verdict;

pub use color::Color;
pub use cubie::{Corner, CubieCube, Edge};
pub use facelet::{FaceCube, FACELET_COUNT, SOLVED_FACELETS};
pub use verdict::Verdict;
