#![deny(missing_docs)]
#![doc = "Core types shared by the cube toolkit crates: structured errors, the RNG handle, and coordinate ranges."]

pub mod coords;
pub mod errors;
pub mod rng;

pub use coords::{N_FLIP, N_TWIST, N_URF_TO_DLB, N_UR_TO_BR};
pub use errors::{CubeError, ErrorInfo};
pub use rng::RngHandle;
