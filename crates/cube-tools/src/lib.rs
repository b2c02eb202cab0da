#![deny(missing_docs)]
#![doc = "Solvability checks, uniform random cube states, and persistence of the lookup tables used by the solver."]

pub mod codec;
pub mod config;
pub mod random;
pub mod storage;
pub mod tables;
pub mod validate;

pub use codec::{DecodedTable, TableElement};
pub use config::StorageConfig;
pub use random::{random_cube, Draw, RandomStateGenerator};
pub use storage::StorageLocation;
pub use tables::{Table2D, TableStore};
pub use validate::{verify, verify_code};

pub use cube_core::{CubeError, ErrorInfo, RngHandle};
pub use cube_cubie::Verdict;
