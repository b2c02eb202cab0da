//! Uniform sampling of solvable cube states.
//!
//! Orientations are drawn directly. The two permutation coordinates are drawn
//! together and redrawn until their parities agree; a rejected pair is thrown
//! away whole, which keeps the accepted pairs uniform. About half of all pairs
//! are accepted, so a draw takes two attempts on average.

use cube_core::errors::CubeError;
use cube_core::rng::RngHandle;
use cube_core::{N_FLIP, N_TWIST, N_UR_TO_BR, N_URF_TO_DLB};
use cube_cubie::CubieCube;
use rand::Rng;
use tracing::trace;

/// One accepted sample together with the number of permutation attempts it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// Sampled state.
    pub cube: CubieCube,
    /// Permutation pairs drawn, including the accepted one.
    pub attempts: u32,
}

/// Generator of uniformly random solvable cube states.
#[derive(Debug, Clone)]
pub struct RandomStateGenerator<R = RngHandle> {
    rng: R,
}

impl RandomStateGenerator<RngHandle> {
    /// Generator backed by operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(RngHandle::from_entropy())
    }

    /// Reproducible generator.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(RngHandle::from_seed(seed))
    }
}

impl Default for RandomStateGenerator<RngHandle> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> RandomStateGenerator<R> {
    /// Generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Hands back the random source.
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Draws a state and reports how many permutation pairs were rejected on the way.
    pub fn draw(&mut self) -> Result<Draw, CubeError> {
        let mut cube = CubieCube::solved();
        cube.set_flip(self.rng.gen_range(0..N_FLIP))?;
        cube.set_twist(self.rng.gen_range(0..N_TWIST))?;

        let mut attempts = 0u32;
        loop {
            attempts += 1;
            cube.set_urf_to_dlb(self.rng.gen_range(0..N_URF_TO_DLB))?;
            cube.set_ur_to_br(self.rng.gen_range(0..N_UR_TO_BR))?;
            if cube.edge_parity() ^ cube.corner_parity() == 0 {
                break;
            }
        }
        trace!(attempts, "accepted permutation pair");
        Ok(Draw { cube, attempts })
    }

    /// Draws a state on the cubie level.
    pub fn random_cubie(&mut self) -> Result<CubieCube, CubeError> {
        Ok(self.draw()?.cube)
    }

    /// Draws a state and renders its surface encoding.
    pub fn random_state(&mut self) -> Result<String, CubeError> {
        Ok(self.random_cubie()?.to_face_cube().to_string())
    }
}

/// Surface encoding of a uniformly random solvable cube, using the
/// process-default random source.
pub fn random_cube() -> Result<String, CubeError> {
    RandomStateGenerator::from_entropy().random_state()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_cubie::Verdict;

    #[test]
    fn draws_are_solvable() {
        let mut generator = RandomStateGenerator::from_seed(7);
        for _ in 0..200 {
            let draw = generator.draw().unwrap();
            assert!(draw.attempts >= 1);
            assert_eq!(draw.cube.verify(), Verdict::Solvable);
        }
    }

    #[test]
    fn entropy_backed_cube_is_well_formed() {
        let encoding = random_cube().unwrap();
        assert_eq!(encoding.chars().count(), 54);
    }
}
