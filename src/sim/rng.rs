//! Injectable randomness
//!
//! The simulation never touches a global RNG. Anything that needs a random
//! choice takes a `RandomSource`, so a match can be replayed from its seed
//! and tests can script exact sequences.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniformly distributed choices
pub trait RandomSource {
    /// Uniform value in `0..bound` (`bound` is never zero)
    fn next_index(&mut self, bound: u32) -> u32;
}

/// Seeded PCG generator used by real matches
#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    rng: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn next_index(&mut self, bound: u32) -> u32 {
        self.rng.random_range(0..bound)
    }
}
