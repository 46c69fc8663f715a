//! Pseudo-random source used when new objects are created.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform integer draws.
///
/// Sessions draw kind rolls in `[1, 3]` and initial stability in `[50, 100]`.
pub trait RandomSource {
    /// Returns a uniform integer in `low..=high`.
    fn uniform_inclusive(&mut self, low: u32, high: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform_inclusive(&mut self, low: u32, high: u32) -> u32 {
        (**self).uniform_inclusive(low, high)
    }
}

/// `StdRng`-backed source.
#[derive(Debug, Clone)]
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    /// Seeds from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandomSource {
    fn uniform_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}
