//! `rand`-backed random source

use quiz_domain::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform index source over a [`StdRng`]
#[derive(Debug, Clone)]
pub struct RngRandomSource {
    rng: StdRng,
    seed: Option<u64>,
}

impl RngRandomSource {
    /// Source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Deterministic source: the same seed yields the same draws
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Seeded when a seed is given, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RandomSource for RngRandomSource {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}
