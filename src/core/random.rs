//! Injectable random source
//!
//! Every random decision (corpus shuffle, round selection, scrambling) goes
//! through `RandomSource` so sessions can be replayed deterministically.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A uniform integer generator
pub trait RandomSource {
    /// Return a uniformly distributed index in `0..upper`
    ///
    /// Callers never pass `upper == 0`.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Shuffle a slice in place (Fisher-Yates)
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// `RandomSource` backed by `StdRng`
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Seed from operating system entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seed deterministically
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build from an optional seed, falling back to entropy
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}
