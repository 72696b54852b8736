//! Random sources used to shuffle rosters during pair formation.
//!
//! Formation logic never reaches for a global RNG; it receives a [`RandomSource`] so tests can
//! substitute a seeded generator and get reproducible pairings.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

pub trait RandomSource {
    /// Uniformly permutes `items` in place.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Returns a uniformly permuted copy of `items`.
    fn shuffled<T>(&mut self, mut items: Vec<T>) -> Vec<T> {
        self.shuffle(&mut items);
        items
    }
}

impl<R: RandomSource> RandomSource for &mut R {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        (**self).shuffle(items)
    }
}

/// Thread-local RNG, used in production.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut rand::rng());
    }
}

/// Seeded RNG producing the same permutations for the same seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}
