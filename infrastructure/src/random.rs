//! Random sources for persona and model selection.

use ideaforge_domain::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Thread-local OS-seeded generator
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper.max(1))
    }
}

/// Reproducible generator for `--seed` runs.
///
/// Shared by every session of the process, so concurrent sessions draw
/// from one interleaved sequence.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&self, upper: usize) -> usize {
        let upper = upper.max(1);
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..upper),
            Err(poisoned) => poisoned.into_inner().gen_range(0..upper),
        }
    }
}
