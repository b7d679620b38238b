//! Random number generation provider abstraction.
//!
//! Chaos actions pick their targets through a [`RandomProvider`] handle
//! instead of ambient global state, so a run can be replayed from its seed.

use rand::distr::{Distribution, StandardUniform, uniform::SampleUniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::Range;
use std::sync::{Arc, Mutex, PoisonError};

/// Provider trait for random number generation.
///
/// Implementations must be safe to share between concurrently running
/// actions.
pub trait RandomProvider: Clone + Send + Sync {
    /// Generate a random value of type T.
    fn random<T>(&self) -> T
    where
        StandardUniform: Distribution<T>;

    /// Generate a random value within a specified range.
    ///
    /// The range is exclusive of the upper bound (start..end) and must not
    /// be empty.
    fn random_range<T>(&self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd;
}

/// Deterministic random provider backed by a seeded ChaCha8 generator.
///
/// Clones share the same generator, so every action holding a clone draws
/// from a single reproducible stream. The lock is held for one sample only.
#[derive(Debug, Clone)]
pub struct SeededRandomProvider {
    seed: u64,
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl SeededRandomProvider {
    /// Create a provider seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))),
        }
    }

    /// Seed this provider was created with, for reproducing a run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *rng)
    }
}

impl RandomProvider for SeededRandomProvider {
    fn random<T>(&self) -> T
    where
        StandardUniform: Distribution<T>,
    {
        self.with_rng(|rng| rng.random())
    }

    fn random_range<T>(&self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.with_rng(|rng| rng.random_range(range))
    }
}
