//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! The whole run draws from a single `SmallRng` seeded from
//! [`FleetConfig::seed`](crate::FleetConfig::seed).  Draw order is fixed:
//!
//! 1. initial placement (vehicles first, then containers);
//! 2. each step, one Bernoulli draw per *empty* container, in ascending
//!    `ContainerId` order.
//!
//! Everything else in a step is deterministic, so the same seed and
//! configuration always replay the same snapshot stream.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The simulation's random source.
///
/// Threaded explicitly through setup and the fill phase; nothing in the
/// workspace touches a thread-local or global generator.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// `amount` distinct indices drawn uniformly from `0..length`.
    ///
    /// # Panics
    /// Panics if `amount > length`; callers check availability first.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, length, amount).into_vec()
    }
}
