//! `RandomUtility` — one owned generator behind every random helper.

use crate::collections::{self, SamplingStrategy};
use crate::error::RandomError;
use crate::numeric;
use crate::rng::{DeterministicRng, StdRandom};

/// Facade owning a generator and exposing the numeric and collection helpers
/// as methods.
///
/// Not synchronized: share across threads through a
/// [`SharedRng`](crate::rng::SharedRng) and the free functions instead.
#[derive(Debug, Clone)]
pub struct RandomUtility<R: DeterministicRng = StdRandom> {
    rng: R,
}

impl RandomUtility<StdRandom> {
    /// Creates a utility backed by an entropy-seeded `StdRandom`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRandom::from_entropy())
    }

    /// Creates a utility backed by a `StdRandom` with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRandom::seeded(seed))
    }
}

impl Default for RandomUtility<StdRandom> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: DeterministicRng> RandomUtility<R> {
    /// Wraps an existing generator.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Mutable access to the underlying generator.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Returns the underlying generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// See [`numeric::next_int`].
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidArgument` if `max_exclusive <= min`.
    pub fn next_int(&mut self, min: i32, max_exclusive: i32) -> Result<i32, RandomError> {
        numeric::next_int(&mut self.rng, min, max_exclusive)
    }

    /// See [`numeric::next_int_below`].
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidArgument` if `max_exclusive <= 0`.
    pub fn next_int_below(&mut self, max_exclusive: i32) -> Result<i32, RandomError> {
        numeric::next_int_below(&mut self.rng, max_exclusive)
    }

    /// Returns a double in `[0.0, 1.0)`.
    pub fn next_double(&mut self) -> f64 {
        numeric::next_double(&mut self.rng)
    }

    /// See [`numeric::next_double_between`].
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidArgument` for non-finite or inverted bounds.
    pub fn next_double_between(&mut self, min: f64, max: f64) -> Result<f64, RandomError> {
        numeric::next_double_between(&mut self.rng, min, max)
    }

    /// Returns a float in `[0.0, 1.0)`.
    pub fn next_float(&mut self) -> f32 {
        numeric::next_float(&mut self.rng)
    }

    /// See [`numeric::next_float_between`].
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidArgument` for non-finite or inverted bounds.
    pub fn next_float_between(&mut self, min: f32, max: f32) -> Result<f32, RandomError> {
        numeric::next_float_between(&mut self.rng, min, max)
    }

    /// Flips a fair coin.
    pub fn coin(&mut self) -> bool {
        numeric::coin(&mut self.rng)
    }

    /// See [`numeric::percent_chance`].
    pub fn percent_chance(&mut self, percent: i32) -> bool {
        numeric::percent_chance(&mut self.rng, percent)
    }

    /// Shuffles `items` in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        collections::shuffle(items, &mut self.rng);
    }

    /// See [`collections::get_random`].
    ///
    /// # Errors
    ///
    /// Returns `RandomError::EmptyCollection` if `items` is empty.
    pub fn get_random<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, RandomError> {
        collections::get_random(items, &mut self.rng)
    }

    /// See [`collections::sample_small_k`].
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidArgument` if `k > items.len()`.
    pub fn sample_small_k<T: Clone>(
        &mut self,
        items: &[T],
        k: usize,
    ) -> Result<Vec<T>, RandomError> {
        collections::sample_small_k(items, k, &mut self.rng)
    }

    /// See [`collections::sample_large_k`].
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidArgument` if `k > items.len()`.
    pub fn sample_large_k<T: Clone>(
        &mut self,
        items: &[T],
        k: usize,
    ) -> Result<Vec<T>, RandomError> {
        collections::sample_large_k(items, k, &mut self.rng)
    }

    /// See [`collections::sample`].
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidArgument` if `k > items.len()`.
    pub fn sample<T: Clone>(
        &mut self,
        items: &[T],
        k: usize,
        strategy: SamplingStrategy,
    ) -> Result<Vec<T>, RandomError> {
        collections::sample(items, k, strategy, &mut self.rng)
    }
}
