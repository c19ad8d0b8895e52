//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a seeded or entropy-backed `StdRng`. In tests,
//! a scripted implementation is injected.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::RandomError;

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    ///
    /// Callers guarantee `min <= max`.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;

    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Generate a random index in `[0, len)`. Callers guarantee `len > 0`.
    ///
    /// The provided implementation draws through `next_u32_range` and so
    /// covers at most `2^32` positions. Longer lengths trip a debug
    /// assertion; release builds saturate at index `u32::MAX`. Generators
    /// meant for larger slices override this method.
    fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "next_index requires a non-empty range");
        let last = len.saturating_sub(1);
        debug_assert!(
            u32::try_from(last).is_ok(),
            "default next_index covers at most 2^32 positions, got len = {len}"
        );
        let max = u32::try_from(last).unwrap_or(u32::MAX);
        self.next_u32_range(0, max) as usize
    }
}

/// A generator shared between threads. Lock it around each synchronous call.
pub type SharedRng = Arc<Mutex<dyn DeterministicRng + Send>>;

/// Wraps a generator into a [`SharedRng`].
#[must_use]
pub fn share<R: DeterministicRng + 'static>(rng: R) -> SharedRng {
    Arc::new(Mutex::new(rng))
}

/// Runs `f` with exclusive access to a shared generator.
///
/// # Errors
///
/// Returns `RandomError::GeneratorPoisoned` if another holder panicked while
/// the lock was held.
pub fn with_shared<T>(
    rng: &Mutex<dyn DeterministicRng + Send>,
    f: impl FnOnce(&mut dyn DeterministicRng) -> T,
) -> Result<T, RandomError> {
    let mut guard = rng
        .lock()
        .map_err(|e| RandomError::GeneratorPoisoned(e.to_string()))?;
    Ok(f(&mut *guard))
}

/// Production generator backed by `rand`'s `StdRng`.
#[derive(Debug, Clone)]
pub struct StdRandom {
    inner: StdRng,
}

impl StdRandom {
    /// Creates a generator seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }

    /// Creates a generator from a fixed seed. The same seed yields the same
    /// sequence within one build.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl DeterministicRng for StdRandom {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.inner.random_range(min..=max)
    }

    fn next_f64(&mut self) -> f64 {
        self.inner.random::<f64>()
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.inner.random_range(0..len)
    }
}
