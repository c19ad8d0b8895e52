//! Random operations over caller-supplied slices: shuffling, picking one
//! element, and sampling without replacement.
//!
//! Two samplers are exposed because their costs diverge. Rejection sampling
//! ([`sample_small_k`]) is cheap while `k` is small relative to the slice
//! length, but collisions grow as `k` approaches `n`. Swap-removal sampling
//! ([`sample_large_k`]) always costs `O(n + k)` and wins when `k` is close
//! to `n`.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::error::RandomError;
use crate::rng::DeterministicRng;

/// Which sampler to use for sampling without replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingStrategy {
    /// Rejection sampling over random indices.
    SmallK,
    /// Swap-removal from a working copy of the positions.
    LargeK,
}

impl SamplingStrategy {
    /// Picks the cheaper sampler: small-k while `k` is at most half of `len`.
    #[must_use]
    pub fn recommended(k: usize, len: usize) -> Self {
        if k <= len / 2 {
            Self::SmallK
        } else {
            Self::LargeK
        }
    }
}

fn check_sample_size(k: usize, len: usize) -> Result<(), RandomError> {
    if k > len {
        return Err(RandomError::InvalidArgument(format!(
            "k must not exceed collection size (k = {k}, size = {len})"
        )));
    }
    Ok(())
}

/// Shuffles `items` in place with the Fisher-Yates algorithm.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn DeterministicRng) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Returns a uniformly chosen element of `items`.
///
/// # Errors
///
/// Returns `RandomError::EmptyCollection` if `items` is empty.
pub fn get_random<'a, T>(
    items: &'a [T],
    rng: &mut dyn DeterministicRng,
) -> Result<&'a T, RandomError> {
    if items.is_empty() {
        return Err(RandomError::EmptyCollection);
    }
    Ok(&items[rng.next_index(items.len())])
}

/// Samples `k` elements from distinct positions of `items` by drawing random
/// indices and rejecting those already taken. Elements are returned in draw
/// order.
///
/// Expected cost is close to `O(k)` for small `k`. As `k` approaches
/// `items.len()` most draws collide; `k == items.len()` is accepted but slow,
/// prefer [`sample_large_k`] there.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if `k > items.len()`.
#[instrument(level = "debug", skip(items, rng), fields(len = items.len()))]
pub fn sample_small_k<T: Clone>(
    items: &[T],
    k: usize,
    rng: &mut dyn DeterministicRng,
) -> Result<Vec<T>, RandomError> {
    check_sample_size(k, items.len())?;

    let mut taken = HashSet::with_capacity(k);
    let mut indices = Vec::with_capacity(k);
    let mut rejected = 0_usize;
    while indices.len() < k {
        let index = rng.next_index(items.len());
        if taken.insert(index) {
            indices.push(index);
        } else {
            rejected += 1;
        }
    }

    debug!(rejected, "small-k sample drawn");
    Ok(indices.into_iter().map(|i| items[i].clone()).collect())
}

/// Samples `k` elements from distinct positions of `items` by repeatedly
/// picking a random remaining position and swap-removing it from a working
/// copy. `items` itself is left untouched.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if `k > items.len()`.
#[instrument(level = "debug", skip(items, rng), fields(len = items.len()))]
pub fn sample_large_k<T: Clone>(
    items: &[T],
    k: usize,
    rng: &mut dyn DeterministicRng,
) -> Result<Vec<T>, RandomError> {
    check_sample_size(k, items.len())?;

    let mut remaining: Vec<usize> = (0..items.len()).collect();
    let mut sample = Vec::with_capacity(k);
    for _ in 0..k {
        let pick = rng.next_index(remaining.len());
        let index = remaining.swap_remove(pick);
        sample.push(items[index].clone());
    }

    debug!("large-k sample drawn");
    Ok(sample)
}

/// Samples `k` elements without replacement using the given strategy.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if `k > items.len()`.
pub fn sample<T: Clone>(
    items: &[T],
    k: usize,
    strategy: SamplingStrategy,
    rng: &mut dyn DeterministicRng,
) -> Result<Vec<T>, RandomError> {
    match strategy {
        SamplingStrategy::SmallK => sample_small_k(items, k, rng),
        SamplingStrategy::LargeK => sample_large_k(items, k, rng),
    }
}
