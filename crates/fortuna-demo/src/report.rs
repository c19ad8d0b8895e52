//! The demo run and its JSON report.

use fortuna_core::{DeterministicRng, RandomUtility};
use serde::Serialize;
use tracing::{info, instrument};

use crate::config::DemoConfig;
use crate::error::DemoError;

/// Everything the demo produced in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    /// Seed the generator was built from, if any.
    pub seed: Option<u64>,
    /// Result of a single coin flip.
    pub coin: bool,
    /// The sequence `1..=pool_size` after shuffling.
    pub shuffled: Vec<usize>,
    /// Sample taken from the shuffled sequence by rejection sampling.
    pub small_k_sample: Vec<usize>,
    /// Sample taken from the shuffled sequence by swap-removal.
    pub large_k_sample: Vec<usize>,
}

impl DemoReport {
    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `DemoError::Output` if serialization fails.
    pub fn to_json(&self) -> Result<String, DemoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Flips a coin, shuffles `1..=pool_size`, then samples `sample_size`
/// elements with both strategies.
///
/// # Errors
///
/// Returns `DemoError::Random` if the sample size exceeds the pool size.
#[instrument(skip(utility), fields(seed = ?config.seed))]
pub fn run<R: DeterministicRng>(
    config: &DemoConfig,
    utility: &mut RandomUtility<R>,
) -> Result<DemoReport, DemoError> {
    let coin = utility.coin();

    let mut shuffled: Vec<usize> = (1..=config.pool_size).collect();
    utility.shuffle(&mut shuffled);

    let small_k_sample = utility.sample_small_k(&shuffled, config.sample_size)?;
    let large_k_sample = utility.sample_large_k(&shuffled, config.sample_size)?;

    info!(
        pool_size = config.pool_size,
        sample_size = config.sample_size,
        "demo run complete"
    );

    Ok(DemoReport {
        seed: config.seed,
        coin,
        shuffled,
        small_k_sample,
        large_k_sample,
    })
}
