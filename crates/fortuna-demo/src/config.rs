//! Demo configuration read from the environment.

use fortuna_core::{RandomUtility, StdRandom};

use crate::error::DemoError;

/// Default length of the demo sequence.
pub const DEFAULT_POOL_SIZE: usize = 10;
/// Default number of elements each sampler takes.
pub const DEFAULT_SAMPLE_SIZE: usize = 3;

/// Resolved demo settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    /// Generator seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// The demo sequence is `1..=pool_size`.
    pub pool_size: usize,
    /// `k` for both samplers.
    pub sample_size: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pool_size: DEFAULT_POOL_SIZE,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl DemoConfig {
    /// Reads `FORTUNA_SEED`, `FORTUNA_POOL_SIZE` and `FORTUNA_SAMPLE_SIZE`.
    ///
    /// # Errors
    ///
    /// Returns `DemoError::Config` if a value does not parse or the sample
    /// size exceeds the pool size.
    pub fn from_env() -> Result<Self, DemoError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `DemoError::Config` if a value does not parse or the sample
    /// size exceeds the pool size.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DemoError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = parse_var(&lookup, "FORTUNA_SEED")?;
        let pool_size = parse_var(&lookup, "FORTUNA_POOL_SIZE")?.unwrap_or(DEFAULT_POOL_SIZE);
        let sample_size =
            parse_var(&lookup, "FORTUNA_SAMPLE_SIZE")?.unwrap_or(DEFAULT_SAMPLE_SIZE);

        if sample_size > pool_size {
            return Err(DemoError::Config(format!(
                "FORTUNA_SAMPLE_SIZE ({sample_size}) must not exceed FORTUNA_POOL_SIZE ({pool_size})"
            )));
        }

        Ok(Self {
            seed,
            pool_size,
            sample_size,
        })
    }

    /// Builds the generator facade this configuration asks for.
    #[must_use]
    pub fn utility(&self) -> RandomUtility<StdRandom> {
        match self.seed {
            Some(seed) => RandomUtility::seeded(seed),
            None => RandomUtility::from_entropy(),
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, DemoError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| DemoError::Config(format!("{key} is invalid: {e}"))),
    }
}
