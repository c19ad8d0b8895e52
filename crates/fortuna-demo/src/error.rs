//! Fortuna demo — error types.

use fortuna_core::RandomError;
use thiserror::Error;

/// Startup and runtime errors for the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// An environment variable is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A random operation rejected its arguments.
    #[error("random operation failed: {0}")]
    Random(#[from] RandomError),

    /// The report could not be serialized.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
