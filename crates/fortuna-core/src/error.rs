//! Error types for random operations.

use thiserror::Error;

/// Errors returned by draws and collection operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// A bound, range or sample size was out of the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A random element was requested from an empty collection.
    #[error("cannot pick a random element from an empty collection")]
    EmptyCollection,

    /// The mutex guarding a shared generator was poisoned.
    #[error("shared generator poisoned: {0}")]
    GeneratorPoisoned(String),
}
