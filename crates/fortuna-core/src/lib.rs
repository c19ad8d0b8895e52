//! Fortuna Core — uniform random helpers over an injected generator.
//!
//! Numeric draws, coin flips, percentage rolls, shuffling and sampling
//! without replacement. Every operation takes the generator explicitly;
//! there is no process-wide instance.

pub mod collections;
pub mod error;
pub mod numeric;
pub mod rng;
pub mod utility;

pub use collections::SamplingStrategy;
pub use error::RandomError;
pub use rng::{DeterministicRng, SharedRng, StdRandom};
pub use utility::RandomUtility;
