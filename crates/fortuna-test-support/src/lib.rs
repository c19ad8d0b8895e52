//! Deterministic generator doubles for Fortuna tests.

mod rng;

pub use rng::{MockRng, SequenceRng};
