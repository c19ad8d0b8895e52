//! Fortuna demo — flips a coin, shuffles a sequence and samples from it with
//! both strategies.

pub mod config;
pub mod error;
pub mod report;

pub use config::DemoConfig;
pub use error::DemoError;
pub use report::{DemoReport, run};
