//! Fortuna demo entry point.

use std::error::Error;

use fortuna_demo::{DemoConfig, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber; logs go to stderr so stdout stays JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!("Starting Fortuna demo");

    // Read configuration from environment.
    let config = DemoConfig::from_env()?;
    tracing::info!(
        seed = ?config.seed,
        pool_size = config.pool_size,
        sample_size = config.sample_size,
        "configuration loaded"
    );

    let mut utility = config.utility();
    let report = run(&config, &mut utility)?;

    println!("{}", report.to_json()?);

    Ok(())
}
