//! Diagnostic logging with tracing
//!
//! The wizard's own output goes to stdout; diagnostics go to stderr and are
//! quiet unless `-v` is passed. The level never comes from the environment.

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map the number of `-v` flags to a log level
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global stderr subscriber
pub fn init_logging(verbose: u8) -> Result<()> {
    let level = level_for_verbosity(verbose);
    let filter = EnvFilter::new(format!("ffwizard={}", level.as_str().to_lowercase()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
