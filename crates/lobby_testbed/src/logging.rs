//! Logging system setup and configuration
//!
//! This module handles the initialization of the tracing-based logging
//! system that carries the testbed's run transcript and diagnostics.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::args::Args;

/// Initialize the logging system
///
/// Sets up structured logging using the tracing crate with configurable
/// output format and filtering levels. The logging level can be controlled
/// through command-line arguments or environment variables.
///
/// # Arguments
/// * `args` - Command line arguments containing the debug and format flags
///
/// # Returns
/// * `Result<()>` - Success or error during logging setup
///
/// # Environment Variables
/// * `RUST_LOG` - Override the default logging filter (e.g., "debug", "lobby_testbed=trace")
pub fn setup_logging(args: &Args) -> Result<()> {
    let level = if args.debug { "debug" } else { "info" };

    // Respect RUST_LOG when set, fall back to the command-line level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(false))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }

    Ok(())
}
