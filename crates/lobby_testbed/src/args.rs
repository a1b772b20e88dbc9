//! Command-line argument parsing
//!
//! This module defines the command-line interface for the lobby testbed
//! using the clap crate for argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the lobby testbed
///
/// These arguments select the configuration file and shape the simulated
/// run without editing code.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    ///
    /// Specifies the path to the TOML configuration file.
    /// If the file doesn't exist, a starter configuration will be created.
    #[arg(short, long, default_value = "lobby.toml")]
    pub config: PathBuf,

    /// Number of players to simulate
    ///
    /// Every simulated player joins, receives the selector, opens the menu,
    /// and clicks through its entries.
    #[arg(short, long, default_value_t = 1)]
    pub players: usize,

    /// Simulate a legacy host
    ///
    /// Legacy hosts only know pre-flattening sound names, so this exercises
    /// the alias fallback during compilation.
    #[arg(long)]
    pub legacy: bool,

    /// Enable debug logging
    ///
    /// When enabled, sets the logging level to debug, providing more
    /// detailed output for troubleshooting.
    #[arg(short, long)]
    pub debug: bool,

    /// Emit logs as JSON
    ///
    /// Structured output for log aggregation systems and machine parsing.
    #[arg(long)]
    pub log_json: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            config: PathBuf::from("lobby.toml"),
            players: 1,
            legacy: false,
            debug: false,
            log_json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default() {
        let args = Args::default();
        assert_eq!(args.config, PathBuf::from("lobby.toml"));
        assert_eq!(args.players, 1);
        assert!(!args.legacy);
        assert!(!args.debug);
        assert!(!args.log_json);
    }
}
