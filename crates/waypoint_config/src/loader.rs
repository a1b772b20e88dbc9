//! Configuration file loading
//!
//! Deployment glue around the document: read the config file, or write a
//! starter file and use that when none exists yet.

use crate::document::LobbyConfig;
use crate::error::ConfigError;
use std::path::Path;
use tracing::{info, warn};

/// Load configuration from file or create a starter configuration
///
/// This function attempts to load configuration from the specified file.
/// If the file doesn't exist, it writes the starter document
/// ([`LobbyConfig::example`]) to that path and returns it.
///
/// # Arguments
/// * `path` - Path of the config file
///
/// # Returns
/// * `Result<LobbyConfig, ConfigError>` - The loaded or starter configuration
///
/// # Errors
/// * Returns [`ConfigError::Io`] if file I/O operations fail
/// * Returns [`ConfigError::Parse`] if TOML parsing fails
pub async fn load_config(path: &Path) -> Result<LobbyConfig, ConfigError> {
    if path.exists() {
        let config_str = tokio::fs::read_to_string(path).await?;
        match toml::from_str::<LobbyConfig>(&config_str) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("Failed to parse config file {}: {}", path.display(), e);
                Err(e.into())
            }
        }
    } else {
        warn!("Configuration file not found: {}, using starter config", path.display());

        let starter = LobbyConfig::example();
        let config_str = toml::to_string_pretty(&starter)?;
        tokio::fs::write(path, config_str).await?;
        info!("Created starter configuration file: {}", path.display());

        Ok(starter)
    }
}
