//! Configuration error types

use thiserror::Error;

/// Errors raised while loading or compiling configuration
///
/// Compile failures are fatal to the reload that hit them and to nothing
/// else; previously compiled state stays authoritative.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A material name did not resolve against the host registry.
    #[error("Unknown material: {name}")]
    UnknownMaterial { name: String },

    /// Reading or writing the config file failed.
    #[error("Config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for the document.
    #[error("Config file parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    /// Writing the starter document failed to serialize.
    #[error("Config serialization failed: {0}")]
    Serialize(#[from] toml::ser::Error),
}
