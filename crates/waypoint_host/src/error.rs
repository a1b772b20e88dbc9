//! # Host Error Types
//!
//! Errors surfaced by fallible host operations.

use crate::types::PlayerId;
use thiserror::Error;

/// Errors returned by host context operations.
#[derive(Debug, Error)]
pub enum HostError {
    /// The target player has no active connection.
    #[error("Player not connected: {0}")]
    PlayerNotConnected(PlayerId),

    /// The plugin-message channel was never registered.
    #[error("Channel not registered: {0}")]
    ChannelNotRegistered(String),

    /// The transport refused or dropped the payload.
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Errors a plugin raises from its lifecycle hooks.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Plugin initialization failed during startup
    #[error("Plugin initialization failed: {0}")]
    InitializationFailed(String),
    /// Error occurred during plugin execution
    #[error("Plugin execution error: {0}")]
    ExecutionError(String),
}
