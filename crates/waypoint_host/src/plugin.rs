//! # Plugin Interface
//!
//! This module defines the trait a lobby feature implements to receive host
//! notifications. Every event method has a default implementation, so a
//! plugin only overrides the notifications it cares about.

use crate::error::PluginError;
use crate::events::{
    CommandSender, EventDisposition, InventoryClickEvent, ItemDropEvent, PlayerInteractEvent,
    PlayerJoinedEvent, PlayerQuitEvent,
};
use async_trait::async_trait;

/// Interface implemented by a plugin hosted on the runtime.
///
/// The host drives the lifecycle (`on_enable` once before any event,
/// `on_disable` once after the last) and then delivers notifications one at a
/// time. Handlers for physical interactions return an
/// [`EventDisposition`] that can veto the host's default handling of that one
/// notification; lifecycle notifications have nothing to veto.
///
/// Implementations capture whatever context they need at construction time;
/// the host passes none of it per call.
#[async_trait]
pub trait HostPlugin: Send + Sync {
    /// Returns the name of this plugin.
    ///
    /// The name should be unique and stable across versions. It's used for
    /// logging and command routing.
    fn name(&self) -> &str;

    /// Returns the version string of this plugin.
    ///
    /// Should follow semantic versioning (e.g., "1.2.3").
    fn version(&self) -> &str;

    /// Called once when the host enables the plugin.
    ///
    /// Use this for loading configuration, registering channels, and touching
    /// up state for players who are already online.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if the plugin is ready, or `Err(PluginError)` to keep
    /// it disabled.
    async fn on_enable(&self) -> Result<(), PluginError> {
        Ok(()) // Default implementation does nothing
    }

    /// Called once when the host disables the plugin.
    async fn on_disable(&self) -> Result<(), PluginError> {
        Ok(()) // Default implementation does nothing
    }

    /// A player session became active.
    async fn on_player_joined(&self, _event: PlayerJoinedEvent) {
        // Default implementation does nothing
    }

    /// A player session ended.
    async fn on_player_quit(&self, _event: PlayerQuitEvent) {
        // Default implementation does nothing
    }

    /// A player used the item in their hand. Veto-able.
    async fn on_player_interact(&self, _event: PlayerInteractEvent) -> EventDisposition {
        EventDisposition::Allow
    }

    /// A player clicked a slot in an open view. Veto-able.
    async fn on_inventory_click(&self, _event: InventoryClickEvent) -> EventDisposition {
        EventDisposition::Allow
    }

    /// A player attempted to drop a stack. Veto-able.
    async fn on_item_drop(&self, _event: ItemDropEvent) -> EventDisposition {
        EventDisposition::Allow
    }

    /// A command was dispatched to this plugin.
    ///
    /// # Arguments
    ///
    /// * `command` - Bare command name, without arguments
    /// * `sender` - Who dispatched it
    ///
    /// # Returns
    ///
    /// Returns `true` if the plugin handled the command.
    async fn on_command(&self, _command: &str, _sender: CommandSender) -> bool {
        false
    }

    /// Returns completion candidates for a command.
    fn tab_complete(&self, _command: &str) -> Vec<String> {
        Vec::new()
    }
}
