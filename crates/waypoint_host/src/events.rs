//! # Host Event Definitions
//!
//! This module defines the notifications a host runtime delivers to plugins:
//! session lifecycle, physical item interactions, and inventory-view clicks.
//! Handlers for the interaction events return an [`EventDisposition`] so the
//! plugin can veto the host's default handling for that one notification.

use crate::item::ItemStack;
use crate::types::{PlayerId, ViewToken};
use serde::{Deserialize, Serialize};

/// Outcome of a veto-able event handler.
///
/// `Cancel` suppresses the host's default handling of the notification that
/// was just delivered; it carries no further state and affects nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventDisposition {
    /// Let the host proceed with its default handling.
    Allow,
    /// Suppress the host's default handling of this one event.
    Cancel,
}

impl EventDisposition {
    /// Returns true if the event was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, EventDisposition::Cancel)
    }
}

/// Origin of a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandSender {
    /// An interactive player session.
    Player(PlayerId),
    /// The host console or another non-player origin.
    Console,
}

/// A player session became active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerJoinedEvent {
    /// Player who joined.
    pub player_id: PlayerId,
    /// Unix timestamp of the join.
    pub timestamp: u64,
}

/// A player session ended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerQuitEvent {
    /// Player who quit.
    pub player_id: PlayerId,
    /// Unix timestamp of the quit.
    pub timestamp: u64,
}

/// A player used the item in their hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerInteractEvent {
    /// Player who interacted.
    pub player_id: PlayerId,
    /// Stack held during the interaction, if any.
    pub held: Option<ItemStack>,
    /// Unix timestamp of the interaction.
    pub timestamp: u64,
}

/// A player clicked a slot inside an open inventory view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryClickEvent {
    /// Player who clicked.
    pub player_id: PlayerId,
    /// Correlation token of the clicked view, if the view carries one.
    pub view: Option<ViewToken>,
    /// Slot index that was clicked.
    pub slot: u32,
    /// Stack present in the clicked slot, if any.
    pub clicked: Option<ItemStack>,
    /// Unix timestamp of the click.
    pub timestamp: u64,
}

/// A player attempted to drop an item stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDropEvent {
    /// Player who dropped.
    pub player_id: PlayerId,
    /// Stack being dropped.
    pub stack: ItemStack,
    /// Unix timestamp of the drop.
    pub timestamp: u64,
}
