//! # Host Context Interface
//!
//! This module defines the interface plugins use to act on the host runtime:
//! registry lookups for materials and sounds, inventory and view side effects,
//! feedback primitives, channel management, and the proxy side-channel.
//!
//! The side-effecting calls are synchronous and must run on the host's
//! primary context; notifications may arrive off it, so the context exposes
//! [`HostContext::schedule_main`] as the explicit way to hop back. The only
//! async call is [`HostContext::send_plugin_message`], which actually touches
//! the player's connection.

use crate::error::HostError;
use crate::events::CommandSender;
use crate::item::{ItemStack, MenuView};
use crate::types::{MaterialId, PlayerId, SoundId};
use async_trait::async_trait;
use std::sync::Arc;

/// A deferred closure to run on the host's primary context.
pub type MainTask = Box<dyn FnOnce() + Send + 'static>;

// ============================================================================
// Registry Interface
// ============================================================================

/// Name-to-identifier lookup for host-version-dependent vocabularies.
///
/// Lookups match canonical names exactly; callers are expected to normalize
/// free-form configuration text before resolving. Hosts always expose at
/// least one sound, so [`HostRegistry::first_sound`] is infallible and
/// deterministic for a given host version.
pub trait HostRegistry: Send + Sync {
    /// Resolves a canonical material name.
    ///
    /// # Returns
    ///
    /// The material identifier, or `None` if this host version does not know
    /// the name.
    fn resolve_material(&self, name: &str) -> Option<MaterialId>;

    /// Resolves a canonical sound name.
    ///
    /// # Returns
    ///
    /// The sound identifier, or `None` if this host version does not know
    /// the name.
    fn resolve_sound(&self, name: &str) -> Option<SoundId>;

    /// Returns the first sound in the host's deterministic enumeration.
    ///
    /// Used as the last resort of feedback-sound resolution so that a sound
    /// always exists even on host versions with none of the preferred names.
    fn first_sound(&self) -> SoundId;
}

// ============================================================================
// Host Context Interface (Minimal)
// ============================================================================

/// Host context interface providing access to runtime services.
///
/// This trait defines the surface plugins use to interact with the host.
/// It exposes the handful of services the lobby needs while keeping plugin
/// code cleanly separated from host internals.
///
/// # Threading
///
/// The synchronous side-effect methods assume they are called on the host's
/// primary context. Event handlers invoked there may call them directly;
/// anything running elsewhere must wrap the work in a closure and hand it to
/// [`HostContext::schedule_main`].
#[async_trait]
pub trait HostContext: Send + Sync {
    /// Returns the registry for material and sound resolution.
    fn registry(&self) -> Arc<dyn HostRegistry>;

    /// Places a stack into a player's inventory slot, replacing any content.
    ///
    /// # Arguments
    ///
    /// * `player_id` - Target player
    /// * `slot` - Inventory slot index
    /// * `stack` - Stack to place
    fn set_inventory_item(&self, player_id: PlayerId, slot: u32, stack: ItemStack);

    /// Forces the host to resend a player's inventory view.
    ///
    /// Needed after vetoing an event whose client-side prediction already
    /// changed what the player sees.
    fn refresh_inventory(&self, player_id: PlayerId);

    /// Presents a menu view to a player.
    ///
    /// The host keeps the view's token attached to the open view and carries
    /// it back on click notifications.
    fn open_view(&self, player_id: PlayerId, view: MenuView);

    /// Plays a sound for a player at their own position.
    ///
    /// # Arguments
    ///
    /// * `player_id` - Target player
    /// * `sound` - Resolved sound identifier
    /// * `volume` - Playback volume, 1.0 is nominal
    /// * `pitch` - Playback pitch, 1.0 is nominal
    fn play_sound(&self, player_id: PlayerId, sound: &SoundId, volume: f32, pitch: f32);

    /// Sends a chat message to a player.
    ///
    /// The message is delivered verbatim; color codes must already be in the
    /// host's section-sign form.
    fn send_chat(&self, player_id: PlayerId, message: &str);

    /// Delivers command feedback to whoever dispatched the command.
    ///
    /// Player senders receive it as chat; the console receives it on the
    /// host's console stream.
    fn reply(&self, sender: CommandSender, message: &str);

    /// Schedules a closure to run on the host's primary context.
    ///
    /// The host guarantees the task runs on the context that owns player and
    /// inventory state, and runs it soon (next tick or equivalent).
    fn schedule_main(&self, task: MainTask);

    /// Returns the players currently online.
    fn online_players(&self) -> Vec<PlayerId>;

    /// Registers an outgoing plugin-message channel by name.
    ///
    /// Sending on an unregistered channel fails, so plugins register their
    /// channels during enable and unregister them during disable.
    fn register_channel(&self, channel: &str);

    /// Unregisters a previously registered plugin-message channel.
    fn unregister_channel(&self, channel: &str);

    /// Sends a raw plugin message to a player over a named channel.
    ///
    /// This is the proxy side-channel: the payload travels on the player's
    /// own connection and is interpreted by whatever sits in front of the
    /// host.
    ///
    /// # Arguments
    ///
    /// * `player_id` - Player whose connection carries the message
    /// * `channel` - Registered channel name
    /// * `payload` - Raw message bytes
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if the message was queued for sending, or
    /// `Err(HostError)` if the send failed (e.g. player not connected).
    async fn send_plugin_message(
        &self,
        player_id: PlayerId,
        channel: &str,
        payload: &[u8],
    ) -> Result<(), HostError>;
}
