//! # Waypoint Host Interface
//!
//! The contract between the Waypoint lobby crates and whatever host runtime
//! carries them. The host owns players, inventories, views, and connections;
//! the lobby consumes that surface through the traits defined here and never
//! reaches past them.
//!
//! ## What lives here
//!
//! - [`HostContext`] / [`HostRegistry`] - services a host provides to plugins
//! - [`HostPlugin`] - the trait a lobby feature implements to receive events
//! - Identifier newtypes ([`PlayerId`], [`ViewToken`], [`MaterialId`],
//!   [`SoundId`]) and the value types they travel with ([`ItemStack`],
//!   [`MenuView`])
//! - Host event structs and the [`EventDisposition`] veto
//! - [`translate_color_codes`] for operator-facing `&` color codes

mod context;
mod error;
mod events;
mod item;
mod plugin;
mod text;
mod types;
mod utils;

pub use context::{HostContext, HostRegistry, MainTask};
pub use error::{HostError, PluginError};
pub use events::{
    CommandSender, EventDisposition, InventoryClickEvent, ItemDropEvent, PlayerInteractEvent,
    PlayerJoinedEvent, PlayerQuitEvent,
};
pub use item::{ItemStack, MenuView};
pub use plugin::HostPlugin;
pub use text::{translate_color_codes, SECTION_CHAR};
pub use types::{MaterialId, PlayerId, SoundId, ViewToken};
pub use utils::current_timestamp;

// Re-exported so downstream crates use the same async-trait the traits here
// were declared with.
pub use async_trait::async_trait;
