//! # Waypoint Configuration
//!
//! The operator-facing configuration document for the lobby selector, the
//! pure compiler that turns it into an immutable [`Snapshot`] against a host
//! registry, and the file loader deployments use.
//!
//! Compilation is the only place soft references (material and sound names)
//! are resolved; everything downstream works with resolved identifiers and
//! already-translated display text.

mod compiler;
mod document;
mod error;
mod loader;
mod snapshot;

pub use compiler::{compile, normalize_material_name, snapshot_to_config, SELECTOR_MARKER_TAG};
pub use document::{
    ItemConfig, LobbyConfig, MenuConfig, MenuEntryConfig, MessagesConfig, SelectorItemConfig,
};
pub use error::ConfigError;
pub use loader::load_config;
pub use snapshot::{Menu, MenuEntry, SelectorItem, Snapshot};
