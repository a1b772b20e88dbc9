//! # Waypoint Selector
//!
//! The selector/menu controller: owns the compiled lobby snapshot, answers
//! identity and slot queries, grants the selector item, opens the menu, and
//! speaks the proxy's transfer protocol. Host side effects go through the
//! [`waypoint_host`] context traits; configuration comes compiled from
//! [`waypoint_config`].

mod system;
pub mod wire;

pub use system::SelectorSystem;
