//! # Core Type Definitions
//!
//! This module contains the fundamental identifier types used throughout the
//! Waypoint lobby system. These types provide the building blocks for player
//! tracking, menu-view correlation, and registry-backed item and sound lookup.
//!
//! ## Key Types
//!
//! - [`PlayerId`] - Unique identifier for players on the host
//! - [`ViewToken`] - Opaque correlation token for an open menu view
//! - [`MaterialId`] - Canonical identifier for an item material
//! - [`SoundId`] - Canonical identifier for a feedback sound
//!
//! ## Design Principles
//!
//! - **Type Safety**: Wrapper types prevent ID confusion (PlayerId vs ViewToken)
//! - **Opacity**: Tokens carry no meaning beyond equality with the token they
//!   were minted as
//! - **Serialization**: All types support serde for logging and test capture

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Core Types (Minimal set)
// ============================================================================

/// Unique identifier for a player on the host runtime.
///
/// This is a wrapper around UUID that provides type safety and ensures
/// player IDs cannot be confused with other kinds of IDs in the system.
///
/// # Examples
///
/// ```rust
/// use waypoint_host::PlayerId;
///
/// // Create a new random player ID
/// let player_id = PlayerId::new();
///
/// // Convert to string for logging/display
/// println!("Player ID: {}", player_id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Creates a new random player ID using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a player ID from a string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - A string slice containing a valid UUID
    ///
    /// # Returns
    ///
    /// Returns `Ok(PlayerId)` if the string is a valid UUID, otherwise returns
    /// `Err(uuid::Error)` with details about the parsing failure.
    pub fn from_str(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl std::str::FromStr for PlayerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s)
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque correlation token for an open menu view.
///
/// A fresh token is minted every time the lobby configuration is compiled and
/// swapped in, and the same token is attached to every view opened from that
/// compiled generation. Click notifications carry the token of the view they
/// happened in, so a click can be matched to the menu that produced the view
/// without inspecting titles or other cosmetic state. Tokens from a previous
/// generation compare unequal and are rejected.
///
/// # Examples
///
/// ```rust
/// use waypoint_host::ViewToken;
///
/// let token = ViewToken::new();
/// let other = ViewToken::new();
/// assert_ne!(token, other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewToken(pub Uuid);

impl ViewToken {
    /// Mints a new random view token using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ViewToken {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ViewToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical identifier for an item material known to the host.
///
/// Values are only produced by a [`HostRegistry`](crate::HostRegistry)
/// lookup, so holding a `MaterialId` is proof the material resolved against
/// the running host version. The wrapped string is the host's canonical
/// spelling (e.g. `"COMPASS"`), available through [`MaterialId::as_str`] for
/// reverse mapping back into configuration text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(String);

impl MaterialId {
    /// Wraps a canonical material name.
    ///
    /// Intended for [`HostRegistry`](crate::HostRegistry) implementations and
    /// tests; application code should obtain materials through registry
    /// resolution instead of constructing them directly.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the canonical material name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical identifier for a feedback sound known to the host.
///
/// Same contract as [`MaterialId`]: produced by registry resolution, wraps
/// the host's canonical spelling (e.g. `"BLOCK_NOTE_BASS"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoundId(String);

impl SoundId {
    /// Wraps a canonical sound name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the canonical sound name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
