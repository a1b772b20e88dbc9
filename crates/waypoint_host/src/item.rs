//! # Item and View Values
//!
//! Plain value types exchanged with the host runtime: immutable-by-convention
//! item stacks and the transient menu view handed to the host for display.

use crate::types::{MaterialId, ViewToken};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A stack of items as the host understands it.
///
/// Carries the canonical material, a stack size, a legacy data sub-id, the
/// cosmetic display name and lore, and a free-form string tag map used for
/// marker metadata. Cloning a stack clones all of it, tags included, so a
/// copy of a marked stack is still recognizable as the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Canonical material of the stack.
    pub material: MaterialId,
    /// Stack size. Defaults to 1.
    pub amount: u32,
    /// Legacy data sub-id. Defaults to 0.
    pub data: u16,
    /// Cosmetic display name, already color-translated.
    pub display_name: Option<String>,
    /// Lore lines in display order, already color-translated.
    pub lore: Vec<String>,
    /// Free-form string tags attached to the stack.
    pub tags: BTreeMap<String, String>,
}

impl ItemStack {
    /// Creates a bare single-item stack of the given material.
    pub fn new(material: MaterialId) -> Self {
        Self {
            material,
            amount: 1,
            data: 0,
            display_name: None,
            lore: Vec::new(),
            tags: BTreeMap::new(),
        }
    }

    /// Sets the stack size.
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the legacy data sub-id.
    pub fn with_data(mut self, data: u16) -> Self {
        self.data = data;
        self
    }

    /// Sets the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Replaces the lore lines.
    pub fn with_lore(mut self, lore: Vec<String>) -> Self {
        self.lore = lore;
        self
    }

    /// Attaches a string tag.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Returns the value of a tag, if present.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Returns whether the stack carries the given tag key.
    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }
}

/// A menu view built for a single presentation and handed to the host.
///
/// Views are transient: every open builds a fresh one with fresh item clones,
/// and nothing retains it afterwards. The [`ViewToken`] is the only part that
/// matters after display, carried back by click notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuView {
    /// Correlation token of the compiled generation this view came from.
    pub token: ViewToken,
    /// Color-translated title shown by the host.
    pub title: String,
    /// Total slot count of the view.
    pub size: u32,
    /// Items by slot index. Unlisted slots render empty.
    pub items: HashMap<u32, ItemStack>,
}
