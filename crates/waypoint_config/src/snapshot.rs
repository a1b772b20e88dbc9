//! Compiled configuration structures
//!
//! Immutable results of compiling a [`LobbyConfig`](crate::LobbyConfig)
//! against a host registry. A snapshot is a plain value: replacing the live
//! one wholesale is how reload works, and structural equality is how tests
//! check compilation determinism.

use std::collections::HashMap;
use waypoint_host::{ItemStack, SoundId};

/// Everything one compilation produces
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// The selector item and where it is granted
    pub selector_item: SelectorItem,
    /// The destination menu
    pub menu: Menu,
    /// Resolved deny-feedback sound
    pub deny_sound: SoundId,
    /// Connect-message template as configured, `<server>` not yet
    /// substituted and color codes not yet translated
    pub connect_message: Option<String>,
}

/// Compiled selector item descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorItem {
    /// Canonical stack, marker tag included
    pub stack: ItemStack,
    /// Hotbar slot the stack is granted into
    pub slot: u32,
}

/// Compiled menu layout
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    /// Color-translated view title
    pub title: String,
    /// Total slot count of the view
    pub size: u32,
    /// Entries by slot index
    pub entries: HashMap<u32, MenuEntry>,
}

impl Menu {
    /// Looks up the entry at a slot.
    pub fn entry(&self, slot: u32) -> Option<&MenuEntry> {
        self.entries.get(&slot)
    }
}

/// One compiled destination entry
///
/// The display item is private on purpose: callers always receive a fresh
/// copy through [`MenuEntry::display_item`], never a reference to the
/// canonical stack, so nothing downstream can mutate what the menu shows.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    server: String,
    display_item: ItemStack,
    slot: u32,
    enabled: bool,
    disabled_message: Option<String>,
}

impl MenuEntry {
    /// Assembles a compiled entry.
    pub fn new(
        server: String,
        display_item: ItemStack,
        slot: u32,
        enabled: bool,
        disabled_message: Option<String>,
    ) -> Self {
        Self {
            server,
            display_item,
            slot,
            enabled,
            disabled_message,
        }
    }

    /// Backend server this entry transfers to.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Returns a fresh copy of the display item.
    pub fn display_item(&self) -> ItemStack {
        self.display_item.clone()
    }

    /// Menu slot this entry occupies.
    pub fn slot(&self) -> u32 {
        self.slot
    }

    /// Whether clicking this entry starts a transfer.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Message for clicks while disabled, as configured (`&` color codes).
    pub fn disabled_message(&self) -> Option<&str> {
        self.disabled_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_host::MaterialId;

    #[test]
    fn display_item_hands_out_copies() {
        let entry = MenuEntry::new(
            "survival".to_string(),
            ItemStack::new(MaterialId::new("GRASS")).with_display_name("§aSurvival"),
            2,
            true,
            None,
        );

        let mut first = entry.display_item();
        first.display_name = Some("mutated".to_string());

        let second = entry.display_item();
        assert_eq!(second.display_name.as_deref(), Some("§aSurvival"));
    }

    #[test]
    fn menu_slot_lookup() {
        let entry = MenuEntry::new(
            "arena".to_string(),
            ItemStack::new(MaterialId::new("IRON_SWORD")),
            5,
            true,
            None,
        );
        let mut entries = HashMap::new();
        entries.insert(entry.slot(), entry);

        let menu = Menu {
            title: "§8Selector".to_string(),
            size: 9,
            entries,
        };

        assert!(menu.entry(5).is_some());
        assert!(menu.entry(4).is_none());
        assert_eq!(menu.entry(5).unwrap().server(), "arena");
    }
}
