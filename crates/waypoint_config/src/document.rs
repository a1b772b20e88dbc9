//! Configuration document structures
//!
//! This module defines the operator-facing configuration document for the
//! lobby selector: the selector item, the feedback messages, and the menu
//! with its destination entries. The document uses kebab-case keys and every
//! field has a default, so a partial file still parses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration document
///
/// This is the structure a deployment's config file parses into. It is a
/// plain description of what the operator wants; nothing in it is resolved
/// against the host until it is compiled.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct LobbyConfig {
    /// The item players use to open the menu
    #[serde(default)]
    pub selector_item: SelectorItemConfig,
    /// Feedback messages and sounds
    #[serde(default)]
    pub messages: MessagesConfig,
    /// The destination menu
    #[serde(default)]
    pub menu: MenuConfig,
}

/// Shared item description used by the selector and by menu entries
///
/// Color codes in `name` and `lore` use the `&` form; they are translated
/// when the document is compiled.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ItemConfig {
    /// Material name, matched against the host registry after
    /// trim/uppercase/underscore normalization
    #[serde(default = "default_material")]
    pub material: String,

    /// Stack size
    #[serde(default = "default_amount")]
    pub amount: u32,

    /// Legacy data sub-id
    #[serde(default)]
    pub data: u16,

    /// Display name with `&` color codes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Lore lines with `&` color codes, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<String>,
}

/// Selector item section
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct SelectorItemConfig {
    /// Item description of the selector
    #[serde(flatten)]
    pub item: ItemConfig,
    /// Hotbar slot the selector is granted into
    #[serde(default)]
    pub slot: u32,
}

/// Messages section
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct MessagesConfig {
    /// Chat template sent after a transfer request, with a `<server>`
    /// placeholder substituted at send time. No message is sent when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect: Option<String>,

    /// Sound played when a disabled entry is clicked
    ///
    /// Resolved against the host registry with a legacy/modern alias
    /// fallback, so either spelling works across host versions.
    #[serde(default = "default_deny_sound")]
    pub deny_sound: String,
}

/// Menu section
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct MenuConfig {
    /// View title with `&` color codes
    #[serde(default = "default_menu_title")]
    pub title: String,

    /// Total slot count of the view
    #[serde(default = "default_menu_size")]
    pub size: u32,

    /// Destination entries, keyed by a free-form label
    ///
    /// Iteration order is the key order; when two entries declare the same
    /// slot, the later one wins.
    #[serde(default)]
    pub entries: BTreeMap<String, MenuEntryConfig>,
}

/// One destination entry in the menu
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct MenuEntryConfig {
    /// Backend server this entry transfers to
    pub server: String,

    /// Item shown in the menu slot
    #[serde(flatten)]
    pub item: ItemConfig,

    /// Menu slot this entry occupies
    pub slot: u32,

    /// Whether clicking this entry starts a transfer
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Chat message with `&` color codes sent when the entry is clicked
    /// while disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_message: Option<String>,
}

fn default_material() -> String {
    "COMPASS".to_string()
}

fn default_amount() -> u32 {
    1
}

fn default_deny_sound() -> String {
    "BLOCK_NOTE_BASS".to_string()
}

fn default_menu_title() -> String {
    "&8Selector".to_string()
}

fn default_menu_size() -> u32 {
    9
}

fn default_enabled() -> bool {
    true
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            material: default_material(),
            amount: default_amount(),
            data: 0,
            name: None,
            lore: Vec::new(),
        }
    }
}

impl Default for SelectorItemConfig {
    fn default() -> Self {
        Self {
            item: ItemConfig::default(),
            slot: 0,
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            connect: None,
            deny_sound: default_deny_sound(),
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: default_menu_title(),
            size: default_menu_size(),
            entries: BTreeMap::new(),
        }
    }
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            selector_item: SelectorItemConfig::default(),
            messages: MessagesConfig::default(),
            menu: MenuConfig::default(),
        }
    }
}

impl LobbyConfig {
    /// Create a complete starter document
    ///
    /// This is what gets written to disk when no config file exists yet: a
    /// named selector plus one enabled and one disabled sample destination,
    /// so a fresh deployment has something visible to click on.
    pub fn example() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            "survival".to_string(),
            MenuEntryConfig {
                server: "survival".to_string(),
                item: ItemConfig {
                    material: "GRASS".to_string(),
                    amount: 1,
                    data: 0,
                    name: Some("&aSurvival".to_string()),
                    lore: vec!["&7Classic survival world".to_string()],
                },
                slot: 2,
                enabled: true,
                disabled_message: None,
            },
        );
        entries.insert(
            "skyblock".to_string(),
            MenuEntryConfig {
                server: "skyblock".to_string(),
                item: ItemConfig {
                    material: "SAND".to_string(),
                    amount: 1,
                    data: 0,
                    name: Some("&bSkyblock".to_string()),
                    lore: vec!["&7Islands in the void".to_string()],
                },
                slot: 3,
                enabled: false,
                disabled_message: Some("&cComing soon!".to_string()),
            },
        );

        Self {
            selector_item: SelectorItemConfig {
                item: ItemConfig {
                    material: "COMPASS".to_string(),
                    amount: 1,
                    data: 0,
                    name: Some("&aServer Selector".to_string()),
                    lore: vec!["&7Right-click to choose a server".to_string()],
                },
                slot: 0,
            },
            messages: MessagesConfig {
                connect: Some("&aSending you to &e<server>&a...".to_string()),
                deny_sound: default_deny_sound(),
            },
            menu: MenuConfig {
                title: default_menu_title(),
                size: default_menu_size(),
                entries,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = LobbyConfig::default();
        assert_eq!(config.selector_item.item.material, "COMPASS");
        assert_eq!(config.selector_item.item.amount, 1);
        assert_eq!(config.selector_item.slot, 0);
        assert_eq!(config.messages.deny_sound, "BLOCK_NOTE_BASS");
        assert!(config.messages.connect.is_none());
        assert_eq!(config.menu.title, "&8Selector");
        assert_eq!(config.menu.size, 9);
        assert!(config.menu.entries.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = LobbyConfig::example();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: LobbyConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_empty_document_parses_to_defaults() {
        let config: LobbyConfig = toml::from_str("").unwrap();
        assert_eq!(config, LobbyConfig::default());
    }

    #[test]
    fn test_toml_parsing() {
        let toml_str = r#"
[selector-item]
material = "COMPASS"
name = "&aServer Selector"
lore = ["&7Right-click to choose a server"]
slot = 4

[messages]
connect = "&aSending you to &e<server>&a..."
deny-sound = "NOTE_BASS"

[menu]
title = "&8Pick a server"
size = 18

[menu.entries.survival]
server = "survival"
material = "GRASS"
name = "&aSurvival"
slot = 2

[menu.entries.skyblock]
server = "skyblock"
material = "SAND"
slot = 3
enabled = false
disabled-message = "&cComing soon!"
        "#;

        let config: LobbyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.selector_item.slot, 4);
        assert_eq!(config.messages.deny_sound, "NOTE_BASS");
        assert_eq!(config.menu.size, 18);
        assert_eq!(config.menu.entries.len(), 2);

        let survival = &config.menu.entries["survival"];
        assert_eq!(survival.server, "survival");
        assert_eq!(survival.slot, 2);
        assert!(survival.enabled);
        assert!(survival.disabled_message.is_none());

        let skyblock = &config.menu.entries["skyblock"];
        assert!(!skyblock.enabled);
        assert_eq!(skyblock.disabled_message.as_deref(), Some("&cComing soon!"));
    }

    #[test]
    fn test_entry_defaults() {
        let toml_str = r#"
[menu.entries.arena]
server = "arena"
slot = 5
        "#;

        let config: LobbyConfig = toml::from_str(toml_str).unwrap();
        let arena = &config.menu.entries["arena"];
        assert_eq!(arena.item.material, "COMPASS");
        assert_eq!(arena.item.amount, 1);
        assert_eq!(arena.item.data, 0);
        assert!(arena.enabled);
    }
}
