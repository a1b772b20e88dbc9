//! Configuration compiler
//!
//! Pure transformation from a [`LobbyConfig`] document into an immutable
//! [`Snapshot`], resolving material and sound names against a host registry.
//! Compilation never touches live state; the caller decides what to do with
//! the result. The reverse direction ([`snapshot_to_config`]) exists so a
//! snapshot can be written back out as an equivalent document.

use crate::document::{
    ItemConfig, LobbyConfig, MenuConfig, MenuEntryConfig, MessagesConfig, SelectorItemConfig,
};
use crate::error::ConfigError;
use crate::snapshot::{Menu, MenuEntry, SelectorItem, Snapshot};
use std::collections::HashMap;
use tracing::debug;
use waypoint_host::{translate_color_codes, HostRegistry, ItemStack, SoundId};

/// Tag key marking the selector item.
///
/// Attached to the compiled selector stack and carried by every clone of it,
/// so recognition works on copies and survives cosmetic reconfiguration.
pub const SELECTOR_MARKER_TAG: &str = "waypoint:selector";

// ============================================================================
// Compilation
// ============================================================================

/// Compiles a configuration document into a snapshot.
///
/// Pure function: same document and registry produce structurally equal
/// snapshots. The only fatal condition is a material name the registry does
/// not know; sound names always resolve to something via the fallback chain.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownMaterial`] naming the configured material
/// when resolution fails, for the selector item or any entry.
pub fn compile(config: &LobbyConfig, registry: &dyn HostRegistry) -> Result<Snapshot, ConfigError> {
    let stack = compile_item(&config.selector_item.item, registry)?.with_tag(SELECTOR_MARKER_TAG, "1");
    let selector_item = SelectorItem {
        stack,
        slot: config.selector_item.slot,
    };

    let deny_sound = resolve_feedback_sound(&config.messages.deny_sound, registry);
    let connect_message = config.messages.connect.clone();

    let mut entries = HashMap::new();
    // Key order of the document map; a later entry for an occupied slot
    // replaces the earlier one.
    for entry in config.menu.entries.values() {
        let display_item = compile_item(&entry.item, registry)?;
        let compiled = MenuEntry::new(
            entry.server.clone(),
            display_item,
            entry.slot,
            entry.enabled,
            entry.disabled_message.clone(),
        );
        entries.insert(entry.slot, compiled);
    }

    let menu = Menu {
        title: translate_color_codes(&config.menu.title),
        size: config.menu.size,
        entries,
    };

    Ok(Snapshot {
        selector_item,
        menu,
        deny_sound,
        connect_message,
    })
}

/// Compiles one item description into a stack.
fn compile_item(config: &ItemConfig, registry: &dyn HostRegistry) -> Result<ItemStack, ConfigError> {
    let canonical = normalize_material_name(&config.material);
    let material = registry
        .resolve_material(&canonical)
        .ok_or_else(|| ConfigError::UnknownMaterial {
            name: config.material.clone(),
        })?;

    let mut stack = ItemStack::new(material)
        .with_amount(config.amount)
        .with_data(config.data);
    if let Some(name) = &config.name {
        stack = stack.with_display_name(translate_color_codes(name));
    }
    if !config.lore.is_empty() {
        stack = stack.with_lore(
            config
                .lore
                .iter()
                .map(|line| translate_color_codes(line))
                .collect(),
        );
    }
    Ok(stack)
}

/// Normalizes operator-typed material text to registry form.
///
/// Trims, uppercases, and turns spaces into underscores, so `"grass block"`
/// matches the canonical `GRASS_BLOCK`.
pub fn normalize_material_name(name: &str) -> String {
    name.trim().to_ascii_uppercase().replace(' ', "_")
}

// ============================================================================
// Sound Resolution
// ============================================================================

/// Legacy/modern sound renames, tried in both directions.
///
/// The configured name is matched case-insensitively against the left column;
/// the right column is then looked up by its canonical spelling.
const SOUND_ALIASES: &[(&str, &str)] = &[
    ("NOTE_BASS", "BLOCK_NOTE_BASS"),
    ("BLOCK_NOTE_BASS", "NOTE_BASS"),
];

/// Resolves a feedback sound name, never failing.
///
/// Direct lookup first, then the alias table, then the click default, then
/// whatever sound the registry enumerates first.
fn resolve_feedback_sound(name: &str, registry: &dyn HostRegistry) -> SoundId {
    if let Some(sound) = registry.resolve_sound(name) {
        return sound;
    }
    for (alias, replacement) in SOUND_ALIASES {
        if name.eq_ignore_ascii_case(alias) {
            if let Some(sound) = registry.resolve_sound(replacement) {
                debug!("Sound '{}' resolved via alias '{}'", name, replacement);
                return sound;
            }
        }
    }
    let fallback = fallback_click_sound(registry);
    debug!("Sound '{}' not recognized, falling back to '{}'", name, fallback);
    fallback
}

/// The default feedback sound: click, in its legacy then modern spelling,
/// then the registry's first sound.
fn fallback_click_sound(registry: &dyn HostRegistry) -> SoundId {
    registry
        .resolve_sound("CLICK")
        .or_else(|| registry.resolve_sound("UI_BUTTON_CLICK"))
        .unwrap_or_else(|| registry.first_sound())
}

// ============================================================================
// Decompilation
// ============================================================================

/// Maps a snapshot back to an equivalent configuration document.
///
/// Compiling the result against the same registry reproduces the snapshot:
/// canonical names resolve to themselves, and color translation leaves
/// already-translated text alone. Entry keys are regenerated from slot
/// indices, which are unique in a snapshot, so entries sharing a destination
/// server stay distinct.
pub fn snapshot_to_config(snapshot: &Snapshot) -> LobbyConfig {
    let entries = snapshot
        .menu
        .entries
        .values()
        .map(|entry| {
            (
                format!("slot-{}", entry.slot()),
                MenuEntryConfig {
                    server: entry.server().to_string(),
                    item: item_to_config(&entry.display_item()),
                    slot: entry.slot(),
                    enabled: entry.is_enabled(),
                    disabled_message: entry.disabled_message().map(str::to_string),
                },
            )
        })
        .collect();

    LobbyConfig {
        selector_item: SelectorItemConfig {
            item: item_to_config(&snapshot.selector_item.stack),
            slot: snapshot.selector_item.slot,
        },
        messages: MessagesConfig {
            connect: snapshot.connect_message.clone(),
            deny_sound: snapshot.deny_sound.as_str().to_string(),
        },
        menu: MenuConfig {
            title: snapshot.menu.title.clone(),
            size: snapshot.menu.size,
            entries,
        },
    }
}

/// Reads an item description back off a compiled stack. Marker tags are not
/// part of the document and are dropped here.
fn item_to_config(stack: &ItemStack) -> ItemConfig {
    ItemConfig {
        material: stack.material.as_str().to_string(),
        amount: stack.amount,
        data: stack.data,
        name: stack.display_name.clone(),
        lore: stack.lore.clone(),
    }
}
