//! # Lobby Selector Plugin
//!
//! Wires the selector system into the host event surface: grants the selector
//! item on join, vetoes interactions that would consume it, opens the menu on
//! use, and turns menu clicks into proxy transfers.
//!
//! The plugin owns its configuration file. Enabling loads (or creates) the
//! file, compiles it, and registers the transfer channel; disabling
//! unregisters the channel again. Everything in between is event handling.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use waypoint_config::load_config;
use waypoint_host::{
    translate_color_codes, CommandSender, EventDisposition, HostContext, HostPlugin,
    InventoryClickEvent, ItemDropEvent, PlayerInteractEvent, PlayerJoinedEvent, PlayerQuitEvent,
    PluginError,
};
use waypoint_selector::wire::TRANSFER_CHANNEL;
use waypoint_selector::SelectorSystem;

/// The command players use to reopen the menu without the selector item.
const SELECTOR_COMMAND: &str = "selector";

/// Lobby plugin that hands every player a server selector.
pub struct LobbyPlugin {
    name: String,
    context: Arc<dyn HostContext>,
    config_path: PathBuf,
    selector: SelectorSystem,
}

impl LobbyPlugin {
    /// Creates the plugin against a host context and a configuration path.
    ///
    /// Nothing is read from disk until [`HostPlugin::on_enable`] runs, so
    /// construction cannot fail.
    pub fn new(context: Arc<dyn HostContext>, config_path: impl Into<PathBuf>) -> Self {
        Self {
            name: "lobby".to_string(),
            selector: SelectorSystem::new(Arc::clone(&context)),
            context,
            config_path: config_path.into(),
        }
    }
}

#[async_trait]
impl HostPlugin for LobbyPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    async fn on_enable(&self) -> Result<(), PluginError> {
        info!(
            "🧭 LobbyPlugin: Starting up! Config at {}",
            self.config_path.display()
        );

        let config = load_config(&self.config_path)
            .await
            .map_err(|e| PluginError::InitializationFailed(e.to_string()))?;
        self.selector
            .reload(&config)
            .map_err(|e| PluginError::InitializationFailed(e.to_string()))?;

        self.context.register_channel(TRANSFER_CHANNEL);

        // Players already online (enable after a live reload) get the
        // selector too; new joins are covered by the join handler.
        for player_id in self.context.online_players() {
            self.selector.grant_selector(player_id);
        }

        info!("🧭 LobbyPlugin: ✅ Selector ready");
        Ok(())
    }

    async fn on_disable(&self) -> Result<(), PluginError> {
        self.context.unregister_channel(TRANSFER_CHANNEL);
        info!("🧭 LobbyPlugin: Shut down");
        Ok(())
    }

    async fn on_player_joined(&self, event: PlayerJoinedEvent) {
        self.selector.grant_selector(event.player_id);
    }

    async fn on_player_quit(&self, event: PlayerQuitEvent) {
        self.selector.cleanup_player(event.player_id);
    }

    async fn on_player_interact(&self, event: PlayerInteractEvent) -> EventDisposition {
        if !self.selector.is_selector_item(event.held.as_ref()) {
            return EventDisposition::Allow;
        }
        self.selector.open_menu(event.player_id);
        EventDisposition::Cancel
    }

    async fn on_inventory_click(&self, event: InventoryClickEvent) -> EventDisposition {
        let view = match event.view {
            Some(view) => view,
            None => return EventDisposition::Allow,
        };
        if !self.selector.is_menu_view(view) {
            return EventDisposition::Allow;
        }

        // From here on the click belongs to our menu and never reaches the
        // view, whether or not it lands on anything actionable.
        if event.clicked.is_none() {
            return EventDisposition::Cancel;
        }
        let entry = match self.selector.entry_at_slot(event.slot) {
            Some(entry) => entry,
            None => return EventDisposition::Cancel,
        };

        if !entry.is_enabled() {
            self.selector.play_deny_sound(event.player_id);
            if let Some(message) = entry.disabled_message() {
                if !message.is_empty() {
                    self.context
                        .send_chat(event.player_id, &translate_color_codes(message));
                }
            }
            return EventDisposition::Cancel;
        }

        self.selector.connect(event.player_id, entry.server()).await;
        EventDisposition::Cancel
    }

    async fn on_item_drop(&self, event: ItemDropEvent) -> EventDisposition {
        if !self.selector.is_selector_item(Some(&event.stack)) {
            return EventDisposition::Allow;
        }
        // The client already animated the drop; force a resync.
        self.context.refresh_inventory(event.player_id);
        EventDisposition::Cancel
    }

    async fn on_command(&self, command: &str, sender: CommandSender) -> bool {
        if !command.eq_ignore_ascii_case(SELECTOR_COMMAND) {
            return false;
        }
        match sender {
            CommandSender::Player(player_id) => {
                self.selector.open_menu(player_id);
            }
            CommandSender::Console => {
                self.context
                    .reply(CommandSender::Console, "§cCommand only for players.");
            }
        }
        true
    }
}
