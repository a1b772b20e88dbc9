//! Selector system
//!
//! Owns the compiled lobby state and drives the player-facing protocol:
//! granting the selector item, opening the menu, answering identity and slot
//! queries, and issuing transfer requests or denial feedback. All state
//! lives in one versioned snapshot swapped wholesale by [`SelectorSystem::reload`];
//! every other operation is a read against whichever snapshot is current.

use crate::wire;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};
use waypoint_config::{compile, ConfigError, LobbyConfig, MenuEntry, Snapshot, SELECTOR_MARKER_TAG};
use waypoint_host::{
    translate_color_codes, HostContext, ItemStack, MenuView, PlayerId, ViewToken,
};

/// One compiled generation: the snapshot plus the view token minted for it.
///
/// The token is minted here, at swap time, not during compilation, so
/// compiling stays a pure function while every swapped-in generation is
/// still uniquely recognizable.
struct CompiledState {
    token: ViewToken,
    snapshot: Snapshot,
}

/// The selector/menu controller.
///
/// Constructed once over the host context and shared wherever event handlers
/// need it. Queries taken during a reload see either the fully-old or the
/// fully-new generation, never a mix.
pub struct SelectorSystem {
    context: Arc<dyn HostContext>,
    state: RwLock<Option<Arc<CompiledState>>>,
}

impl SelectorSystem {
    /// Creates a controller with no compiled state.
    ///
    /// Every query is a defensive no-op until the first successful
    /// [`SelectorSystem::reload`].
    pub fn new(context: Arc<dyn HostContext>) -> Self {
        Self {
            context,
            state: RwLock::new(None),
        }
    }

    /// Clones out the current generation, if any.
    fn current(&self) -> Option<Arc<CompiledState>> {
        // A poisoned lock still holds a fully swapped value; recover it.
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    // ========================================================================
    // Reload
    // ========================================================================

    /// Compiles a configuration document and swaps it in.
    ///
    /// On success the new generation, under a freshly minted view token,
    /// replaces the old one atomically. On error nothing changes: the
    /// previous generation stays authoritative and every query keeps
    /// answering from it.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from compilation, most importantly
    /// [`ConfigError::UnknownMaterial`].
    pub fn reload(&self, config: &LobbyConfig) -> Result<(), ConfigError> {
        let registry = self.context.registry();
        let snapshot = compile(config, registry.as_ref())?;
        let entry_count = snapshot.menu.entries.len();

        let state = CompiledState {
            token: ViewToken::new(),
            snapshot,
        };
        *self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(Arc::new(state));

        info!("Compiled lobby configuration: {} menu entries", entry_count);
        Ok(())
    }

    // ========================================================================
    // Selector Item
    // ========================================================================

    /// Places the selector item into a player's configured slot.
    ///
    /// The inventory write and refresh run on the host's primary context,
    /// because grant requests can arrive from outside it (join handling).
    /// Idempotent: the slot is simply overwritten. No-op before the first
    /// successful reload.
    pub fn grant_selector(&self, player_id: PlayerId) {
        let state = match self.current() {
            Some(state) => state,
            None => return,
        };

        let context = Arc::clone(&self.context);
        let stack = state.snapshot.selector_item.stack.clone();
        let slot = state.snapshot.selector_item.slot;
        self.context.schedule_main(Box::new(move || {
            context.set_inventory_item(player_id, slot, stack);
            context.refresh_inventory(player_id);
        }));
    }

    /// Whether a stack is the selector item.
    ///
    /// Recognition is by the marker tag the compiler attaches, so clones and
    /// reconstructed copies are recognized and cosmetic reconfiguration
    /// changes nothing. Absent stacks and the time before the first reload
    /// answer false.
    pub fn is_selector_item(&self, stack: Option<&ItemStack>) -> bool {
        match (stack, self.current()) {
            (Some(stack), Some(_)) => stack.has_tag(SELECTOR_MARKER_TAG),
            _ => false,
        }
    }

    /// Forgets per-player state when a session ends.
    pub fn cleanup_player(&self, _player_id: PlayerId) {
        // No per-player state yet; reserved for future features.
    }

    // ========================================================================
    // Menu
    // ========================================================================

    /// Builds the menu view and presents it to a player.
    ///
    /// The view is transient: fresh display-item copies in the configured
    /// slots, reconstructed on every open, retained nowhere. Returns the
    /// current generation's token, or `None` (and no view) before the first
    /// reload.
    pub fn open_menu(&self, player_id: PlayerId) -> Option<ViewToken> {
        let state = self.current()?;
        let menu = &state.snapshot.menu;

        let mut items = HashMap::with_capacity(menu.entries.len());
        for (slot, entry) in &menu.entries {
            items.insert(*slot, entry.display_item());
        }

        self.context.open_view(
            player_id,
            MenuView {
                token: state.token,
                title: menu.title.clone(),
                size: menu.size,
                items,
            },
        );
        Some(state.token)
    }

    /// Whether a view token belongs to the current generation.
    ///
    /// Tokens from before the last reload answer false, so clicks in stale
    /// views fall through to the host untouched.
    pub fn is_menu_view(&self, token: ViewToken) -> bool {
        match self.current() {
            Some(state) => state.token == token,
            None => false,
        }
    }

    /// Looks up the entry at a menu slot, if one is configured.
    pub fn entry_at_slot(&self, slot: u32) -> Option<MenuEntry> {
        self.current()?.snapshot.menu.entry(slot).cloned()
    }

    /// Plays the deny-feedback sound for a player at nominal volume and
    /// pitch. No-op before the first reload.
    pub fn play_deny_sound(&self, player_id: PlayerId) {
        if let Some(state) = self.current() {
            self.context
                .play_sound(player_id, &state.snapshot.deny_sound, 1.0, 1.0);
        }
    }

    // ========================================================================
    // Transfer
    // ========================================================================

    /// Returns the connect-message template, `<server>` not yet substituted.
    ///
    /// The template is global: the destination argument is accepted as the
    /// seam where per-destination messages would plug in, but does not
    /// change the answer.
    pub fn connect_message_for(&self, _destination: &str) -> Option<String> {
        self.current()?.snapshot.connect_message.clone()
    }

    /// Requests a transfer of a player to a backend server.
    ///
    /// Fire-and-forget: the frame goes out on the proxy channel and nothing
    /// waits to see whether the transfer happens. A successful send is
    /// followed by the configured connect message with `<server>`
    /// substituted and color codes translated; a failed send degrades to a
    /// fixed red retry message plus a warning log entry. Nothing propagates
    /// to the caller either way.
    pub async fn connect(&self, player_id: PlayerId, server: &str) {
        let payload = match wire::encode_connect(server) {
            Ok(payload) => payload,
            Err(e) => {
                self.transfer_failed(player_id, server);
                warn!("Failed to encode transfer for player {} to {}: {}", player_id, server, e);
                return;
            }
        };

        match self
            .context
            .send_plugin_message(player_id, wire::TRANSFER_CHANNEL, &payload)
            .await
        {
            Ok(()) => {
                if let Some(template) = self.connect_message_for(server) {
                    if !template.is_empty() {
                        let message =
                            translate_color_codes(&template.replace("<server>", server));
                        self.context.send_chat(player_id, &message);
                    }
                }
            }
            Err(e) => {
                self.transfer_failed(player_id, server);
                warn!("Failed to send player {} to {}: {}", player_id, server, e);
            }
        }
    }

    fn transfer_failed(&self, player_id: PlayerId, server: &str) {
        self.context.send_chat(
            player_id,
            &format!("§cUnable to connect to {}. Please try again.", server),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;
    use waypoint_host::{
        async_trait, CommandSender, HostError, HostRegistry, MainTask, MaterialId, SoundId,
    };

    struct MockRegistry;

    impl HostRegistry for MockRegistry {
        fn resolve_material(&self, name: &str) -> Option<MaterialId> {
            const KNOWN: &[&str] = &["COMPASS", "GRASS", "SAND"];
            KNOWN.iter().find(|m| **m == name).map(|m| MaterialId::new(*m))
        }

        fn resolve_sound(&self, name: &str) -> Option<SoundId> {
            const KNOWN: &[&str] = &["BLOCK_NOTE_BASS", "UI_BUTTON_CLICK"];
            KNOWN.iter().find(|s| **s == name).map(|s| SoundId::new(*s))
        }

        fn first_sound(&self) -> SoundId {
            SoundId::new("BLOCK_NOTE_BASS")
        }
    }

    #[derive(Default)]
    struct MockHost {
        inventory: Mutex<Vec<(PlayerId, u32, ItemStack)>>,
        refreshes: Mutex<Vec<PlayerId>>,
        views: Mutex<Vec<(PlayerId, MenuView)>>,
        sounds: Mutex<Vec<(PlayerId, SoundId, f32, f32)>>,
        chats: Mutex<Vec<(PlayerId, String)>>,
        plugin_messages: Mutex<Vec<(PlayerId, String, Vec<u8>)>>,
        main_queue: Mutex<Vec<MainTask>>,
        fail_sends: AtomicBool,
    }

    impl MockHost {
        fn run_main_tasks(&self) {
            let tasks: Vec<MainTask> = self.main_queue.lock().unwrap().drain(..).collect();
            for task in tasks {
                task();
            }
        }
    }

    #[async_trait]
    impl HostContext for MockHost {
        fn registry(&self) -> Arc<dyn HostRegistry> {
            Arc::new(MockRegistry)
        }

        fn set_inventory_item(&self, player_id: PlayerId, slot: u32, stack: ItemStack) {
            self.inventory.lock().unwrap().push((player_id, slot, stack));
        }

        fn refresh_inventory(&self, player_id: PlayerId) {
            self.refreshes.lock().unwrap().push(player_id);
        }

        fn open_view(&self, player_id: PlayerId, view: MenuView) {
            self.views.lock().unwrap().push((player_id, view));
        }

        fn play_sound(&self, player_id: PlayerId, sound: &SoundId, volume: f32, pitch: f32) {
            self.sounds
                .lock()
                .unwrap()
                .push((player_id, sound.clone(), volume, pitch));
        }

        fn send_chat(&self, player_id: PlayerId, message: &str) {
            self.chats.lock().unwrap().push((player_id, message.to_string()));
        }

        fn reply(&self, sender: CommandSender, message: &str) {
            if let CommandSender::Player(player_id) = sender {
                self.send_chat(player_id, message);
            }
        }

        fn schedule_main(&self, task: MainTask) {
            self.main_queue.lock().unwrap().push(task);
        }

        fn online_players(&self) -> Vec<PlayerId> {
            Vec::new()
        }

        fn register_channel(&self, _channel: &str) {}

        fn unregister_channel(&self, _channel: &str) {}

        async fn send_plugin_message(
            &self,
            player_id: PlayerId,
            channel: &str,
            payload: &[u8],
        ) -> Result<(), HostError> {
            if self.fail_sends.load(Ordering::SeqCst) {
                return Err(HostError::Transport("simulated failure".to_string()));
            }
            self.plugin_messages
                .lock()
                .unwrap()
                .push((player_id, channel.to_string(), payload.to_vec()));
            Ok(())
        }
    }

    fn system() -> (Arc<MockHost>, SelectorSystem) {
        let host = Arc::new(MockHost::default());
        let system = SelectorSystem::new(Arc::clone(&host) as Arc<dyn HostContext>);
        (host, system)
    }

    #[test]
    fn queries_are_noops_before_first_reload() {
        let (host, system) = system();
        let player = PlayerId::new();

        let marked = ItemStack::new(MaterialId::new("COMPASS")).with_tag(SELECTOR_MARKER_TAG, "1");
        assert!(!system.is_selector_item(Some(&marked)));
        assert!(system.open_menu(player).is_none());
        assert!(system.entry_at_slot(2).is_none());
        assert!(!system.is_menu_view(ViewToken::new()));
        assert!(system.connect_message_for("survival").is_none());

        system.grant_selector(player);
        system.play_deny_sound(player);
        assert!(host.main_queue.lock().unwrap().is_empty());
        assert!(host.sounds.lock().unwrap().is_empty());
    }

    #[test]
    fn reload_compiles_and_answers_queries() {
        let (_host, system) = system();
        system.reload(&LobbyConfig::example()).unwrap();

        let entry = system.entry_at_slot(2).unwrap();
        assert_eq!(entry.server(), "survival");
        assert!(entry.is_enabled());

        let skyblock = system.entry_at_slot(3).unwrap();
        assert!(!skyblock.is_enabled());

        assert!(system.entry_at_slot(4).is_none());
        assert_eq!(
            system.connect_message_for("anything").as_deref(),
            Some("&aSending you to &e<server>&a...")
        );
    }

    #[test]
    fn selector_identity_follows_the_marker() {
        let (host, system) = system();
        system.reload(&LobbyConfig::example()).unwrap();

        let player = PlayerId::new();
        system.grant_selector(player);
        host.run_main_tasks();

        let granted = host.inventory.lock().unwrap().last().unwrap().2.clone();
        assert!(system.is_selector_item(Some(&granted)));
        assert!(system.is_selector_item(Some(&granted.clone())));

        let lookalike = ItemStack::new(MaterialId::new("COMPASS"))
            .with_display_name("§aServer Selector");
        assert!(!system.is_selector_item(Some(&lookalike)));
        assert!(!system.is_selector_item(None));
    }

    #[test]
    fn grant_runs_through_the_main_context() {
        let (host, system) = system();
        system.reload(&LobbyConfig::example()).unwrap();

        let player = PlayerId::new();
        system.grant_selector(player);

        // Nothing touches the inventory until the scheduled task runs.
        assert!(host.inventory.lock().unwrap().is_empty());
        assert_eq!(host.main_queue.lock().unwrap().len(), 1);

        host.run_main_tasks();

        let inventory = host.inventory.lock().unwrap();
        let (granted_to, slot, stack) = inventory.last().unwrap();
        assert_eq!(*granted_to, player);
        assert_eq!(*slot, 0);
        assert!(stack.has_tag(SELECTOR_MARKER_TAG));
        drop(inventory);

        assert_eq!(host.refreshes.lock().unwrap().as_slice(), &[player]);
    }

    #[test]
    fn open_menu_presents_fresh_views_under_the_current_token() {
        let (host, system) = system();
        system.reload(&LobbyConfig::example()).unwrap();

        let player = PlayerId::new();
        let token = system.open_menu(player).unwrap();
        let again = system.open_menu(player).unwrap();
        assert_eq!(token, again);
        assert!(system.is_menu_view(token));

        let views = host.views.lock().unwrap();
        assert_eq!(views.len(), 2);
        let (shown_to, view) = &views[0];
        assert_eq!(*shown_to, player);
        assert_eq!(view.token, token);
        assert_eq!(view.title, "§8Selector");
        assert_eq!(view.size, 9);
        assert_eq!(view.items.len(), 2);
        assert_eq!(
            view.items[&2].display_name.as_deref(),
            Some("§aSurvival")
        );

        // Both opens produced equal, independently owned item maps.
        assert_eq!(views[0].1.items, views[1].1.items);
    }

    #[test]
    fn reload_rotates_the_view_token() {
        let (_host, system) = system();
        system.reload(&LobbyConfig::example()).unwrap();

        let player = PlayerId::new();
        let stale = system.open_menu(player).unwrap();

        system.reload(&LobbyConfig::example()).unwrap();
        assert!(!system.is_menu_view(stale));

        let fresh = system.open_menu(player).unwrap();
        assert_ne!(stale, fresh);
        assert!(system.is_menu_view(fresh));
    }

    #[test]
    fn failed_reload_leaves_previous_state_authoritative() {
        let (_host, system) = system();
        system.reload(&LobbyConfig::example()).unwrap();
        let token = system.open_menu(PlayerId::new()).unwrap();

        let mut broken = LobbyConfig::example();
        broken.selector_item.item.material = "UNOBTAINIUM".to_string();
        assert!(matches!(
            system.reload(&broken),
            Err(ConfigError::UnknownMaterial { .. })
        ));

        // Same generation, same answers.
        assert!(system.is_menu_view(token));
        assert_eq!(system.entry_at_slot(2).unwrap().server(), "survival");
    }

    #[test]
    fn deny_sound_plays_at_nominal_volume() {
        let (host, system) = system();
        system.reload(&LobbyConfig::example()).unwrap();

        let player = PlayerId::new();
        system.play_deny_sound(player);

        let sounds = host.sounds.lock().unwrap();
        let (heard_by, sound, volume, pitch) = &sounds[0];
        assert_eq!(*heard_by, player);
        assert_eq!(sound.as_str(), "BLOCK_NOTE_BASS");
        assert_eq!(*volume, 1.0);
        assert_eq!(*pitch, 1.0);
    }

    #[tokio::test]
    async fn connect_sends_frame_then_message() {
        let (host, system) = system();
        system.reload(&LobbyConfig::example()).unwrap();

        let player = PlayerId::new();
        system.connect(player, "survival").await;

        let messages = host.plugin_messages.lock().unwrap();
        let (sent_for, channel, payload) = &messages[0];
        assert_eq!(*sent_for, player);
        assert_eq!(channel, "BungeeCord");
        assert_eq!(payload, &wire::encode_connect("survival").unwrap());
        drop(messages);

        let chats = host.chats.lock().unwrap();
        assert_eq!(chats.len(), 1);
        assert_eq!(chats[0].1, "§aSending you to §esurvival§a...");
    }

    #[tokio::test]
    async fn connect_without_template_sends_no_chat() {
        let (host, system) = system();
        let mut config = LobbyConfig::example();
        config.messages.connect = None;
        system.reload(&config).unwrap();

        system.connect(PlayerId::new(), "survival").await;

        assert_eq!(host.plugin_messages.lock().unwrap().len(), 1);
        assert!(host.chats.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_send_degrades_to_retry_message() {
        let (host, system) = system();
        system.reload(&LobbyConfig::example()).unwrap();
        host.fail_sends.store(true, Ordering::SeqCst);

        let player = PlayerId::new();
        system.connect(player, "survival").await;

        assert!(host.plugin_messages.lock().unwrap().is_empty());
        let chats = host.chats.lock().unwrap();
        assert_eq!(chats.len(), 1);
        assert_eq!(
            chats[0].1,
            "§cUnable to connect to survival. Please try again."
        );
    }
}
