//! Simulated host runtime
//!
//! A self-contained stand-in for a real lobby server: it tracks online
//! players, their inventories and open views, runs deferred primary-context
//! tasks on demand, and captures outgoing proxy frames instead of putting
//! them on a network. Side effects are logged so a run reads like a server
//! transcript.

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};
use waypoint_host::{
    CommandSender, HostContext, HostError, HostRegistry, ItemStack, MainTask, MaterialId,
    MenuView, PlayerId, SoundId,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Registry
// ============================================================================

/// Host vocabulary the simulation answers lookups from.
pub struct SimRegistry {
    materials: HashSet<String>,
    sounds: Vec<String>,
}

impl SimRegistry {
    /// Vocabulary of a current-generation host.
    pub fn modern() -> Self {
        Self {
            materials: names(&["COMPASS", "GRASS", "SAND", "NETHER_STAR", "DIAMOND_SWORD"])
                .into_iter()
                .collect(),
            sounds: names(&["AMBIENT_CAVE", "BLOCK_NOTE_BASS", "UI_BUTTON_CLICK"]),
        }
    }

    /// Vocabulary of a legacy host: same materials, pre-flattening sounds.
    pub fn legacy() -> Self {
        Self {
            materials: names(&["COMPASS", "GRASS", "SAND", "NETHER_STAR", "DIAMOND_SWORD"])
                .into_iter()
                .collect(),
            sounds: names(&["AMBIENT_CAVE", "NOTE_BASS", "CLICK"]),
        }
    }
}

impl HostRegistry for SimRegistry {
    fn resolve_material(&self, name: &str) -> Option<MaterialId> {
        self.materials.contains(name).then(|| MaterialId::new(name))
    }

    fn resolve_sound(&self, name: &str) -> Option<SoundId> {
        self.sounds
            .iter()
            .any(|s| s == name)
            .then(|| SoundId::new(name))
    }

    fn first_sound(&self) -> SoundId {
        // Both constructors seed at least one sound.
        self.sounds
            .first()
            .map(|s| SoundId::new(s.as_str()))
            .unwrap_or_else(|| SoundId::new("AMBIENT_CAVE"))
    }
}

// ============================================================================
// Host
// ============================================================================

/// The simulated host: players, inventories, views, and a captured proxy.
pub struct SimHost {
    registry: Arc<SimRegistry>,
    players: DashMap<PlayerId, String>,
    inventories: DashMap<PlayerId, HashMap<u32, ItemStack>>,
    open_views: DashMap<PlayerId, MenuView>,
    channels: Mutex<HashSet<String>>,
    proxy_frames: Mutex<Vec<(PlayerId, String, Vec<u8>)>>,
    main_queue: Mutex<Vec<MainTask>>,
}

impl SimHost {
    pub fn new(registry: SimRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            players: DashMap::new(),
            inventories: DashMap::new(),
            open_views: DashMap::new(),
            channels: Mutex::new(HashSet::new()),
            proxy_frames: Mutex::new(Vec::new()),
            main_queue: Mutex::new(Vec::new()),
        }
    }

    /// Brings a named player online and returns their id.
    pub fn join(&self, name: impl Into<String>) -> PlayerId {
        let player_id = PlayerId::new();
        let name = name.into();
        info!("👤 {} joined as {}", name, player_id);
        self.players.insert(player_id, name);
        player_id
    }

    /// Runs everything scheduled onto the primary context, standing in for
    /// one host tick.
    pub fn tick(&self) {
        let tasks: Vec<MainTask> = lock(&self.main_queue).drain(..).collect();
        for task in tasks {
            task();
        }
    }

    /// Snapshot of a player's inventory by slot.
    pub fn inventory_of(&self, player_id: PlayerId) -> HashMap<u32, ItemStack> {
        self.inventories
            .get(&player_id)
            .map(|inv| inv.clone())
            .unwrap_or_default()
    }

    /// The view a player currently has open, if any.
    pub fn view_of(&self, player_id: PlayerId) -> Option<MenuView> {
        self.open_views.get(&player_id).map(|view| view.clone())
    }

    /// Frames the simulated proxy captured, oldest first.
    pub fn frames(&self) -> Vec<(PlayerId, String, Vec<u8>)> {
        lock(&self.proxy_frames).clone()
    }

    fn display_name(&self, player_id: PlayerId) -> String {
        self.players
            .get(&player_id)
            .map(|name| name.clone())
            .unwrap_or_else(|| player_id.to_string())
    }
}

#[async_trait]
impl HostContext for SimHost {
    fn registry(&self) -> Arc<dyn HostRegistry> {
        Arc::clone(&self.registry) as Arc<dyn HostRegistry>
    }

    fn set_inventory_item(&self, player_id: PlayerId, slot: u32, stack: ItemStack) {
        debug!(
            "Inventory set: {} slot {} <- {}",
            self.display_name(player_id),
            slot,
            stack.material
        );
        self.inventories
            .entry(player_id)
            .or_default()
            .insert(slot, stack);
    }

    fn refresh_inventory(&self, player_id: PlayerId) {
        debug!("Inventory resync for {}", self.display_name(player_id));
    }

    fn open_view(&self, player_id: PlayerId, view: MenuView) {
        info!(
            "📋 {} opened \"{}\" ({} slots, {} entries)",
            self.display_name(player_id),
            view.title,
            view.size,
            view.items.len()
        );
        self.open_views.insert(player_id, view);
    }

    fn play_sound(&self, player_id: PlayerId, sound: &SoundId, volume: f32, pitch: f32) {
        info!(
            "🔊 {} hears {} (volume {}, pitch {})",
            self.display_name(player_id),
            sound,
            volume,
            pitch
        );
    }

    fn send_chat(&self, player_id: PlayerId, message: &str) {
        info!("💬 [{}] {}", self.display_name(player_id), message);
    }

    fn reply(&self, sender: CommandSender, message: &str) {
        match sender {
            CommandSender::Player(player_id) => self.send_chat(player_id, message),
            CommandSender::Console => info!("💬 [console] {}", message),
        }
    }

    fn schedule_main(&self, task: MainTask) {
        lock(&self.main_queue).push(task);
    }

    fn online_players(&self) -> Vec<PlayerId> {
        self.players.iter().map(|entry| *entry.key()).collect()
    }

    fn register_channel(&self, channel: &str) {
        info!("Registered plugin channel {}", channel);
        lock(&self.channels).insert(channel.to_string());
    }

    fn unregister_channel(&self, channel: &str) {
        info!("Unregistered plugin channel {}", channel);
        lock(&self.channels).remove(channel);
    }

    async fn send_plugin_message(
        &self,
        player_id: PlayerId,
        channel: &str,
        payload: &[u8],
    ) -> Result<(), HostError> {
        if !lock(&self.channels).contains(channel) {
            return Err(HostError::ChannelNotRegistered(channel.to_string()));
        }
        if !self.players.contains_key(&player_id) {
            return Err(HostError::PlayerNotConnected(player_id));
        }
        debug!(
            "Proxy frame from {}: {} bytes on {}",
            self.display_name(player_id),
            payload.len(),
            channel
        );
        lock(&self.proxy_frames)
            .push((player_id, channel.to_string(), payload.to_vec()));
        Ok(())
    }
}
