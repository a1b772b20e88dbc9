//! Waypoint Lobby Testbed - Main Entry Point
//!
//! Runs the lobby plugin against a simulated host: players join, receive the
//! selector, open the menu, and click through every entry, with all host
//! side effects logged. Captured proxy frames are decoded and reported at
//! the end of the run.

mod args;
mod logging;
mod sim;

use anyhow::{anyhow, Result};
use args::Args;
use clap::Parser;
use plugin_lobby::LobbyPlugin;
use sim::{SimHost, SimRegistry};
use std::sync::Arc;
use tracing::{info, warn};
use waypoint_config::SELECTOR_MARKER_TAG;
use waypoint_host::{
    current_timestamp, HostContext, HostPlugin, InventoryClickEvent, PlayerId,
    PlayerInteractEvent, PlayerJoinedEvent,
};
use waypoint_selector::wire::decode_connect;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::setup_logging(&args)?;

    info!("Starting Waypoint lobby testbed");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let registry = if args.legacy {
        info!("Simulating a legacy host registry");
        SimRegistry::legacy()
    } else {
        SimRegistry::modern()
    };
    let host = Arc::new(SimHost::new(registry));
    let plugin = LobbyPlugin::new(Arc::clone(&host) as Arc<dyn HostContext>, &args.config);

    plugin.on_enable().await?;
    info!("Configuration loaded from: {}", args.config.display());

    // Bring the players online; the next tick delivers their selectors.
    let players: Vec<PlayerId> = (1..=args.players)
        .map(|n| host.join(format!("player{}", n)))
        .collect();
    for player in &players {
        plugin
            .on_player_joined(PlayerJoinedEvent {
                player_id: *player,
                timestamp: current_timestamp(),
            })
            .await;
    }
    host.tick();

    for player in &players {
        walk_menu(&host, &plugin, *player).await?;
    }

    report_proxy_traffic(&host);

    plugin.on_disable().await?;
    info!("Testbed run complete");
    Ok(())
}

/// Walks one player through the selector: use the granted item, then click
/// every occupied menu slot in order.
async fn walk_menu(host: &Arc<SimHost>, plugin: &LobbyPlugin, player: PlayerId) -> Result<()> {
    let selector = host
        .inventory_of(player)
        .into_values()
        .find(|stack| stack.has_tag(SELECTOR_MARKER_TAG))
        .ok_or_else(|| anyhow!("player {} was never granted a selector", player))?;

    plugin
        .on_player_interact(PlayerInteractEvent {
            player_id: player,
            held: Some(selector),
            timestamp: current_timestamp(),
        })
        .await;

    let view = host
        .view_of(player)
        .ok_or_else(|| anyhow!("menu did not open for {}", player))?;
    let mut slots: Vec<u32> = view.items.keys().copied().collect();
    slots.sort_unstable();

    for slot in slots {
        plugin
            .on_inventory_click(InventoryClickEvent {
                player_id: player,
                view: Some(view.token),
                slot,
                clicked: view.items.get(&slot).cloned(),
                timestamp: current_timestamp(),
            })
            .await;
    }
    Ok(())
}

/// Decodes and logs every frame the simulated proxy captured.
fn report_proxy_traffic(host: &SimHost) {
    let frames = host.frames();
    info!("Proxy captured {} transfer frame(s)", frames.len());
    for (player_id, channel, payload) in frames {
        match decode_connect(&payload) {
            Ok(server) => info!(
                "  {} -> {} ({} bytes on {})",
                player_id,
                server,
                payload.len(),
                channel
            ),
            Err(e) => warn!("  Undecodable frame from {}: {}", player_id, e),
        }
    }
}
