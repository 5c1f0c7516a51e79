use serenity::all::{Client, GatewayIntents};
use songbird::{SerenityInit, Songbird};
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::service::{
    dispatcher::CommandDispatcher, presence::PresenceTracker, weapon_catalog::WeaponCatalog,
};

/// Builds the Discord client with the event handler wired to the services.
///
/// # Arguments
/// - `config` - Application configuration
/// - `catalog` - Weapon catalog used by `!random`
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed (e.g. malformed token)
pub async fn init_bot(
    config: &Config,
    catalog: Arc<dyn WeaponCatalog>,
) -> Result<Client, AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_VOICE_STATES;

    let tracker = PresenceTracker::new();
    let dispatcher = CommandDispatcher::new(tracker.clone(), catalog);
    let voice = Songbird::serenity();
    let handler = Handler::new(tracker, dispatcher, voice.clone(), config.external_timeout);

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .register_songbird_with(voice)
        .await?;

    Ok(client)
}

/// Runs the Discord client until it shuts down
///
/// The shards are stopped when the process receives Ctrl-C.
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if connecting to the gateway fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }
        tracing::info!("Shutting down Discord bot");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
