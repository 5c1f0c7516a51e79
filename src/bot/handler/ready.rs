//! Ready event handler.
//!
//! Fired once per connection after the gateway handshake; only logs the connection.

use serenity::all::{Context, Ready};

/// Handles the ready event when the bot connects to Discord.
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);
    tracing::info!("Listening...");
}
