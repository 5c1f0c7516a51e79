use serenity::all::{Context, EventHandler, Message, Ready, VoiceState};
use serenity::async_trait;
use songbird::Songbird;
use std::sync::Arc;
use std::time::Duration;

use crate::bot::platform::DiscordPlatform;
use crate::service::{dispatcher::CommandDispatcher, presence::PresenceTracker};

pub mod message;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub tracker: PresenceTracker,
    pub dispatcher: CommandDispatcher,
    /// Voice manager registered on the client
    pub voice: Arc<Songbird>,
    /// Bound applied to every platform call made while handling an event
    pub external_timeout: Duration,
}

impl Handler {
    pub fn new(
        tracker: PresenceTracker,
        dispatcher: CommandDispatcher,
        voice: Arc<Songbird>,
        external_timeout: Duration,
    ) -> Self {
        Self {
            tracker,
            dispatcher,
            voice,
            external_timeout,
        }
    }

    fn platform(&self, ctx: &Context) -> DiscordPlatform {
        DiscordPlatform::new(
            ctx.http.clone(),
            ctx.cache.clone(),
            self.voice.clone(),
            self.external_timeout,
        )
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        let platform = self.platform(&ctx);
        message::handle_message(&self.dispatcher, &platform, ctx, message).await;
    }

    /// Called when a user joins, leaves or moves between voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        let platform = self.platform(&ctx);
        voice::handle_voice_state_update(&self.tracker, &platform, old, new).await;
    }
}
