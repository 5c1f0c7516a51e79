//! Serenity implementation of the platform seam.
//!
//! Built per event from the gateway context, so it holds only cheap `Arc` handles. Every
//! call is bounded by the configured external timeout.
//!
//! Voice connections go through Songbird's gateway manager, which is registered on the
//! client at startup and shared with every platform instance.

use async_trait::async_trait;
use chrono::Utc;
use serenity::{
    all::{ChannelId, ChannelType, GuildChannel, GuildId, UserId},
    cache::Cache,
    http::Http,
};
use songbird::Songbird;
use std::{future::Future, sync::Arc, time::Duration};

use crate::{
    bot::convert::platform_user,
    error::AppError,
    model::{
        platform::{GuildInfo, PlatformUser},
        voice::VoiceSession,
    },
    service::platform::Platform,
    util::parse::parse_snowflake,
};

pub struct DiscordPlatform {
    http: Arc<Http>,
    cache: Arc<Cache>,
    voice: Arc<Songbird>,
    timeout: Duration,
}

impl DiscordPlatform {
    pub fn new(
        http: Arc<Http>,
        cache: Arc<Cache>,
        voice: Arc<Songbird>,
        timeout: Duration,
    ) -> Self {
        Self {
            http,
            cache,
            voice,
            timeout,
        }
    }

    async fn bounded<T, E, F>(&self, request: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, E>>,
        AppError: From<E>,
    {
        Ok(tokio::time::timeout(self.timeout, request).await??)
    }

    async fn guild_channel(&self, channel_id: &str) -> Result<GuildChannel, AppError> {
        let id = ChannelId::new(parse_snowflake(channel_id)?);
        let channel = self.bounded(self.http.get_channel(id)).await?;

        channel
            .guild()
            .ok_or_else(|| AppError::NotFound(format!("{} is not a guild channel", channel_id)))
    }
}

#[async_trait]
impl Platform for DiscordPlatform {
    async fn lookup_user(&self, user_id: &str) -> Result<PlatformUser, AppError> {
        let id = UserId::new(parse_snowflake(user_id)?);
        let user = self.bounded(self.http.get_user(id)).await?;

        Ok(platform_user(&user))
    }

    async fn guild_info(&self, guild_id: &str) -> Result<GuildInfo, AppError> {
        let id = GuildId::new(parse_snowflake(guild_id)?);

        // Voice states are only available from the gateway cache
        let cached = self.cache.guild(id).map(|guild| GuildInfo {
            id: guild.id.to_string(),
            name: guild.name.clone(),
            member_count: Some(guild.member_count),
            voice_states: guild
                .voice_states
                .values()
                .filter_map(|state| {
                    state
                        .channel_id
                        .map(|channel| (state.user_id.to_string(), channel.to_string()))
                })
                .collect(),
        });
        if let Some(info) = cached {
            return Ok(info);
        }

        tracing::debug!("Guild {} not cached, fetching from API", guild_id);
        let guild = self.bounded(self.http.get_guild(id)).await?;

        Ok(GuildInfo {
            id: guild.id.to_string(),
            name: guild.name,
            member_count: guild.approximate_member_count,
            voice_states: Vec::new(),
        })
    }

    async fn channel_name(&self, channel_id: &str) -> Result<String, AppError> {
        Ok(self.guild_channel(channel_id).await?.name)
    }

    /// Validates the target and connects the bot to the voice channel.
    ///
    /// Only the gateway side of the connection is established; the bot never plays audio.
    async fn join_voice(
        &self,
        guild_id: &str,
        channel_id: &str,
    ) -> Result<VoiceSession, AppError> {
        let channel = self.guild_channel(channel_id).await?;

        if !matches!(channel.kind, ChannelType::Voice | ChannelType::Stage) {
            return Err(AppError::BadRequest(format!(
                "Channel {} is not a voice channel",
                channel.name
            )));
        }
        if channel.guild_id.to_string() != guild_id {
            return Err(AppError::BadRequest(format!(
                "Channel {} does not belong to guild {}",
                channel.name, guild_id
            )));
        }

        let (connection, _call) = self
            .bounded(self.voice.join_gateway(channel.guild_id, channel.id))
            .await?;
        tracing::debug!(
            "Voice gateway session {} on {}",
            connection.session_id,
            connection.endpoint
        );

        Ok(VoiceSession {
            guild_id: guild_id.to_string(),
            channel_id: channel.id.to_string(),
            joined_at: Utc::now(),
        })
    }

    /// Disconnects from the session's channel and drops the call.
    ///
    /// Fails with `VoiceErr` when the bot holds no call in that guild.
    async fn leave_voice(&self, session: &VoiceSession) -> Result<(), AppError> {
        let guild_id = GuildId::new(parse_snowflake(&session.guild_id)?);

        self.bounded(self.voice.remove(guild_id)).await?;
        tracing::debug!(
            "Disconnected from voice channel {} of guild {}",
            session.channel_id,
            session.guild_id
        );

        Ok(())
    }
}
