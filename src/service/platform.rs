//! Seam between the services and the chat platform.
//!
//! The services only ever talk to Discord through this trait, which keeps them testable
//! without a gateway connection. The production implementation lives in
//! `bot::platform::DiscordPlatform`.

use async_trait::async_trait;

use crate::{
    error::AppError,
    model::{
        platform::{GuildInfo, PlatformUser},
        voice::VoiceSession,
    },
};

/// Platform calls the services depend on.
///
/// Implementations must bound every call in time; callers never add their own timeout.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Resolves a user id to a display name and the automated-account flag.
    async fn lookup_user(&self, user_id: &str) -> Result<PlatformUser, AppError>;

    /// Fetches guild metadata including current voice states when available.
    async fn guild_info(&self, guild_id: &str) -> Result<GuildInfo, AppError>;

    /// Resolves a channel id to its display name.
    async fn channel_name(&self, channel_id: &str) -> Result<String, AppError>;

    /// Opens a voice session in `channel_id` of `guild_id`.
    async fn join_voice(&self, guild_id: &str, channel_id: &str)
        -> Result<VoiceSession, AppError>;

    /// Closes a voice session previously returned by `join_voice`.
    async fn leave_voice(&self, session: &VoiceSession) -> Result<(), AppError>;
}
