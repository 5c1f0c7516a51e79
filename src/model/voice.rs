use chrono::{DateTime, Utc};

/// The voice session the bot holds after `!join`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSession {
    pub guild_id: String,
    pub channel_id: String,
    pub joined_at: DateTime<Utc>,
}
