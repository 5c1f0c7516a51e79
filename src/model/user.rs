//! Tracked user presence.

/// Last known voice presence of one user.
///
/// Created the first time a membership change is observed for the user and never
/// removed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserState {
    /// Discord ID of the user
    pub id: String,
    /// Display name captured at first observation. Empty when the lookup failed.
    pub name: String,
    /// Voice channel the user currently occupies, `None` after leaving voice.
    pub current_voice_channel: Option<String>,
}

impl UserState {
    pub fn new(id: String, name: String, current_voice_channel: Option<String>) -> Self {
        Self {
            id,
            name,
            current_voice_channel,
        }
    }

    /// Whether the user is currently in the given voice channel.
    pub fn is_in(&self, channel_id: &str) -> bool {
        self.current_voice_channel.as_deref() == Some(channel_id)
    }
}
