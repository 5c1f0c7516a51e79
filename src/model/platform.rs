//! Data returned by chat platform lookups.

/// Result of resolving a user id on the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformUser {
    pub id: String,
    pub name: String,
    /// Whether the platform flags this account as automated.
    pub bot: bool,
}

/// Guild metadata logged by `!guild`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildInfo {
    pub id: String,
    pub name: String,
    pub member_count: Option<u64>,
    /// (user id, voice channel id) for every member currently in voice.
    pub voice_states: Vec<(String, String)>,
}
