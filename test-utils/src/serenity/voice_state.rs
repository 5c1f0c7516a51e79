//! Test factory for creating Serenity VoiceState objects.

use serenity::all::VoiceState;

use super::user::user_json;

/// Creates a test Serenity VoiceState.
///
/// # Arguments
/// - `user_id` - Discord user ID whose voice state changed
/// - `channel_id` - Voice channel now occupied, `None` after leaving voice
/// - `guild_id` - Guild the voice state belongs to
/// - `member_name` - Username to embed as member data, `None` to omit the member
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (indicates invalid test data)
pub fn create_test_voice_state(
    user_id: u64,
    channel_id: Option<u64>,
    guild_id: u64,
    member_name: Option<&str>,
) -> VoiceState {
    let member = member_name.map(|name| {
        serde_json::json!({
            "guild_id": guild_id.to_string(),
            "user": user_json(user_id, name, false),
            "nick": null,
            "avatar": null,
            "roles": [],
            "joined_at": "2020-01-01T00:00:00.000000+00:00",
            "premium_since": null,
            "deaf": false,
            "mute": false,
            "flags": 0,
            "pending": false,
        })
    });

    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "channel_id": channel_id.map(|id| id.to_string()),
        "user_id": user_id.to_string(),
        "member": member,
        "session_id": "test-session",
        "deaf": false,
        "mute": false,
        "self_deaf": false,
        "self_mute": false,
        "self_stream": false,
        "self_video": false,
        "suppress": false,
        "request_to_speak_timestamp": null,
    }))
    .expect("Failed to create test voice state - invalid JSON structure")
}
