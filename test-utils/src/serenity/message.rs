//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

use super::user::user_json;

/// Creates a test Serenity Message.
///
/// # Arguments
/// - `author_id` - Discord user ID of the author
/// - `author_name` - Username of the author
/// - `channel_id` - Channel the message was sent in
/// - `guild_id` - Guild of the channel, `None` for a direct message
/// - `content` - Message text
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    author_id: u64,
    author_name: &str,
    channel_id: u64,
    guild_id: Option<u64>,
    content: &str,
) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": "900000000000000000",
        "channel_id": channel_id.to_string(),
        "guild_id": guild_id.map(|id| id.to_string()),
        "author": user_json(author_id, author_name, false),
        "content": content,
        "timestamp": "2024-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "type": 0,
        "flags": 0,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
