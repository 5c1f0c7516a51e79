//! Conversion of Serenity gateway payloads into domain events.

use chrono::Utc;
use serenity::all::{Message, User, VoiceState};

use crate::model::{
    message::{InboundMessage, MembershipChange},
    platform::PlatformUser,
};

/// Converts a gateway message into an inbound message for the dispatcher.
///
/// # Returns
/// - `Some(InboundMessage)` - Message was sent in a guild channel
/// - `None` - Direct message; the bot only handles guild messages
pub fn inbound_message(message: &Message) -> Option<InboundMessage> {
    let guild_id = message.guild_id?;

    Some(InboundMessage {
        author_id: message.author.id.to_string(),
        author_name: message.author.name.clone(),
        channel_id: message.channel_id.to_string(),
        guild_id: guild_id.to_string(),
        content: message.content.clone(),
    })
}

/// Converts a voice state into a membership change.
///
/// The gateway does not timestamp voice state updates, so the change is stamped on
/// receipt.
///
/// # Returns
/// - `(MembershipChange, Option<String>)` - The change and the user's name when the
///   payload carried member data
pub fn membership_change(state: &VoiceState) -> (MembershipChange, Option<String>) {
    let change = MembershipChange::new(
        state.user_id.to_string(),
        state.channel_id.map(|id| id.to_string()),
        Utc::now(),
    );
    let known_name = state.member.as_ref().map(|member| member.user.name.clone());

    (change, known_name)
}

/// Converts a platform user into the account data the dispatcher filters on.
pub fn platform_user(user: &User) -> PlatformUser {
    PlatformUser {
        id: user.id.to_string(),
        name: user.name.clone(),
        bot: user.bot,
    }
}
