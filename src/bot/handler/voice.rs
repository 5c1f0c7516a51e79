use serenity::all::VoiceState;

use crate::{
    bot::{convert::membership_change, platform::DiscordPlatform},
    service::presence::{PresenceService, PresenceTracker},
};

/// Handles the voice_state_update event when a user's voice channel changes
pub async fn handle_voice_state_update(
    tracker: &PresenceTracker,
    platform: &DiscordPlatform,
    _old: Option<VoiceState>,
    new: VoiceState,
) {
    let (change, known_name) = membership_change(&new);

    PresenceService::new(tracker, platform)
        .handle_membership_change(&change, known_name)
        .await;
}
