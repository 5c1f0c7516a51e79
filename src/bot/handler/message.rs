use serenity::all::{Context, Message};

use crate::{
    bot::{convert::inbound_message, platform::DiscordPlatform, send::deliver_all},
    error::dispatch::DispatchError,
    model::message::{InboundMessage, OutboundMessage},
    service::dispatcher::CommandDispatcher,
};

/// Handle message creation in a channel
///
/// Every guild message is logged; command failures are logged here and never
/// propagate further.
pub async fn handle_message(
    dispatcher: &CommandDispatcher,
    platform: &DiscordPlatform,
    ctx: Context,
    message: Message,
) {
    // Only handle messages in guild channels (not DMs)
    let Some(inbound) = inbound_message(&message) else {
        return;
    };

    tracing::info!(
        "{} {} > {}",
        inbound.channel_id,
        inbound.author_name,
        inbound.content
    );

    let result = dispatcher.dispatch(platform, &inbound).await;
    let outbound = report(result, &inbound);

    deliver_all(&ctx.http, &outbound).await;
}

/// Turns a dispatch result into the messages to deliver.
///
/// A failed command is logged once, at warn for conditions caused by the sender and at
/// error for everything else, and delivers nothing.
pub fn report(
    result: Result<Vec<OutboundMessage>, DispatchError>,
    inbound: &InboundMessage,
) -> Vec<OutboundMessage> {
    match result {
        Ok(outbound) => outbound,
        Err(e) if e.is_user_error() => {
            tracing::warn!("Command '{}' not handled: {}", inbound.content, e);
            Vec::new()
        }
        Err(e) => {
            tracing::error!("Command '{}' failed: {}", inbound.content, e);
            Vec::new()
        }
    }
}
