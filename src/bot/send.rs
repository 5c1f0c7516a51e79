//! Delivery of outbound messages through the Discord HTTP API.

use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage},
    http::Http,
};
use std::sync::Arc;

use crate::{
    error::AppError,
    model::message::{OutboundContent, OutboundMessage},
    util::parse::parse_snowflake,
};

/// Embed color used for every embed the bot posts.
const EMBED_COLOR: u32 = 0xFF0000;

/// Renders outbound content into a Serenity message builder.
pub fn build_message(content: &OutboundContent) -> CreateMessage {
    match content {
        OutboundContent::Text(text) => CreateMessage::new().content(text),
        OutboundContent::Embed {
            title,
            description,
            fields,
        } => {
            let embed = CreateEmbed::new()
                .title(title)
                .description(description)
                .color(EMBED_COLOR)
                .fields(
                    fields
                        .iter()
                        .map(|(name, value)| (name.clone(), value.clone(), true)),
                );
            CreateMessage::new().embed(embed)
        }
    }
}

/// Sends one message to its channel.
///
/// # Returns
/// - `Ok(())` - Message posted
/// - `Err(AppError::InternalErr)` - Channel id is not a snowflake
/// - `Err(AppError::DiscordErr)` - Discord rejected the request
pub async fn deliver(http: &Arc<Http>, message: &OutboundMessage) -> Result<(), AppError> {
    let channel_id = ChannelId::new(parse_snowflake(&message.channel_id)?);

    tracing::info!(">>> {}", message.summary());

    channel_id
        .send_message(http, build_message(&message.content))
        .await?;

    Ok(())
}

/// Sends messages in order, logging failures without stopping at the first one.
pub async fn deliver_all(http: &Arc<Http>, messages: &[OutboundMessage]) {
    for message in messages {
        if let Err(e) = deliver(http, message).await {
            tracing::error!(
                "Error sending message to channel {}: {}",
                message.channel_id,
                e
            );
        }
    }
}
