//! Inbound events and outbound message requests.

use chrono::{DateTime, Utc};

/// A guild text message as seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub author_id: String,
    pub author_name: String,
    pub channel_id: String,
    pub guild_id: String,
    pub content: String,
}

/// A user's voice channel changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipChange {
    pub user_id: String,
    /// `None` when the user left voice entirely.
    pub channel_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl MembershipChange {
    /// Builds a change, treating an empty channel id as "left voice".
    pub fn new(user_id: String, channel_id: Option<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            user_id,
            channel_id: channel_id.filter(|id| !id.is_empty()),
            timestamp,
        }
    }
}

/// Body of an outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundContent {
    Text(String),
    Embed {
        title: String,
        description: String,
        /// (name, value) pairs rendered as embed fields
        fields: Vec<(String, String)>,
    },
}

/// A message the bot wants delivered to a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub channel_id: String,
    pub content: OutboundContent,
}

impl OutboundMessage {
    pub fn text(channel_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            content: OutboundContent::Text(text.into()),
        }
    }

    /// Plain-text rendering used for logging.
    pub fn summary(&self) -> String {
        match &self.content {
            OutboundContent::Text(text) => text.clone(),
            OutboundContent::Embed { title, .. } => title.clone(),
        }
    }
}
