//! Voice presence tracking.
//!
//! `PresenceTracker` is the single owner of the user presence map. Voice state events and
//! command handlers run concurrently on the gateway's tasks, so every read and write goes
//! through one lock and no caller ever holds a reference into the map.
//!
//! `PresenceService` wraps the tracker with the platform calls a membership change needs:
//! resolving the name of a user seen for the first time and the channel name for logging.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    model::{message::MembershipChange, user::UserState},
    service::platform::Platform,
};

/// How a membership change moved a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenceTransition {
    /// Channel unchanged.
    Unchanged,
    /// Entered `channel`, either from another channel or from outside voice.
    Joined {
        previous: Option<String>,
        channel: String,
    },
    /// Left voice entirely.
    Left { previous: String },
}

/// Outcome of applying one membership change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceUpdate {
    /// Stored state after the change
    pub user: UserState,
    /// Whether the user was seen for the first time
    pub created: bool,
    pub transition: PresenceTransition,
}

/// Shared map from user id to last known voice presence.
///
/// Cloning is cheap and every clone refers to the same map.
#[derive(Clone, Default)]
pub struct PresenceTracker {
    users: Arc<RwLock<HashMap<String, UserState>>>,
}

impl PresenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a membership change as an idempotent upsert.
    ///
    /// An unseen user is created with `known_name` (empty when `None`). A known user keeps
    /// the name captured at first observation and only has the channel updated. `None` as
    /// the new channel is stored as "left voice".
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `new_channel` - Voice channel now occupied, `None` after leaving voice
    /// - `known_name` - Display name to use if the user is new
    ///
    /// # Returns
    /// - `PresenceUpdate` - Resulting state and the transition it represents
    pub async fn on_membership_change(
        &self,
        user_id: &str,
        new_channel: Option<String>,
        known_name: Option<String>,
    ) -> PresenceUpdate {
        let mut users = self.users.write().await;

        let created = !users.contains_key(user_id);
        let user = users.entry(user_id.to_string()).or_insert_with(|| {
            UserState::new(user_id.to_string(), known_name.unwrap_or_default(), None)
        });

        let transition = match (&user.current_voice_channel, &new_channel) {
            (previous, Some(channel)) if previous.as_ref() != Some(channel) => {
                PresenceTransition::Joined {
                    previous: previous.clone(),
                    channel: channel.clone(),
                }
            }
            (Some(previous), None) => PresenceTransition::Left {
                previous: previous.clone(),
            },
            _ => PresenceTransition::Unchanged,
        };

        if transition != PresenceTransition::Unchanged {
            user.current_voice_channel = new_channel;
        }

        PresenceUpdate {
            user: user.clone(),
            created,
            transition,
        }
    }

    pub async fn contains(&self, user_id: &str) -> bool {
        self.users.read().await.contains_key(user_id)
    }

    /// Returns a copy of the user's state, if tracked.
    pub async fn get(&self, user_id: &str) -> Option<UserState> {
        self.users.read().await.get(user_id).cloned()
    }

    /// Returns every tracked user currently in `channel_id`, in no particular order.
    pub async fn all_users_in_channel(&self, channel_id: &str) -> Vec<UserState> {
        self.users
            .read()
            .await
            .values()
            .filter(|user| user.is_in(channel_id))
            .cloned()
            .collect()
    }

    /// Snapshot of every tracked user.
    pub async fn all(&self) -> Vec<UserState> {
        self.users.read().await.values().cloned().collect()
    }
}

/// Applies voice state events to the tracker.
pub struct PresenceService<'a> {
    tracker: &'a PresenceTracker,
    platform: &'a dyn Platform,
}

impl<'a> PresenceService<'a> {
    pub fn new(tracker: &'a PresenceTracker, platform: &'a dyn Platform) -> Self {
        Self { tracker, platform }
    }

    /// Records a membership change, resolving the name of users seen for the first time.
    ///
    /// For an unseen user, `known_name` is used when the event carried one; otherwise the
    /// name is looked up on the platform before the tracker lock is taken. A failed lookup
    /// leaves the name empty and the channel update is applied regardless.
    ///
    /// # Arguments
    /// - `change` - The voice state change to apply
    /// - `known_name` - Display name delivered with the event, if any
    ///
    /// # Returns
    /// - `PresenceUpdate` - Resulting state and the transition it represents
    pub async fn handle_membership_change(
        &self,
        change: &MembershipChange,
        known_name: Option<String>,
    ) -> PresenceUpdate {
        let known_name = if self.tracker.contains(&change.user_id).await {
            None
        } else if known_name.is_some() {
            known_name
        } else {
            match self.platform.lookup_user(&change.user_id).await {
                Ok(user) => Some(user.name),
                Err(e) => {
                    tracing::warn!(
                        "Failed to look up name of new user {}: {}",
                        change.user_id,
                        e
                    );
                    None
                }
            }
        };

        let update = self
            .tracker
            .on_membership_change(&change.user_id, change.channel_id.clone(), known_name)
            .await;

        if update.created {
            tracing::info!("New user observed: {} ({})", update.user.name, update.user.id);
        }

        match &update.transition {
            PresenceTransition::Joined { previous, channel } => {
                let channel_name = match self.platform.channel_name(channel).await {
                    Ok(name) => name,
                    Err(e) => {
                        tracing::debug!("Failed to resolve channel {} name: {}", channel, e);
                        channel.clone()
                    }
                };
                match previous {
                    Some(previous) => tracing::info!(
                        "{} moved from {} to {}",
                        update.user.name,
                        previous,
                        channel_name
                    ),
                    None => tracing::info!("{} joined {}", update.user.name, channel_name),
                }
            }
            PresenceTransition::Left { previous } => {
                tracing::info!("{} left voice channel {}", update.user.name, previous);
            }
            PresenceTransition::Unchanged => {}
        }

        if let Some(channel) = &update.user.current_voice_channel {
            tracing::debug!(
                "{} is now in {} as of {}",
                update.user.name,
                channel,
                change.timestamp
            );
        }

        update
    }
}
