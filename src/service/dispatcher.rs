//! Text command dispatch.
//!
//! The dispatcher classifies a message with the prefix table in `model::command`, runs the
//! matching action against the presence tracker, the weapon catalog and the platform, and
//! returns the messages to deliver. Delivery itself is left to the caller.
//!
//! The active voice session is owned here rather than held globally. It sits behind an
//! async mutex so that concurrent `!join` and `!leave` commands are applied one at a time.

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    error::dispatch::DispatchError,
    model::{
        command::Command,
        message::{InboundMessage, OutboundContent, OutboundMessage},
        user::UserState,
        voice::VoiceSession,
        weapon::Weapon,
    },
    service::{
        assigner::WeaponAssigner, platform::Platform, presence::PresenceTracker,
        weapon_catalog::WeaponCatalog,
    },
};

pub const JOIN_CONFIRMATION: &str = "ボイスチャンネルに参加しました";

pub struct CommandDispatcher {
    tracker: PresenceTracker,
    catalog: Arc<dyn WeaponCatalog>,
    session: Mutex<Option<VoiceSession>>,
}

impl CommandDispatcher {
    /// Creates a dispatcher with no active voice session.
    ///
    /// # Arguments
    /// - `tracker` - Presence tracker shared with the voice state handler
    /// - `catalog` - Weapon catalog used by `!random`
    pub fn new(tracker: PresenceTracker, catalog: Arc<dyn WeaponCatalog>) -> Self {
        Self {
            tracker,
            catalog,
            session: Mutex::new(None),
        }
    }

    /// Handles one inbound message.
    ///
    /// Messages that do not start with a command token are ignored without output.
    ///
    /// # Returns
    /// - `Ok(Vec<OutboundMessage>)` - Messages to deliver, possibly none
    /// - `Err(DispatchError)` - The action failed; nothing should be delivered
    pub async fn dispatch(
        &self,
        platform: &dyn Platform,
        message: &InboundMessage,
    ) -> Result<Vec<OutboundMessage>, DispatchError> {
        let Some(command) = Command::parse(&message.content) else {
            return Ok(Vec::new());
        };

        tracing::debug!("{} invoked {}", message.author_name, command.token());

        match command {
            Command::Join => self.join(platform, message).await,
            Command::Leave => self.leave(platform).await,
            Command::Random => self.random(platform).await,
            Command::Guild => self.guild(platform, message).await,
            Command::Users => self.users(message).await,
        }
    }

    /// The voice session currently held, if any.
    pub async fn active_session(&self) -> Option<VoiceSession> {
        self.session.lock().await.clone()
    }

    async fn join(
        &self,
        platform: &dyn Platform,
        message: &InboundMessage,
    ) -> Result<Vec<OutboundMessage>, DispatchError> {
        let channel_id = self.sender_channel(&message.author_id).await?;

        let mut session = self.session.lock().await;

        if let Some(previous) = session.take() {
            if let Err(e) = platform.leave_voice(&previous).await {
                tracing::warn!(
                    "Failed to leave voice channel {} before rejoining: {}",
                    previous.channel_id,
                    e
                );
            }
        }

        let joined = platform.join_voice(&message.guild_id, &channel_id).await?;
        tracing::info!(
            "Joined voice channel {} in guild {}",
            joined.channel_id,
            joined.guild_id
        );
        *session = Some(joined);

        Ok(vec![OutboundMessage::text(channel_id, JOIN_CONFIRMATION)])
    }

    async fn leave(&self, platform: &dyn Platform) -> Result<Vec<OutboundMessage>, DispatchError> {
        let Some(session) = self.session.lock().await.take() else {
            return Err(DispatchError::NoActiveSession);
        };

        if let Err(e) = platform.leave_voice(&session).await {
            tracing::warn!(
                "Failed to leave voice channel {}: {}",
                session.channel_id,
                e
            );
        } else {
            let held = Utc::now() - session.joined_at;
            tracing::info!(
                "Left voice channel {} after {}s",
                session.channel_id,
                held.num_seconds()
            );
        }

        Ok(Vec::new())
    }

    async fn random(&self, platform: &dyn Platform) -> Result<Vec<OutboundMessage>, DispatchError> {
        let weapons = self.catalog.fetch().await?;
        let users = self.tracker.all().await;

        let assignments: Vec<(UserState, Weapon)> = {
            let mut rng = rand::rng();
            WeaponAssigner::assign(&users, &weapons, &mut rng)?
                .into_iter()
                .map(|(user, weapon)| (user, weapon.clone()))
                .collect()
        };

        let mut outbound = Vec::new();
        for (user, weapon) in assignments {
            match platform.lookup_user(&user.id).await {
                Ok(account) if account.bot => {
                    tracing::debug!(
                        "Skipping automated account {} ({})",
                        account.name,
                        account.id
                    );
                    continue;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("Failed to look up user {}: {}", user.id, e);
                    continue;
                }
            }

            let Some(channel_id) = user.current_voice_channel.clone() else {
                tracing::debug!("Skipping {}: not in a voice channel", user.name);
                continue;
            };

            tracing::info!("{}さん:{}", user.name, weapon.weapon_name.ja_jp);
            outbound.push(assignment_message(channel_id, &user, &weapon));
        }

        Ok(outbound)
    }

    async fn guild(
        &self,
        platform: &dyn Platform,
        message: &InboundMessage,
    ) -> Result<Vec<OutboundMessage>, DispatchError> {
        let guild = platform.guild_info(&message.guild_id).await?;

        tracing::info!(
            "Guild {} ({}) - members: {:?}, in voice: {}",
            guild.name,
            guild.id,
            guild.member_count,
            guild.voice_states.len()
        );
        for (user_id, channel_id) in &guild.voice_states {
            tracing::info!("Voice state: user {} in {}", user_id, channel_id);
        }

        Ok(Vec::new())
    }

    async fn users(&self, message: &InboundMessage) -> Result<Vec<OutboundMessage>, DispatchError> {
        let channel_id = self.sender_channel(&message.author_id).await?;

        tracing::info!(
            "{} requested users of voice channel {}",
            message.author_name,
            channel_id
        );

        let outbound = self
            .tracker
            .all_users_in_channel(&channel_id)
            .await
            .into_iter()
            .map(|user| {
                OutboundMessage::text(
                    channel_id.clone(),
                    format!("{}さんが参加してます", user.name),
                )
            })
            .collect();

        Ok(outbound)
    }

    /// Voice channel the sender is tracked in.
    async fn sender_channel(&self, user_id: &str) -> Result<String, DispatchError> {
        let user = self
            .tracker
            .get(user_id)
            .await
            .ok_or_else(|| DispatchError::MissingUserState {
                user_id: user_id.to_string(),
            })?;

        user.current_voice_channel
            .ok_or_else(|| DispatchError::NotInVoiceChannel {
                user_id: user_id.to_string(),
            })
    }
}

fn assignment_message(channel_id: String, user: &UserState, weapon: &Weapon) -> OutboundMessage {
    OutboundMessage {
        channel_id,
        content: OutboundContent::Embed {
            title: format!("{}さん:{}", user.name, weapon.weapon_name.ja_jp),
            description: weapon.weapon_type.name.ja_jp.clone(),
            fields: vec![
                ("Sub".to_string(), weapon.sub_weapon.name.ja_jp.clone()),
                ("Special".to_string(), weapon.special_weapon.name.ja_jp.clone()),
            ],
        },
    }
}
