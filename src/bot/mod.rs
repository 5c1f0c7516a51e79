//! Discord gateway integration.
//!
//! This module connects the services to Discord through Serenity. The event handler
//! turns gateway events into domain events, runs them through the presence tracker or
//! the command dispatcher, and delivers whatever messages the dispatcher produced.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Populate the guild cache used by `!guild`
//! - `GUILD_MESSAGES` - Receive messages in guild channels
//! - `MESSAGE_CONTENT` - Read the text of those messages (privileged intent)
//! - `GUILD_VOICE_STATES` - Receive voice channel membership changes
//!
//! Voice connections for `!join` and `!leave` go through Songbird, registered on the
//! client in [`start::init_bot`].
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod convert;
pub mod handler;
pub mod platform;
pub mod send;
pub mod start;
