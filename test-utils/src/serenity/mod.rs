//! Test factories for creating Serenity gateway objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's gateway would deliver. Only the fields the bot reads are
//! customizable; everything else gets a fixed, valid default.
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `message::create_test_message` - Create Serenity Message objects
//! - `voice_state::create_test_voice_state` - Create Serenity VoiceState objects

pub mod message;
pub mod user;
pub mod voice_state;

pub use message::create_test_message;
pub use user::create_test_user;
pub use voice_state::create_test_voice_state;
