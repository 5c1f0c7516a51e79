//! Spl Random Bot Test Utils
//!
//! Shared helpers for the bot's unit tests.
//!
//! # Overview
//!
//! - **serenity**: factories that build Serenity gateway objects (`User`, `Message`,
//!   `VoiceState`) from JSON, the way Discord would send them
//! - **fixture**: JSON bodies for the weapon catalog endpoint
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::voice_state::create_test_voice_state;
//! use test_utils::fixture::weapon::catalog_json;
//!
//! let state = create_test_voice_state(11, Some(44), 33, Some("alice"));
//! let body = catalog_json(&[("sshooter", "スプラシューター")]);
//! ```

pub mod fixture;
pub mod serenity;
