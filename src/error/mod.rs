//! Error types for the bot.
//!
//! `AppError` is the top-level error type for startup and for calls into the chat platform.
//! Command handling has its own taxonomy in [`dispatch::DispatchError`], which every action
//! returns and which the gateway handler converts into a log record instead of propagating.

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates errors raised during startup and by the platform adapter. Most variants
/// use `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Voice gateway error from Songbird while joining or leaving a channel.
    #[error(transparent)]
    VoiceErr(#[from] songbird::error::JoinError),

    /// HTTP client construction or request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Internal issue such as a stored id that is not a valid snowflake.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// An external call did not finish within the configured bound.
    #[error("External call timed out")]
    Timeout(#[from] tokio::time::error::Elapsed),

    /// Resource not found on the platform.
    #[error("{0}")]
    NotFound(String),

    /// Request that the platform cannot satisfy as asked (e.g. joining a text channel).
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
