use thiserror::Error;

use crate::error::{catalog::CatalogError, AppError};

/// Failure of a single command action.
///
/// None of these terminate event handling. The gateway handler logs them and goes on
/// waiting for the next message; the user sees no confirmation.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Command references a user that no membership change has been observed for.
    #[error("No tracked presence for user {user_id}")]
    MissingUserState { user_id: String },

    /// User is tracked but not currently in any voice channel.
    #[error("User {user_id} is not in a voice channel")]
    NotInVoiceChannel { user_id: String },

    /// Leave requested with no voice session active.
    #[error("No active voice session")]
    NoActiveSession,

    /// Catalog fetch failed; aborts random assignment.
    #[error(transparent)]
    CatalogFetch(#[from] CatalogError),

    /// Catalog fetch succeeded but held no weapons.
    #[error("Weapon catalog is empty")]
    NoWeaponsAvailable,

    /// User or guild metadata lookup on the platform failed.
    #[error("Platform lookup failed: {0}")]
    ExternalLookup(#[from] AppError),
}

impl DispatchError {
    /// Whether this failure is an expected user mistake rather than a fault.
    ///
    /// Used to pick the log level at the action boundary.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::MissingUserState { .. } | Self::NotInVoiceChannel { .. } | Self::NoActiveSession
        )
    }
}
