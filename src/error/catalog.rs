use thiserror::Error;

/// Failure to obtain the weapon catalog.
///
/// Covers both transport failures and any non-success response status. There is no
/// retry; the caller aborts the action that requested the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Connection, TLS or body read failure.
    #[error("Weapon catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog service answered with a non-2xx status.
    #[error("Weapon catalog returned HTTP status {0}")]
    Status(u16),

    /// The response body is not a JSON array of weapons.
    #[error("Failed to decode weapon catalog: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request did not complete within the configured bound.
    #[error("Weapon catalog request timed out")]
    Timeout,
}
