use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Installs the global tracing subscriber.
///
/// Defaults to `info` for this crate and `warn` for dependencies; `RUST_LOG`
/// overrides both.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,spl_random_bot=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the HTTP client used for the weapon catalog.
///
/// Redirects are disabled and the whole request is bounded by `timeout`.
///
/// # Arguments
/// - `timeout` - Upper bound for one request
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client(timeout: Duration) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}
