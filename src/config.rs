use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_WEAPON_CATALOG_URL: &str = "https://stat.ink/api/v3/weapon";
const DEFAULT_EXTERNAL_TIMEOUT_SECS: u64 = 10;

pub struct Config {
    pub discord_token: String,

    pub weapon_catalog_url: String,

    /// Upper bound for the catalog fetch and every platform lookup
    pub external_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let external_timeout = match std::env::var("EXTERNAL_TIMEOUT_SECS") {
            Ok(value) => parse_timeout_secs("EXTERNAL_TIMEOUT_SECS", &value)?,
            Err(_) => Duration::from_secs(DEFAULT_EXTERNAL_TIMEOUT_SECS),
        };

        Ok(Self {
            discord_token: std::env::var("DISCORD_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            weapon_catalog_url: std::env::var("WEAPON_CATALOG_URL")
                .unwrap_or_else(|_| DEFAULT_WEAPON_CATALOG_URL.to_string()),
            external_timeout,
        })
    }
}

fn parse_timeout_secs(name: &str, value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
