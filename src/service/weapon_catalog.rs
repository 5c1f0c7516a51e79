//! Weapon catalog client.
//!
//! Every fetch is a fresh round trip; nothing is cached between commands so a catalog
//! update on stat.ink is picked up by the next `!random`.

use async_trait::async_trait;
use std::time::Duration;

use crate::{error::catalog::CatalogError, model::weapon::Weapon};

/// Source of the weapon list.
#[async_trait]
pub trait WeaponCatalog: Send + Sync {
    /// Fetches the complete current catalog.
    async fn fetch(&self) -> Result<Vec<Weapon>, CatalogError>;
}

/// Catalog served as a JSON array over HTTP.
pub struct HttpWeaponCatalog {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpWeaponCatalog {
    /// Creates a new catalog client.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client
    /// - `url` - Endpoint returning the weapon array
    /// - `timeout` - Bound for the whole request including the body read
    pub fn new(client: reqwest::Client, url: String, timeout: Duration) -> Self {
        Self {
            client,
            url,
            timeout,
        }
    }

    async fn request(&self) -> Result<Vec<Weapon>, CatalogError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let weapons: Vec<Weapon> = serde_json::from_slice(&body)?;

        Ok(weapons)
    }
}

#[async_trait]
impl WeaponCatalog for HttpWeaponCatalog {
    async fn fetch(&self) -> Result<Vec<Weapon>, CatalogError> {
        let weapons = tokio::time::timeout(self.timeout, self.request())
            .await
            .map_err(|_| CatalogError::Timeout)??;

        tracing::debug!("Fetched {} weapons from {}", weapons.len(), self.url);

        Ok(weapons)
    }
}
