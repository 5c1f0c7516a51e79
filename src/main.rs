mod bot;
mod config;
mod error;
mod model;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use crate::{
    config::Config, error::AppError, service::weapon_catalog::HttpWeaponCatalog,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let env_loaded = dotenvy::dotenv();

    startup::init_tracing();

    if let Err(e) = env_loaded {
        tracing::debug!("No .env file loaded: {}", e);
    }

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client(config.external_timeout)?;
    let catalog = Arc::new(HttpWeaponCatalog::new(
        http_client,
        config.weapon_catalog_url.clone(),
        config.external_timeout,
    ));

    let client = bot::start::init_bot(&config, catalog).await?;
    bot::start::start_bot(client).await?;

    Ok(())
}
