//! Bot services.
//!
//! - **Presence** (`presence`) - serialized owner of who is in which voice channel
//! - **Dispatcher** (`dispatcher`) - classifies text commands and runs their actions
//! - **Weapon catalog** (`weapon_catalog`) - fetches the current weapon list over HTTP
//! - **Assigner** (`assigner`) - draws one weapon per user
//! - **Platform** (`platform`) - trait the services use to reach Discord

pub mod assigner;
pub mod dispatcher;
pub mod platform;
pub mod presence;
pub mod weapon_catalog;
