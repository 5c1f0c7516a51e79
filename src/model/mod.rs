//! Domain models.
//!
//! Plain data types shared by the services and the gateway glue. Ids are carried as
//! strings throughout and only parsed into Discord snowflakes at the platform boundary.

pub mod command;
pub mod message;
pub mod platform;
pub mod user;
pub mod voice;
pub mod weapon;
