//! JSON fixtures for external services.

pub mod weapon;
