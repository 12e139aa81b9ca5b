//! Local Formbricks bootstrapper.
//!
//! Brings a containerized Formbricks instance up and down, provisions a seed
//! account with an API key, generates synthetic surveys and users, and seeds
//! them through the platform API.

pub mod commands;
pub mod config;
pub mod error;
pub mod generate;
pub mod lifecycle;
pub mod platform;
pub mod util;

#[cfg(test)]
pub(crate) mod testing;

pub use config::Config;
pub use error::{Error, Result};
