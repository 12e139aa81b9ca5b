//! Formbricks HTTP API: credential bootstrap and data seeding.

pub mod bootstrap;
pub mod client;
pub mod credentials;
pub mod seed;
pub mod types;

pub use bootstrap::Bootstrapper;
pub use client::PlatformClient;
pub use credentials::{CredentialStore, Credentials};
pub use seed::{SeedReport, Seeder};
