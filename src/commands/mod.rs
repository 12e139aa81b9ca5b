//! One entry point per CLI action.

pub mod down;
pub mod generate;
pub mod seed;
pub mod up;

use std::path::PathBuf;

use crate::config::Config;

pub const SURVEYS_FILE: &str = "surveys.json";
pub const USERS_FILE: &str = "users.json";

pub(crate) fn surveys_path(config: &Config) -> PathBuf {
    config.data_dir().join(SURVEYS_FILE)
}

pub(crate) fn users_path(config: &Config) -> PathBuf {
    config.data_dir().join(USERS_FILE)
}
