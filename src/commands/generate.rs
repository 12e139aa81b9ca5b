use std::path::PathBuf;

use tracing::info;

use super::{surveys_path, users_path};
use crate::config::Config;
use crate::error::Result;
use crate::generate::ContentGenerator;
use crate::util::fs::write_json;

/// Generates both record sets and writes them under `data/`.
pub fn run(config: &Config) -> Result<(PathBuf, PathBuf)> {
    info!("Generating realistic survey and user data...");
    let generator = ContentGenerator::new(config.provider.as_ref());

    info!("Generating {} unique surveys...", crate::generate::SURVEY_COUNT);
    let surveys = generator.surveys();
    let surveys_file = surveys_path(config);
    write_json(&surveys_file, &surveys)?;
    info!("Saved surveys to {}", surveys_file.display());

    info!("Generating {} unique users...", crate::generate::USER_COUNT);
    let users = generator.users();
    let users_file = users_path(config);
    write_json(&users_file, &users)?;
    info!("Saved users to {}", users_file.display());

    info!("Data generation complete!");
    Ok((surveys_file, users_file))
}
