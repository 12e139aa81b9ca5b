use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::lifecycle::LifecycleController;

pub fn run(config: &Config) -> Result<()> {
    info!("Starting Formbricks locally...");
    LifecycleController::new(config).bring_up()
}
