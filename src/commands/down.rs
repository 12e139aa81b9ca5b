use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::lifecycle::LifecycleController;

pub fn run(config: &Config) -> Result<()> {
    info!("Stopping Formbricks...");
    LifecycleController::new(config).tear_down()
}
