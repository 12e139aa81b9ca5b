//! Starting and stopping the local Formbricks stack.

pub mod compose;
pub mod health;

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use reqwest::blocking::Client;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::util::fs::write_string;
use compose::{render_manifest, ComposeSettings, COMPOSE_FILE};
use health::wait_until_healthy;

pub struct LifecycleController<'a> {
    config: &'a Config,
    compose: ComposeSettings,
}

impl<'a> LifecycleController<'a> {
    /// The manifest is always the local default stack; `base_url` only
    /// decides where health is polled.
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            compose: ComposeSettings::default(),
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.config.docker_dir().join(COMPOSE_FILE)
    }

    pub fn write_manifest(&self) -> Result<PathBuf> {
        let path = self.manifest_path();
        write_string(&path, &render_manifest(&self.compose)?)?;
        info!("Created {COMPOSE_FILE} at {}", path.display());
        Ok(path)
    }

    /// Writes the manifest, pulls and starts the services, then waits for `/api/health`.
    pub fn bring_up(&self) -> Result<()> {
        self.write_manifest()?;
        let docker_dir = self.config.docker_dir();

        info!("Pulling Docker images...");
        self.run_runtime(&docker_dir, &["pull"], true)?;
        info!("Starting services with {}...", self.config.compose_bin);
        self.run_runtime(&docker_dir, &["up", "-d"], false)?;

        info!("Waiting for Formbricks to be ready...");
        let http = Client::new();
        let url = self.config.health_url();
        if !wait_until_healthy(&http, &url, &self.config.health) {
            warn!(
                "Check the container logs: {} -f {} logs",
                self.config.compose_bin,
                self.manifest_path().display()
            );
            return Err(Error::StartupTimeout {
                url,
                attempts: self.config.health.attempts,
            });
        }
        info!("Formbricks is running at {}", self.config.base_url);
        info!("PostgreSQL is running on localhost:{}", self.compose.db_port);
        Ok(())
    }

    /// Stops the services started by [`bring_up`](Self::bring_up).
    pub fn tear_down(&self) -> Result<()> {
        let docker_dir = self.config.docker_dir();
        if !docker_dir.exists() {
            warn!(
                "{} not found. Was Formbricks started?",
                docker_dir.display()
            );
            return Ok(());
        }
        info!("Stopping containers...");
        self.run_runtime(&docker_dir, &["down"], false)?;
        info!("Formbricks stopped successfully");
        Ok(())
    }

    fn run_runtime(&self, dir: &Path, args: &[&str], capture: bool) -> Result<()> {
        let mut words = self.config.compose_bin.split_whitespace();
        let program = words.next().unwrap_or(crate::config::DEFAULT_COMPOSE_BIN);
        let mut full_args: Vec<&str> = words.collect();
        full_args.extend_from_slice(args);
        let command_line = format!("{program} {}", full_args.join(" "));

        let mut cmd = Command::new(program);
        cmd.args(&full_args).current_dir(dir);
        let spawn_failed = |e: std::io::Error| Error::Process {
            command: command_line.clone(),
            detail: e.to_string(),
        };

        if capture {
            let output = cmd
                .stdin(Stdio::null())
                .output()
                .map_err(spawn_failed)?;
            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                return Err(Error::Process {
                    command: command_line,
                    detail: if stderr.is_empty() {
                        output.status.to_string()
                    } else {
                        stderr
                    },
                });
            }
        } else {
            let status = cmd.status().map_err(spawn_failed)?;
            if !status.success() {
                return Err(Error::Process {
                    command: command_line,
                    detail: status.to_string(),
                });
            }
        }
        Ok(())
    }
}
