//! Command-line interface for the local Formbricks environment.
//!
//! ```bash
//! formbricks-cli formbricks up        # start postgres + formbricks, wait for health
//! formbricks-cli formbricks generate  # write data/surveys.json and data/users.json
//! formbricks-cli formbricks seed      # bootstrap credentials and load the data
//! formbricks-cli formbricks down      # stop the containers
//! ```
//!
//! Set `OPENAI_API_KEY` to generate content with a language model and
//! `FORMBRICKS_URL` to target an instance other than `http://localhost:3000`.

use anyhow::Context;
use clap::{Parser, Subcommand};
use formbricks_cli::{commands, Config};

#[derive(Parser)]
#[command(name = "formbricks-cli")]
#[command(about = "Manage a local Formbricks instance")]
struct Cli {
    #[command(subcommand)]
    service: Service,
}

#[derive(Subcommand)]
enum Service {
    /// Formbricks lifecycle and data commands
    Formbricks {
        #[command(subcommand)]
        action: Action,
    },
}

#[derive(Subcommand)]
enum Action {
    /// Start Formbricks locally
    Up,
    /// Stop Formbricks
    Down,
    /// Generate realistic survey data
    Generate,
    /// Seed Formbricks with generated data
    Seed,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let work_dir = std::env::current_dir().context("Unable to resolve working directory")?;
    let config = Config::from_env(work_dir);

    let Service::Formbricks { action } = cli.service;
    match action {
        Action::Up => commands::up::run(&config).context("Failed to start Formbricks")?,
        Action::Down => commands::down::run(&config).context("Failed to stop Formbricks")?,
        Action::Generate => {
            commands::generate::run(&config).context("Failed to generate data")?;
        }
        Action::Seed => {
            let report = commands::seed::run(&config).context("Failed to seed Formbricks")?;
            println!("Created {report}");
        }
    }
    Ok(())
}
