//! Command-line entry points.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sea_orm::DatabaseConnection;

use crate::config::{AppConfig, ConfigLoader};
use crate::seeds::{SeedOutcome, seed_sample_data};
use crate::{db, server, telemetry};

#[derive(Parser, Debug)]
#[command(
    name = "vetnest-api",
    about = "Veteran housing directory, listings and application API",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Migrate, seed and start the HTTP service (default command)
    Serve,
    /// Apply pending migrations and the sample seed, then exit
    Migrate,
}

/// Parses arguments from the process and runs the selected command.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    execute(cli.command.unwrap_or(Command::Serve)).await
}

async fn execute(command: Command) -> Result<()> {
    let config = ConfigLoader::new()
        .load()
        .context("Failed to load configuration")?;
    telemetry::init_tracing(&config).context("Failed to initialize telemetry")?;

    tracing::info!(profile = %config.profile, "Loaded configuration");
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::debug!(config = %redacted_json, "Effective configuration");
    }

    let db = bootstrap(&config).await?;

    match command {
        Command::Serve => server::run_server(config, db).await,
        Command::Migrate => {
            tracing::info!("Migrations and seed complete");
            Ok(())
        }
    }
}

/// Connects, applies migrations and seeds an empty store.
pub async fn bootstrap(config: &AppConfig) -> Result<DatabaseConnection> {
    let db = db::init_pool(config).await?;
    db::apply_migrations(&db).await?;

    match seed_sample_data(&db).await? {
        SeedOutcome::Seeded => tracing::info!("Sample data seeded"),
        SeedOutcome::Skipped => tracing::debug!("Sample data already present"),
    }

    Ok(db)
}
