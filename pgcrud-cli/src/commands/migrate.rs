//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use pgcrud_server::db::{create_pool, migrations};
use pgcrud_server::ServerConfig;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "POSTGRES_URL")]
    pub database_url: Option<String>,
}

/// Create the users and products tables, then exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let config = ServerConfig::with_database_url(args.database_url.unwrap_or_default());
    config.validate().context("Invalid configuration")?;

    let pool = create_pool(&config)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    Ok(())
}
