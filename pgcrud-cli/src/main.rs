//! pgcrud CLI
//!
//! Entry point for the pgcrud HTTP API:
//! - `serve` runs the users/products server
//! - `migrate` creates the tables and exits

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "pgcrud",
    author,
    version,
    about = "REST API for users and products backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the users and products tables if missing
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so clap's env fallbacks see values from .env
    config::load_dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Migrate(args) => commands::migrate::run_migrate(args).await,
    }
}
