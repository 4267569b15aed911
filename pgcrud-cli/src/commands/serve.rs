//! HTTP server command
//!
//! Builds the server configuration once from flags and environment, then
//! runs the API until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use pgcrud_server::config::DEFAULT_MAX_CONNECTIONS;
use pgcrud_server::db::create_pool;
use pgcrud_server::http::run_server;
use pgcrud_server::ServerConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "PGCRUD_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "POSTGRES_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "PGCRUD_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection
    #[arg(long, default_value_t = 5)]
    pub acquire_timeout: u64,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Skip creating missing tables at startup
    #[arg(long)]
    pub no_migrate: bool,
}

impl ServeArgs {
    fn into_config(self) -> Result<ServerConfig> {
        let config = ServerConfig {
            bind_addr: self.bind,
            database_url: self.database_url.unwrap_or_default(),
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout),
            request_timeout: Duration::from_secs(self.timeout),
            run_migrations: !self.no_migrate,
        };
        config.validate().context("Invalid server configuration")?;
        Ok(config)
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.into_config()?;

    tracing::info!("Starting pgcrud server on {}", config.bind_addr);

    let pool = create_pool(&config)
        .await
        .context("Failed to create database pool")?;

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServeArgs {
        ServeArgs::try_parse_from(std::iter::once("serve").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_map_onto_config() {
        let config = parse(&[
            "--database-url",
            "postgres://localhost/pgcrud",
            "--bind",
            "0.0.0.0:9000",
            "--timeout",
            "10",
            "--no-migrate",
        ])
        .into_config()
        .unwrap();

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(!config.run_migrations);
    }

    #[test]
    fn zero_connections_is_rejected() {
        let args = parse(&[
            "--database-url",
            "postgres://localhost/pgcrud",
            "--max-connections",
            "0",
        ]);
        assert!(args.into_config().is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        for flag in ["--timeout", "--acquire-timeout"] {
            let args = parse(&["--database-url", "postgres://localhost/pgcrud", flag, "0"]);
            let err = args.into_config().unwrap_err();
            assert!(format!("{:#}", err).contains("must be greater than zero"), "{}", flag);
        }
    }
}
