//! Server configuration
//!
//! Built once at startup and passed down explicitly; nothing below this
//! layer reads the process environment.

use std::net::SocketAddr;
use std::time::Duration;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8080)
    pub bind_addr: SocketAddr,

    /// PostgreSQL connection string
    pub database_url: String,

    /// Upper bound on pooled connections
    pub max_connections: u32,

    /// How long a request waits for a pooled connection
    pub acquire_timeout: Duration,

    /// Per-request timeout enforced by the HTTP layer
    pub request_timeout: Duration,

    /// Create missing tables before serving
    pub run_migrations: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            database_url: String::new(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
            run_migrations: true,
        }
    }
}

impl ServerConfig {
    /// Configuration pointing at the given database, defaults elsewhere.
    pub fn with_database_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Self::default()
        }
    }

    /// Check the configuration before any connection is attempted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        if self.max_connections == 0 {
            return Err(ConfigError::InvalidPoolSize);
        }
        if self.acquire_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout {
                name: "acquire timeout",
            });
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout {
                name: "request timeout",
            });
        }
        Ok(())
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("database URL is not set (use --database-url or POSTGRES_URL)")]
    MissingDatabaseUrl,

    #[error("max connections must be at least 1")]
    InvalidPoolSize,

    #[error("{name} must be greater than zero")]
    ZeroTimeout { name: &'static str },
}
