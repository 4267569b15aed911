//! Error types for pgcrud-server startup and lifecycle

use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors that stop the server from starting or keep running
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
