//! pgcrud-server: users and products over HTTP
//!
//! Exposes create/read/update/delete endpoints backed by PostgreSQL.
//! Each request runs exactly one SQL statement on a pooled connection.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::{Result, ServerError};
pub use state::AppState;
