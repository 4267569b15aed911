//! HTTP server layer
//!
//! Axum server with:
//! - Per-path CORS headers
//! - Request tracing and timeouts
//! - Graceful shutdown
//! - JSON error responses

pub mod cors;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server};
