//! Liveness endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    fn current() -> Self {
        Self {
            service: env!("CARGO_PKG_NAME"),
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Health routes. Answers without touching the database.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(|| async { Json(HealthResponse::current()) }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_package_identity() {
        let body = HealthResponse::current();
        assert_eq!(body.status, "ok");
        assert_eq!(body.service, "pgcrud-server");
    }
}
