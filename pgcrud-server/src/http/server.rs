//! Axum server setup
//!
//! Server skeleton with:
//! - Per-path CORS (see [`super::cors`])
//! - Tracing middleware; timeouts live in the per-route stack
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::time::Duration;

use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::ServerConfig;
use crate::db::migrations;
use crate::error::Result;
use crate::state::AppState;

/// Build the application router with all routes.
///
/// The request timeout is applied per API route, inside its CORS layers.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::users::router(request_timeout))
        .merge(routes::products::router(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&config).await?;
/// run_server(pool, config).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<()> {
    if config.run_migrations {
        migrations::run(&pool).await?;
    }

    let app = build_router(AppState::postgres(pool), config.request_timeout);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::db::memory::{MemoryProductStore, MemoryUserStore};
    use axum::body::Body;
    use axum::http::header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN};
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AppState::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryProductStore::new()),
        );
        build_router(state, Duration::from_secs(30))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn api_routes_advertise_path_methods() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/user/1")
                    .header("origin", "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Not found still carries CORS headers
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_METHODS], "GET, PUT");
    }

    #[tokio::test]
    async fn every_api_route_carries_cors_headers() {
        // (method, uri, body, expected status, advertised methods)
        let cases: &[(Method, &str, Option<&str>, StatusCode, &str)] = &[
            (Method::GET, "/api/user", None, StatusCode::OK, "GET"),
            (Method::POST, "/api/newuser", Some("{broken"), StatusCode::BAD_REQUEST, "POST"),
            (Method::PUT, "/api/user/1", Some(r#"{"name":"A","location":"B","age":1}"#), StatusCode::OK, "GET, PUT"),
            (Method::DELETE, "/api/deleteuser/x", None, StatusCode::BAD_REQUEST, "DELETE"),
            (Method::GET, "/api/product", None, StatusCode::OK, "GET"),
            (Method::POST, "/api/newproduct", Some(r#"{"name":"Lamp","msrp":40}"#), StatusCode::CREATED, "POST"),
            (Method::GET, "/api/product/9", None, StatusCode::NOT_FOUND, "GET, PUT"),
            (Method::DELETE, "/api/deleteproduct/9", None, StatusCode::OK, "DELETE"),
        ];

        let app = app();
        for (method, uri, body, status, methods) in cases {
            let mut builder = Request::builder()
                .method(method.clone())
                .uri(*uri)
                .header("origin", "http://localhost:3000");
            let body = match body {
                Some(json) => {
                    builder = builder.header("content-type", "application/json");
                    Body::from(json.to_string())
                }
                None => Body::empty(),
            };

            let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
            assert_eq!(response.status(), *status, "{} {}", method, uri);
            assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*", "{} {}", method, uri);
            assert_eq!(
                response.headers()[ACCESS_CONTROL_ALLOW_METHODS],
                *methods,
                "{} {}",
                method,
                uri
            );
        }
    }

    #[tokio::test]
    async fn preflight_on_api_route_is_answered() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/user/1")
                    .header("origin", "http://localhost:3000")
                    .header("access-control-request-method", "PUT")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_success());
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(response.headers().contains_key(ACCESS_CONTROL_ALLOW_METHODS));
    }

    #[tokio::test]
    async fn health_has_no_cors_headers() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(!response.headers().contains_key(ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = app()
            .oneshot(Request::builder().uri("/api/widgets").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
