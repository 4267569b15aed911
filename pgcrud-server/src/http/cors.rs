//! Per-path CORS headers and request timeout
//!
//! Every API response carries `Access-Control-Allow-Origin: *` plus the
//! methods registered on its path. Preflight requests are answered by
//! the CORS layer before they reach a handler. The timeout sits inside
//! the CORS layers so a 408 is still readable by browsers.

use std::time::Duration;

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, CONTENT_TYPE,
};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::routing::MethodRouter;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

/// Wrap `route` so its responses advertise `methods` (e.g. `"GET, PUT"`)
/// and requests running past `request_timeout` end in 408.
pub fn allow<S>(
    route: MethodRouter<S>,
    methods: &'static str,
    request_timeout: Duration,
) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    let parsed: Vec<Method> = methods
        .split(',')
        .filter_map(|m| Method::from_bytes(m.trim().as_bytes()).ok())
        .collect();

    let preflight = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(parsed)
        .allow_headers([CONTENT_TYPE]);

    route.layer(
        ServiceBuilder::new()
            .layer(SetResponseHeaderLayer::if_not_present(
                ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(methods),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            ))
            .layer(preflight)
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                request_timeout,
            )),
    )
}
