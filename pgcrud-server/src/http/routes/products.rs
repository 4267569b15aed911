//! Product endpoints

use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use crate::http::cors;
use crate::http::error::ApiError;
use crate::http::extractors::{EntityId, JsonBody};
use crate::models::{Envelope, NewProduct, Product};
use crate::state::AppState;

const ENTITY: &str = "Product";

/// POST /api/newproduct
async fn create_product(
    State(state): State<AppState>,
    JsonBody(product): JsonBody<NewProduct>,
) -> Result<(StatusCode, Json<Envelope>), ApiError> {
    let id = state.products().insert(&product).await?;
    Ok((StatusCode::CREATED, Json(Envelope::created(ENTITY, id))))
}

/// GET /api/product/{id}
async fn get_product(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Product>, ApiError> {
    state
        .products()
        .get(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound {
            resource: "product",
            id,
        })
}

/// GET /api/product
async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products().list().await?))
}

/// PUT /api/product/{id}
async fn update_product(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(product): JsonBody<NewProduct>,
) -> Result<Json<Envelope>, ApiError> {
    let rows = state.products().update(id, &product).await?;
    Ok(Json(Envelope::updated(ENTITY, id, rows)))
}

/// DELETE /api/deleteproduct/{id}
async fn delete_product(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Envelope>, ApiError> {
    let rows = state.products().delete(id).await?;
    Ok(Json(Envelope::deleted(ENTITY, id, rows)))
}

/// Product routes
pub fn router(request_timeout: Duration) -> Router<AppState> {
    Router::new()
        .route(
            "/api/newproduct",
            cors::allow(post(create_product), "POST", request_timeout),
        )
        .route(
            "/api/product",
            cors::allow(get(list_products), "GET", request_timeout),
        )
        .route(
            "/api/product/{id}",
            cors::allow(
                get(get_product).put(update_product),
                "GET, PUT",
                request_timeout,
            ),
        )
        .route(
            "/api/deleteproduct/{id}",
            cors::allow(delete(delete_product), "DELETE", request_timeout),
        )
}
