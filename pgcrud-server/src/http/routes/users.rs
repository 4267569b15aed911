//! User endpoints

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
use crate::models::{Envelope, NewUser, User};
use crate::state::AppState;

const ENTITY: &str = "User";

/// POST /api/newuser - create a user
async fn create_user(
    State(state): State<AppState>,
    JsonBody(user): JsonBody<NewUser>,
) -> Result<(StatusCode, Json<Envelope>), ApiError> {
    let id = state.users().insert(&user).await?;
    Ok((StatusCode::CREATED, Json(Envelope::created(ENTITY, id))))
}

/// GET /api/user/{id} - get a single user
async fn get_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users()
        .get(id)
        .await?
        .ok_or(ApiError::NotFound { resource: "user", id })?;

    Ok(Json(user))
}

/// GET /api/user - list all users (unordered)
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users().list().await?;
    Ok(Json(users))
}

/// PUT /api/user/{id} - replace a user's fields
async fn update_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(user): JsonBody<NewUser>,
) -> Result<Json<Envelope>, ApiError> {
    let rows = state.users().update(id, &user).await?;
    Ok(Json(Envelope::updated(ENTITY, id, rows)))
}

/// DELETE /api/deleteuser/{id} - remove a user
async fn delete_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Envelope>, ApiError> {
    let rows = state.users().delete(id).await?;
    Ok(Json(Envelope::deleted(ENTITY, id, rows)))
}

/// User routes
pub fn router(request_timeout: Duration) -> Router<AppState> {
    Router::new()
        .route(
            "/api/newuser",
            cors::allow(post(create_user), "POST", request_timeout),
        )
        .route(
            "/api/user",
            cors::allow(get(list_users), "GET", request_timeout),
        )
        .route(
            "/api/user/{id}",
            cors::allow(get(get_user).put(update_user), "GET, PUT", request_timeout),
        )
        .route(
            "/api/deleteuser/{id}",
            cors::allow(delete(delete_user), "DELETE", request_timeout),
        )
}
