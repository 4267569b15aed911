//! Custom Axum extractors
//!
//! Both reject with [`ApiError::BadRequest`] so malformed input becomes a
//! JSON 400 instead of axum's plain-text rejection.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Extract and parse an integer id from path
pub struct EntityId(pub i64);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest {
                message: "missing id path parameter".into(),
            })?;

        let id = raw.parse::<i64>().map_err(|_| ApiError::BadRequest {
            message: format!("id must be an integer, got '{}'", raw),
        })?;

        Ok(Self(id))
    }
}

/// JSON request body
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                message: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}
