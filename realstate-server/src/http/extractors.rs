//! Custom Axum extractors
//!
//! Both reject with [`ApiError::BadRequest`] so malformed input gets the
//! standard error body instead of axum's plain-text rejection.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use super::error::ApiError;

/// Extract a real-state id (`u64`) from the path
pub struct RealStateId(pub u64);

impl<S> FromRequestParts<S> for RealStateId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        let id = raw
            .parse::<u64>()
            .map_err(|e| ApiError::bad_request(format!("invalid id '{}': {}", raw, e)))?;

        Ok(Self(id))
    }
}

/// JSON body whose rejections (syntax, types, content type) become 400s
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        Ok(Self(value))
    }
}
