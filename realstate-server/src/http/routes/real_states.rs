//! Real-state endpoints
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | POST | `/realstate/` | 201 + listing |
//! | GET | `/realstate/{id}` | 200 + listing |
//! | PUT | `/realstate/{id}` | 200 + listing |
//! | DELETE | `/realstate/{id}` | 204 |

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, RealStateId};
use crate::http::server::AppState;
use crate::models::RealState;

/// POST /realstate/ - create a listing
async fn create_real_state(
    State(state): State<Arc<AppState>>,
    JsonBody(real_state): JsonBody<RealState>,
) -> Result<(StatusCode, Json<RealState>), ApiError> {
    let created = state.service.create(real_state).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /realstate/{id} - get a single listing
async fn get_real_state(
    State(state): State<Arc<AppState>>,
    RealStateId(id): RealStateId,
) -> Result<Json<RealState>, ApiError> {
    let real_state = state.service.get(id).await?;
    Ok(Json(real_state))
}

/// PUT /realstate/{id} - overwrite an existing listing
///
/// Any id in the body is ignored; the path id wins.
async fn update_real_state(
    State(state): State<Arc<AppState>>,
    RealStateId(id): RealStateId,
    JsonBody(real_state): JsonBody<RealState>,
) -> Result<Json<RealState>, ApiError> {
    let updated = state.service.update(real_state, id).await?;
    Ok(Json(updated))
}

/// DELETE /realstate/{id} - delete a listing (missing ids also succeed)
async fn delete_real_state(
    State(state): State<Arc<AppState>>,
    RealStateId(id): RealStateId,
) -> Result<StatusCode, ApiError> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Real-state routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/realstate/", post(create_real_state))
        .route(
            "/realstate/{id}",
            get(get_real_state)
                .put(update_real_state)
                .delete(delete_real_state),
        )
}
