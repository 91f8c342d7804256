//! Status check handlers.

use axum::Json;
use axum::extract::State;

use hotbeans_entity::status::{CreateStatusCheck, StatusCheck};

use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// POST /api/status
pub async fn create_status_check(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateStatusCheck>,
) -> Result<Json<StatusCheck>, ApiError> {
    let check = state.status_service.create(req).await?;
    Ok(Json(check))
}

/// GET /api/status
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    Ok(Json(state.status_service.list().await?))
}
