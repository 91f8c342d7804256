//! Job application handlers.

use axum::Json;
use axum::extract::{Path, State};

use hotbeans_entity::application::{JobApplication, NewJobApplication};

use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// POST /api/job-applications
pub async fn submit_application(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewJobApplication>,
) -> Result<Json<JobApplication>, ApiError> {
    let application = state.application_service.submit(req).await?;
    Ok(Json(application))
}

/// GET /api/job-applications
pub async fn list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobApplication>>, ApiError> {
    Ok(Json(state.application_service.list().await?))
}

/// GET /api/job-applications/{id}
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobApplication>, ApiError> {
    Ok(Json(state.application_service.get(&id).await?))
}
