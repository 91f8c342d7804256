//! CV and image upload handlers.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Multipart, Query, State};

use hotbeans_core::error::AppError;
use hotbeans_entity::upload::UploadedFile;
use hotbeans_service::{DocumentUpload, ImageUpload};

use crate::dto::request::UploadQuery;
use crate::dto::response::{CvUploadResponse, ImageUploadResponse};
use crate::error::ApiError;
use crate::extractors::UploadForm;
use crate::state::AppState;

/// Form field carrying the uploader label.
const UPLOADED_BY_FIELD: &str = "uploaded_by";

/// POST /api/upload/cv
pub async fn upload_cv(
    State(state): State<AppState>,
    query: Result<Query<UploadQuery>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CvUploadResponse>, ApiError> {
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;
    let mut form = UploadForm::read(multipart).await?;

    let uploaded_by = form.fields.remove(UPLOADED_BY_FIELD).or(query.uploaded_by);
    let (original_name, content_type, data) = match form.file {
        Some(file) => (file.file_name, file.content_type, file.data),
        None => (None, None, Default::default()),
    };

    let record = state
        .document_upload_service
        .upload(DocumentUpload {
            original_name,
            content_type,
            uploaded_by,
            data,
        })
        .await?;

    Ok(Json(CvUploadResponse {
        message: "CV uploaded successfully".to_string(),
        file_id: record.id.to_string(),
        original_name: record.original_name,
        file_size: record.file_size,
    }))
}

/// GET /api/uploads
pub async fn list_uploads(
    State(state): State<AppState>,
) -> Result<Json<Vec<UploadedFile>>, ApiError> {
    Ok(Json(state.document_upload_service.list().await?))
}

/// POST /api/upload/image
pub async fn upload_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ImageUploadResponse>, ApiError> {
    let form = UploadForm::read(multipart).await?;
    let (original_name, content_type, data) = match form.file {
        Some(file) => (file.file_name, file.content_type, file.data),
        None => (None, None, Default::default()),
    };

    let stored = state
        .image_upload_service
        .upload(ImageUpload {
            original_name,
            content_type,
            data,
        })
        .await?;

    Ok(Json(ImageUploadResponse {
        message: "Image uploaded and converted to JPEG successfully".to_string(),
        filename: stored.filename,
        url: stored.url,
    }))
}
