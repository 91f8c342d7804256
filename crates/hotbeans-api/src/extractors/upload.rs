//! Multipart upload form parsing.

use std::collections::HashMap;

use axum::extract::Multipart;
use axum::extract::multipart::MultipartRejection;
use bytes::Bytes;

use hotbeans_core::error::AppError;
use hotbeans_service::upload::NO_FILE_PROVIDED;

/// Name of the multipart part carrying the file.
pub const FILE_FIELD: &str = "file";

/// The file part of an upload.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Filename from the part's `Content-Disposition`.
    pub file_name: Option<String>,
    /// Declared content type of the part.
    pub content_type: Option<String>,
    /// Part content.
    pub data: Bytes,
}

/// A parsed multipart upload.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    /// The first `file` part, if any.
    pub file: Option<FilePart>,
    /// Plain text fields by name.
    pub fields: HashMap<String, String>,
}

impl UploadForm {
    /// Read every part of the request body.
    ///
    /// A request that is not multipart at all is treated as having no file.
    pub async fn read(multipart: Result<Multipart, MultipartRejection>) -> Result<Self, AppError> {
        let mut multipart =
            multipart.map_err(|_| AppError::validation(NO_FILE_PROVIDED))?;
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
        {
            let name = field.name().unwrap_or("").to_string();

            if name == FILE_FIELD && form.file.is_none() {
                let file_name = field.file_name().map(String::from);
                let content_type = field.content_type().map(String::from);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
                form.file = Some(FilePart {
                    file_name,
                    content_type,
                    data,
                });
            } else if field.file_name().is_none() {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
                form.fields.insert(name, text);
            }
        }

        Ok(form)
    }
}
