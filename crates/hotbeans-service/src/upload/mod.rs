//! Upload services for CV documents and images.

pub mod document;
pub mod image;

pub use self::document::{DocumentUpload, DocumentUploadService};
pub use self::image::{ImageUpload, ImageUploadService, StoredImage};

use hotbeans_core::error::AppError;

/// Message returned when the multipart body has no usable file part.
pub const NO_FILE_PROVIDED: &str = "No file provided";

/// Return the filename when the file part is present and named.
fn require_file_name(original_name: Option<&str>) -> Result<&str, AppError> {
    match original_name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(AppError::validation(NO_FILE_PROVIDED)),
    }
}

/// The MIME essence of a declared content type: lowercase, parameters removed.
fn mime_essence(content_type: Option<&str>) -> String {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase())
        .unwrap_or_default()
}
