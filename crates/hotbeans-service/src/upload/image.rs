//! Image upload flow: every accepted image is stored as a JPEG.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use hotbeans_core::error::AppError;
use hotbeans_core::result::AppResult;
use hotbeans_core::traits::storage::StorageProvider;
use hotbeans_storage::{ImageNormalizer, LocalStorageProvider};

use super::{mime_essence, require_file_name};

/// Message returned for a disallowed image type.
pub const IMAGE_TYPE_NOT_ALLOWED: &str = "File type not allowed. Please upload image files.";

/// URL prefix under which stored images are served.
pub const IMAGES_URL_PREFIX: &str = "/images";

/// An image as received from the client.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Filename of the file part, if any.
    pub original_name: Option<String>,
    /// Declared content type of the file part.
    pub content_type: Option<String>,
    /// Raw image bytes.
    pub data: Bytes,
}

/// Where a normalized image ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// Generated filename (`<uuid>.jpeg`).
    pub filename: String,
    /// Public URL path.
    pub url: String,
}

/// Normalizes uploaded images and writes them to the images root.
#[derive(Debug, Clone)]
pub struct ImageUploadService {
    storage: Arc<LocalStorageProvider>,
    normalizer: ImageNormalizer,
}

impl ImageUploadService {
    /// Creates a new image upload service.
    pub fn new(storage: Arc<LocalStorageProvider>, normalizer: ImageNormalizer) -> Self {
        Self {
            storage,
            normalizer,
        }
    }

    /// Validate, convert to JPEG and store an uploaded image.
    pub async fn upload(&self, params: ImageUpload) -> AppResult<StoredImage> {
        let original_name = require_file_name(params.original_name.as_deref())?;

        if !ImageNormalizer::is_supported(&mime_essence(params.content_type.as_deref())) {
            return Err(AppError::validation(IMAGE_TYPE_NOT_ALLOWED));
        }

        let input_bytes = params.data.len();
        let normalized = self.normalizer.normalize(params.data).await?;

        let filename = format!("{}.jpeg", Uuid::new_v4());
        let output_bytes = normalized.data.len();
        self.storage.write(&filename, normalized.data).await?;

        info!(
            original_name,
            filename = %filename,
            width = normalized.width,
            height = normalized.height,
            input_bytes,
            output_bytes,
            "Image stored as JPEG"
        );

        Ok(StoredImage {
            url: format!("{IMAGES_URL_PREFIX}/{filename}"),
            filename,
        })
    }
}
