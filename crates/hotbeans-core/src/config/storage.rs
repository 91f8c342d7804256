//! Local file storage configuration.

use serde::{Deserialize, Serialize};

/// Directories for uploaded documents and normalized images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding normalized JPEG images, served under `/images`.
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
    /// Directory holding uploaded documents, served under `/uploads`.
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: String,
    /// Maximum request body size for uploads. Unset means no cap.
    #[serde(default)]
    pub max_upload_size_bytes: Option<u64>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
            uploads_dir: default_uploads_dir(),
            max_upload_size_bytes: None,
        }
    }
}

fn default_images_dir() -> String {
    "./images".to_string()
}

fn default_uploads_dir() -> String {
    "./uploads".to_string()
}
