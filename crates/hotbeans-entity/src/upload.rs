//! Uploaded document metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hotbeans_core::traits::Document;
use hotbeans_core::types::UploadedFileId;

/// Default `uploaded_by` label when the client supplies none.
pub const ANONYMOUS_UPLOADER: &str = "anonymous";

/// Metadata for a document stored in the uploads directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Unique identifier.
    pub id: UploadedFileId,
    /// Filename as sent by the client.
    pub original_name: String,
    /// Generated filename on disk.
    pub saved_name: String,
    /// Path of the stored file.
    pub file_path: String,
    /// Size in bytes.
    pub file_size: u64,
    /// Declared MIME type.
    pub file_type: String,
    /// Free-form uploader label.
    pub uploaded_by: String,
    /// When the upload completed.
    pub upload_timestamp: DateTime<Utc>,
}

impl Document for UploadedFile {
    const COLLECTION: &'static str = "uploaded_files";

    fn document_id(&self) -> String {
        self.id.to_string()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.upload_timestamp
    }
}
