//! CV/document upload flow.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tracing::{info, warn};

use hotbeans_core::error::AppError;
use hotbeans_core::result::AppResult;
use hotbeans_core::traits::document::FindQuery;
use hotbeans_core::traits::storage::StorageProvider;
use hotbeans_core::types::UploadedFileId;
use hotbeans_database::DocumentRepository;
use hotbeans_entity::upload::{ANONYMOUS_UPLOADER, UploadedFile};
use hotbeans_storage::LocalStorageProvider;

use super::{mime_essence, require_file_name};

/// MIME types accepted for CV uploads.
pub const ALLOWED_DOCUMENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

/// Message returned for a disallowed document type.
pub const DOCUMENT_TYPE_NOT_ALLOWED: &str =
    "File type not allowed. Please upload PDF, DOC, DOCX, or TXT files.";

/// A document as received from the client.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    /// Filename of the file part, if any.
    pub original_name: Option<String>,
    /// Declared content type of the file part.
    pub content_type: Option<String>,
    /// Uploader label; `anonymous` when absent or blank.
    pub uploaded_by: Option<String>,
    /// File content.
    pub data: Bytes,
}

/// Stores uploaded documents and records their metadata.
#[derive(Debug, Clone)]
pub struct DocumentUploadService {
    repo: DocumentRepository<UploadedFile>,
    storage: Arc<LocalStorageProvider>,
    list_limit: usize,
}

impl DocumentUploadService {
    /// Creates a new document upload service.
    pub fn new(
        repo: DocumentRepository<UploadedFile>,
        storage: Arc<LocalStorageProvider>,
        list_limit: usize,
    ) -> Self {
        Self {
            repo,
            storage,
            list_limit,
        }
    }

    /// Validate, write and record an uploaded document.
    ///
    /// If the metadata insert fails, the written file is removed before the
    /// error is returned.
    pub async fn upload(&self, params: DocumentUpload) -> AppResult<UploadedFile> {
        let original_name = require_file_name(params.original_name.as_deref())?.to_string();

        let file_type = mime_essence(params.content_type.as_deref());
        if !ALLOWED_DOCUMENT_TYPES.contains(&file_type.as_str()) {
            return Err(AppError::validation(DOCUMENT_TYPE_NOT_ALLOWED));
        }

        let id = UploadedFileId::new();
        let saved_name = format!("{}.{}", id, file_extension(&original_name));
        let file_size = params.data.len() as u64;

        self.storage.write(&saved_name, params.data).await?;

        let record = UploadedFile {
            id,
            original_name,
            saved_name: saved_name.clone(),
            file_path: self.storage.root().join(&saved_name).display().to_string(),
            file_size,
            file_type,
            uploaded_by: uploader_label(params.uploaded_by),
            upload_timestamp: Utc::now(),
        };

        if let Err(err) = self.repo.create(&record).await {
            if let Err(cleanup) = self.storage.delete(&saved_name).await {
                warn!(
                    saved_name = %saved_name,
                    error = %cleanup,
                    "Failed to remove file after metadata insert failed"
                );
            }
            return Err(err);
        }

        info!(
            id = %record.id,
            saved_name = %record.saved_name,
            bytes = record.file_size,
            file_type = %record.file_type,
            "Document uploaded"
        );
        Ok(record)
    }

    /// List upload records, newest first.
    pub async fn list(&self) -> AppResult<Vec<UploadedFile>> {
        self.repo.list(FindQuery::newest_first(self.list_limit)).await
    }
}

/// The extension used for the stored file.
///
/// Text after the last `.`; `txt` when missing, empty, or not purely ASCII
/// alphanumeric.
pub fn file_extension(original_name: &str) -> &str {
    match original_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && ext.bytes().all(|b| b.is_ascii_alphanumeric()) => {
            ext
        }
        _ => "txt",
    }
}

fn uploader_label(uploaded_by: Option<String>) -> String {
    uploaded_by
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| ANONYMOUS_UPLOADER.to_string())
}
