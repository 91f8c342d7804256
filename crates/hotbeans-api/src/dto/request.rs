//! Query-string DTOs.

use serde::Deserialize;

/// Query for `GET /api/chat/messages`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatHistoryQuery {
    /// Number of most recent messages to return.
    pub limit: Option<usize>,
}

/// Query for `POST /api/upload/cv`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadQuery {
    /// Uploader label, used when the form carries none.
    pub uploaded_by: Option<String>,
}
