//! Response DTOs.

use serde::Serialize;

use hotbeans_realtime::RelayMetricsSnapshot;

/// A plain `{"message": ...}` body.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

/// Response for a stored CV.
#[derive(Debug, Clone, Serialize)]
pub struct CvUploadResponse {
    pub message: String,
    pub file_id: String,
    pub original_name: String,
    pub file_size: u64,
}

/// Response for a stored image.
#[derive(Debug, Clone, Serialize)]
pub struct ImageUploadResponse {
    pub message: String,
    pub filename: String,
    pub url: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Status ("ok" or "degraded")
    pub status: String,
    /// Version
    pub version: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
}

/// Detailed health check response
#[derive(Debug, Clone, Serialize)]
pub struct DetailedHealthResponse {
    /// Overall status
    pub status: String,
    /// Version
    pub version: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
    /// Document store backend and status
    pub store: ComponentHealth,
    /// Images root status
    pub images_storage: ComponentHealth,
    /// Uploads root status
    pub uploads_storage: ComponentHealth,
    /// Open chat connections
    pub chat_connections: usize,
    /// Relay counters
    pub relay: RelayMetricsSnapshot,
}

/// One dependency's health.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    /// Backend or provider name.
    pub backend: String,
    /// Whether the check passed.
    pub healthy: bool,
    /// Error detail when the check failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
