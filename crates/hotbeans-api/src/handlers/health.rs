//! Health check handlers.

use axum::Json;
use axum::extract::State;

use hotbeans_core::result::AppResult;
use hotbeans_core::traits::storage::StorageProvider;

use crate::dto::response::{ComponentHealth, DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

/// GET /api/health/detailed
///
/// Always answers 200; a failing dependency turns `status` into `degraded`.
pub async fn health_detailed(State(state): State<AppState>) -> Json<DetailedHealthResponse> {
    let store = component(
        state.store.backend(),
        state.store.health_check().await.map(|()| true),
    );
    let images_storage = component(
        state.images.provider_type(),
        state.images.health_check().await,
    );
    let uploads_storage = component(
        state.uploads.provider_type(),
        state.uploads.health_check().await,
    );

    let healthy = store.healthy && images_storage.healthy && uploads_storage.healthy;

    Json(DetailedHealthResponse {
        status: if healthy { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        store,
        images_storage,
        uploads_storage,
        chat_connections: state.relay.registry().len(),
        relay: state.relay.metrics().snapshot(),
    })
}

fn component(backend: &str, result: AppResult<bool>) -> ComponentHealth {
    match result {
        Ok(healthy) => ComponentHealth {
            backend: backend.to_string(),
            healthy,
            error: None,
        },
        Err(e) => {
            tracing::warn!(backend, error = %e, "Health check failed");
            ComponentHealth {
                backend: backend.to_string(),
                healthy: false,
                error: Some(e.message),
            }
        }
    }
}
