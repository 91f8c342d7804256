//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use hotbeans_api::{AppState, build_router};
use hotbeans_core::config::AppConfig;
use hotbeans_database::MemoryDocumentStore;

/// Multipart boundary used by [`multipart_body`].
pub const BOUNDARY: &str = "hotbeans-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct access to services and storage roots
    pub state: AppState,
    /// In-memory document store behind every collection
    pub store: Arc<MemoryDocumentStore>,
    /// Keeps the storage roots alive for the test's duration
    pub data_dir: TempDir,
}

/// A response captured from the router
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when not JSON)
    pub body: Value,
    /// Raw body bytes
    pub bytes: Vec<u8>,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub async fn new() -> Self {
        Self::with_config(AppConfig::default()).await
    }

    /// Create a test application with custom configuration.
    ///
    /// Storage roots are always redirected into a fresh temp dir.
    pub async fn with_config(mut config: AppConfig) -> Self {
        let data_dir = TempDir::new().expect("Failed to create temp dir");
        config.storage.images_dir = data_dir.path().join("images").display().to_string();
        config.storage.uploads_dir = data_dir.path().join("uploads").display().to_string();

        let store = Arc::new(MemoryDocumentStore::new());
        let state = AppState::initialize(config, store.clone())
            .await
            .expect("Failed to initialize state");
        let router = build_router(state.clone());

        Self {
            router,
            state,
            store,
            data_dir,
        }
    }

    /// Send a JSON request
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a raw body with an explicit content type
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", content_type)
            .body(Body::from(body))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a multipart form built with [`multipart_body`]
    pub async fn upload(&self, path: &str, body: Vec<u8>) -> TestResponse {
        self.request_raw(
            "POST",
            path,
            &format!("multipart/form-data; boundary={BOUNDARY}"),
            body,
        )
        .await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body")
            .to_vec();
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            bytes,
        }
    }
}

/// One part of a multipart form.
pub enum Part<'a> {
    /// A file part named `file`
    File {
        filename: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    },
    /// A plain text field
    Text { name: &'a str, value: &'a str },
}

/// Build a `multipart/form-data` body using [`BOUNDARY`].
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::File {
                filename,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}")
                        .as_bytes(),
                );
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}
