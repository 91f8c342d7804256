//! # hotbeans-api
//!
//! HTTP API layer for Hot Beans Web built on Axum.
//!
//! Provides the JSON endpoints under `/api`, the `/ws/chat` WebSocket,
//! static serving of stored images and documents, middleware (CORS,
//! logging), extractors, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
