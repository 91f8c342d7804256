//! Custom Axum extractors.

pub mod json;
pub mod upload;

pub use json::ApiJson;
pub use upload::{FilePart, UploadForm};
