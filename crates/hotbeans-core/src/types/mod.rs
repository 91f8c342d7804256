//! Core type definitions used across the Hot Beans workspace.

pub mod id;
pub mod response;

pub use id::*;
pub use response::ApiErrorResponse;
