//! # hotbeans-service
//!
//! Business logic service layer for Hot Beans Web. Each service wraps a
//! typed repository and, for uploads, a storage root.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time.

pub mod application;
pub mod chat;
pub mod status;
pub mod upload;

pub use application::ApplicationService;
pub use chat::ChatService;
pub use status::StatusService;
pub use upload::{DocumentUpload, DocumentUploadService, ImageUpload, ImageUploadService};
