//! Core traits defined in `hotbeans-core` and implemented by other crates.

pub mod document;
pub mod storage;

pub use document::{Document, DocumentStore, FindQuery, SortOrder, StoredDocument};
pub use storage::StorageProvider;
