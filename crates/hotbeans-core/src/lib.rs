//! # hotbeans-core
//!
//! Core crate for Hot Beans Web. Contains configuration schemas, typed
//! identifiers, the document-store and storage-provider traits, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Hot Beans crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
