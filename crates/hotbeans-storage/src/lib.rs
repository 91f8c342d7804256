//! # hotbeans-storage
//!
//! Local filesystem storage for uploaded documents and images, and the
//! image normalizer that turns any supported upload into a JPEG.

pub mod imaging;
pub mod providers;

pub use imaging::ImageNormalizer;
pub use providers::LocalStorageProvider;
