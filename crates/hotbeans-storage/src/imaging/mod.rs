//! Image processing.

pub mod normalizer;

pub use normalizer::ImageNormalizer;
