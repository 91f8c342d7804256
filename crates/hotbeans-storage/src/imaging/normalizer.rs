//! Re-encodes uploaded images as JPEG.

use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder};

use hotbeans_core::error::{AppError, ErrorKind};
use hotbeans_core::result::AppResult;

/// JPEG quality used for stored images.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// MIME types accepted by the image upload endpoint.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Output of a normalization.
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    /// Encoded JPEG bytes.
    pub data: Bytes,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Decodes an image and re-encodes it as an opaque JPEG.
///
/// Alpha channels are dropped and palette images are expanded, so the
/// output is 8-bit RGB, except 8-bit grayscale input which stays grayscale.
/// Dimensions are never changed.
#[derive(Debug, Clone, Copy)]
pub struct ImageNormalizer {
    quality: u8,
}

impl Default for ImageNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_JPEG_QUALITY)
    }
}

impl ImageNormalizer {
    /// Create a normalizer with the given JPEG quality (1-100).
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    /// Check whether a declared MIME type is accepted for image uploads.
    pub fn is_supported(mime_type: &str) -> bool {
        ALLOWED_IMAGE_TYPES.contains(&mime_type)
    }

    /// Normalize on the blocking thread pool.
    pub async fn normalize(&self, data: Bytes) -> AppResult<NormalizedImage> {
        let normalizer = *self;
        tokio::task::spawn_blocking(move || normalizer.normalize_blocking(&data))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Image task panicked", e))?
    }

    /// Decode and re-encode synchronously.
    pub fn normalize_blocking(&self, data: &[u8]) -> AppResult<NormalizedImage> {
        let img = image::load_from_memory(data).map_err(|e| {
            AppError::with_source(ErrorKind::Validation, "Invalid image data", e)
        })?;

        let (width, height) = (img.width(), img.height());
        let (pixels, color) = match img {
            DynamicImage::ImageLuma8(gray) => (gray.into_raw(), ExtendedColorType::L8),
            DynamicImage::ImageRgb8(rgb) => (rgb.into_raw(), ExtendedColorType::Rgb8),
            other => (other.to_rgb8().into_raw(), ExtendedColorType::Rgb8),
        };

        let mut out = Vec::new();
        JpegEncoder::new_with_quality(&mut out, self.quality)
            .write_image(&pixels, width, height, color)
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to encode JPEG", e))?;

        tracing::debug!(
            width,
            height,
            input_bytes = data.len(),
            output_bytes = out.len(),
            "Normalized image to JPEG"
        );

        Ok(NormalizedImage {
            data: Bytes::from(out),
            width,
            height,
        })
    }
}
