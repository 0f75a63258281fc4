//! Pixel resampling.
//!
//! The transcoder only needs "give me these pixels at W×H". [`Rasterizer`] is
//! that capability; [`ImageRasterizer`] implements it with
//! `image::imageops::resize`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::DecodedImage;

/// Errors that can occur while resampling.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Target width or height is zero
    #[error("Invalid target dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Source buffer length doesn't match its dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// Filter type for resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    #[default]
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Resampling capability used by the transcoder.
pub trait Rasterizer {
    fn resample(&self, image: &DecodedImage, width: u32, height: u32) -> Result<DecodedImage, RasterError>;
}

/// Default rasterizer backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageRasterizer {
    pub filter: FilterType,
}

impl ImageRasterizer {
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }
}

impl Rasterizer for ImageRasterizer {
    fn resample(&self, image: &DecodedImage, width: u32, height: u32) -> Result<DecodedImage, RasterError> {
        resize(image, width, height, self.filter)
    }
}

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `RasterError::InvalidDimensions` for a zero target axis and
/// `RasterError::InvalidPixelData` when the source buffer is inconsistent.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, RasterError> {
    if width == 0 || height == 0 {
        return Err(RasterError::InvalidDimensions { width, height });
    }

    let rgba = image.to_rgba_image().ok_or(RasterError::InvalidPixelData {
        expected: DecodedImage::expected_len(image.width, image.height),
        actual: image.pixels.len(),
    })?;

    // Fast path: same size, no resampling
    if image.width == width && image.height == height {
        return Ok(DecodedImage::from_rgba_image(rgba));
    }

    let resized = image::imageops::resize(&rgba, width, height, filter.to_image_filter());
    Ok(DecodedImage::from_rgba_image(resized))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity(DecodedImage::expected_len(width, height));
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8);
                pixels.push(((y * 255) / height.max(1)) as u8);
                pixels.push(128);
                pixels.push(255);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_resize_basic() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 50, 25, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 50);
        assert_eq!(resized.height, 25);
        assert_eq!(resized.pixels.len(), 50 * 25 * 4);
    }

    #[test]
    fn test_resize_same_dimensions() {
        let img = create_test_image(30, 20);
        let resized = resize(&img, 30, 20, FilterType::Lanczos3).unwrap();
        assert_eq!(resized, img);
    }

    #[test]
    fn test_resize_upscale() {
        let img = create_test_image(50, 25);
        let resized = resize(&img, 100, 50, FilterType::Lanczos3).unwrap();

        assert_eq!(resized.width, 100);
        assert_eq!(resized.height, 50);
    }

    #[test]
    fn test_resize_non_uniform() {
        // Aspect ratio is not preserved: the caller decides the shape
        let img = create_test_image(100, 100);
        let resized = resize(&img, 10, 80, FilterType::Nearest).unwrap();
        assert_eq!((resized.width, resized.height), (10, 80));
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let img = create_test_image(100, 50);

        assert!(matches!(
            resize(&img, 0, 50, FilterType::Bilinear),
            Err(RasterError::InvalidDimensions { width: 0, height: 50 })
        ));
        assert!(resize(&img, 50, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_resize_inconsistent_buffer() {
        let img = DecodedImage {
            width: 4,
            height: 4,
            pixels: vec![0u8; 7],
        };
        assert!(matches!(
            resize(&img, 2, 2, FilterType::Bilinear),
            Err(RasterError::InvalidPixelData { expected: 64, actual: 7 })
        ));
    }

    #[test]
    fn test_default_rasterizer_uses_lanczos() {
        assert_eq!(ImageRasterizer::default().filter, FilterType::Lanczos3);
        let resized = ImageRasterizer::default()
            .resample(&create_test_image(40, 40), 13, 7)
            .unwrap();
        assert_eq!((resized.width, resized.height), (13, 7));
    }

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }
}
