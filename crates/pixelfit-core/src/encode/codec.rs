//! Encoding through the `image` crate's codecs.
//!
//! JPEG and PNG go through the `image` crate. WebP is encoded lossy with
//! `zenwebp`, since `image` only writes lossless WebP. Quality changes the
//! output for JPEG and WebP; PNG ignores it.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder as _};
use thiserror::Error;
use zenwebp::{EncodeRequest, EncoderConfig, PixelLayout};

use super::format::{clamp_quality, jpeg_quality, OutputFormat};
use crate::decode::DecodedImage;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The codec reported a failure
    #[error("{format} encoding failed: {message}")]
    EncodingFailed { format: OutputFormat, message: String },
}

/// Encoder capability used by the transcoder.
///
/// Implementations receive an already clamped quality fraction in `(0, 1]`
/// and must ignore it for lossless formats.
pub trait Encoder {
    fn encode(&self, image: &DecodedImage, format: OutputFormat, quality: f32) -> Result<Vec<u8>, EncodeError>;
}

/// Default encoder backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageEncoder;

impl Encoder for ImageEncoder {
    fn encode(&self, image: &DecodedImage, format: OutputFormat, quality: f32) -> Result<Vec<u8>, EncodeError> {
        validate(image)?;
        match format {
            OutputFormat::Jpeg => encode_jpeg(image, quality),
            OutputFormat::Png => encode_png(image),
            OutputFormat::Webp => encode_webp(image, quality),
        }
    }
}

fn validate(image: &DecodedImage) -> Result<(), EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }
    if !image.is_consistent() {
        return Err(EncodeError::InvalidPixelData {
            expected: DecodedImage::expected_len(image.width, image.height),
            actual: image.pixels.len(),
        });
    }
    Ok(())
}

/// Encode RGBA pixels to JPEG.
///
/// JPEG has no alpha channel; pixels are composited onto black first, which
/// is what a canvas export does with transparent regions.
pub fn encode_jpeg(image: &DecodedImage, quality: f32) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;

    let rgb = flatten_alpha(&image.pixels);
    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, jpeg_quality(clamp_quality(quality)));

    encoder
        .write_image(&rgb, image.width, image.height, ExtendedColorType::Rgb8)
        .map_err(|e| failed(OutputFormat::Jpeg, e))?;

    Ok(buffer.into_inner())
}

/// Encode RGBA pixels to PNG.
pub fn encode_png(image: &DecodedImage) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;

    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(&image.pixels, image.width, image.height, ExtendedColorType::Rgba8)
        .map_err(|e| failed(OutputFormat::Png, e))?;
    Ok(out)
}

/// Encode RGBA pixels to lossy WebP.
///
/// The quality fraction maps onto the encoder's 0-100 scale. Alpha is kept.
pub fn encode_webp(image: &DecodedImage, quality: f32) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;

    let config = EncoderConfig::new_lossy().with_quality(clamp_quality(quality) * 100.0);
    EncodeRequest::new(&config, &image.pixels, PixelLayout::Rgba8, image.width, image.height)
        .encode()
        .map_err(|e| failed(OutputFormat::Webp, e))
}

fn failed(format: OutputFormat, err: impl std::fmt::Display) -> EncodeError {
    EncodeError::EncodingFailed {
        format,
        message: err.to_string(),
    }
}

fn flatten_alpha(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        let a = px[3] as u16;
        for &c in &px[..3] {
            rgb.push(((c as u16 * a + 127) / 255) as u8);
        }
    }
    rgb
}


// ============================================================================
// Property-Based Tests
// ============================================================================
