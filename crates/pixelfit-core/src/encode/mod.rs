//! Encoding stage for pixelfit.
//!
//! This module provides:
//! - The closed set of output formats and their MIME tokens / extensions
//! - Quality normalisation (every encode sees a fraction in `(0, 1]`)
//! - The [`Encoder`] capability and its `image`-backed default
//!
//! # Examples
//!
//! ```ignore
//! use pixelfit_core::decode::DecodedImage;
//! use pixelfit_core::encode::{Encoder, ImageEncoder, OutputFormat};
//!
//! let image = DecodedImage::new(100, 100, vec![128u8; 100 * 100 * 4]);
//! let jpeg = ImageEncoder.encode(&image, OutputFormat::Jpeg, 0.9).unwrap();
//! println!("Encoded {} bytes", jpeg.len());
//! ```

mod codec;
mod format;

pub use codec::{encode_jpeg, encode_png, encode_webp, EncodeError, Encoder, ImageEncoder};
pub use format::{
    clamp_quality, jpeg_quality, quality_from_percent, OutputFormat, UnknownFormat,
    DEFAULT_QUALITY, MIN_QUALITY,
};
