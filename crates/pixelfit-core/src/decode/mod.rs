//! Source image loading for pixelfit.
//!
//! This module provides functionality for:
//! - Decoding a user-selected file (JPEG, PNG, WebP) into RGBA pixels
//! - Applying EXIF orientation the way a browser does before drawing
//! - Wrapping the result into an immutable [`SourceImage`]
//!
//! Camera RAW formats are not supported.

mod file;
mod source;
mod types;

pub use file::{decode_image, get_orientation};
pub use source::SourceImage;
pub use types::{DecodeError, DecodedImage, Orientation};

#[cfg(test)]
pub(crate) use file::tests::png_fixture;
