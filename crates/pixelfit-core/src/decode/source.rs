//! The immutable source record a transcode reads from.

use super::{decode_image, DecodeError, DecodedImage};
use crate::naming;

/// A user-selected image, decoded and ready to transcode.
///
/// Created once per selection. The transcoder only reads it, so a single
/// source can back any number of runs with different settings.
#[derive(Debug, Clone)]
pub struct SourceImage {
    image: DecodedImage,
    byte_size: u64,
    name: String,
}

impl SourceImage {
    /// Decode a selected file.
    ///
    /// `byte_size` is taken from the encoded input, not the decoded pixels.
    pub fn load(bytes: &[u8], name: impl Into<String>) -> Result<Self, DecodeError> {
        let image = decode_image(bytes)?;
        Ok(Self {
            image,
            byte_size: bytes.len() as u64,
            name: name.into(),
        })
    }

    /// Wrap pixels that were decoded elsewhere.
    pub fn from_pixels(image: DecodedImage, byte_size: u64, name: impl Into<String>) -> Self {
        Self {
            image,
            byte_size,
            name: name.into(),
        }
    }

    /// Decoded RGBA pixels at natural size.
    pub fn image(&self) -> &DecodedImage {
        &self.image
    }

    pub fn natural_width(&self) -> u32 {
        self.image.width
    }

    pub fn natural_height(&self) -> u32 {
        self.image.height
    }

    /// Size of the originally selected file in bytes.
    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    /// Original file name, extension included.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Format token derived from the file extension (e.g. `"jpeg"`, `"png"`).
    pub fn format_token(&self) -> String {
        naming::original_format(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::png_fixture;

    #[test]
    fn test_load_records_file_size_and_name() {
        let bytes = png_fixture(20, 10);
        let source = SourceImage::load(&bytes, "holiday.png").unwrap();

        assert_eq!(source.natural_width(), 20);
        assert_eq!(source.natural_height(), 10);
        assert_eq!(source.byte_size(), bytes.len() as u64);
        assert_eq!(source.name(), "holiday.png");
        assert_eq!(source.format_token(), "png");
    }

    #[test]
    fn test_load_propagates_decode_error() {
        let result = SourceImage::load(&[], "empty.jpg");
        assert!(matches!(result, Err(DecodeError::EmptyInput)));
    }

    #[test]
    fn test_from_pixels() {
        let image = DecodedImage::new(3, 2, vec![0u8; 3 * 2 * 4]);
        let source = SourceImage::from_pixels(image, 1234, "scan.webp");
        assert_eq!(source.natural_width(), 3);
        assert_eq!(source.byte_size(), 1234);
        assert_eq!(source.format_token(), "webp");
    }
}
