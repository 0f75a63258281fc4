//! WASM-compatible wrapper types.
//!
//! This module provides JavaScript-friendly types that wrap the core pixelfit
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use pixelfit_core::dimensions::aspect_ratio;
use pixelfit_core::{DecodedImage, SourceImage, TranscodeResult};
use wasm_bindgen::prelude::*;

/// A selected source image for JavaScript.
///
/// # Memory Management
///
/// The decoded pixels stay in WASM memory for the lifetime of this object, so
/// one source can be transcoded repeatedly with different settings. Call
/// `free()` when the user picks another file or clears the selection.
#[wasm_bindgen]
pub struct JsSourceImage {
    inner: SourceImage,
}

#[wasm_bindgen]
impl JsSourceImage {
    /// Decode a selected file (JPEG, PNG or WebP).
    ///
    /// # Arguments
    /// * `bytes` - The file contents
    /// * `name` - The file name, used for the download name and format token
    pub fn decode(bytes: &[u8], name: &str) -> Result<JsSourceImage, JsValue> {
        SourceImage::load(bytes, name)
            .map(|inner| JsSourceImage { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Wrap RGBA pixels decoded by the browser.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    /// * `byte_size` - Size of the original file in bytes
    /// * `name` - The original file name
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: u32,
        height: u32,
        pixels: Vec<u8>,
        byte_size: f64,
        name: &str,
    ) -> Result<JsSourceImage, JsValue> {
        let expected = DecodedImage::expected_len(width, height);
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(JsValue::from_str(&format!(
                "Invalid pixel data: expected {} bytes for {}x{}, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Self::from_parts(width, height, pixels, byte_size as u64, name))
    }

    /// Natural width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.natural_width()
    }

    /// Natural height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.natural_height()
    }

    /// Size of the original file in bytes
    #[wasm_bindgen(getter)]
    pub fn byte_size(&self) -> f64 {
        self.inner.byte_size() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    /// Format token from the file extension, e.g. "png"
    #[wasm_bindgen(getter)]
    pub fn format_token(&self) -> String {
        self.inner.format_token()
    }

    /// Width / height, for aspect-locked editing. Undefined for empty images.
    #[wasm_bindgen(getter)]
    pub fn aspect_ratio(&self) -> Option<f64> {
        aspect_ratio(self.inner.natural_width(), self.inner.natural_height())
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsSourceImage {
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<u8>, byte_size: u64, name: &str) -> Self {
        let image = DecodedImage::new(width, height, pixels);
        Self {
            inner: SourceImage::from_pixels(image, byte_size, name),
        }
    }

    pub(crate) fn source(&self) -> &SourceImage {
        &self.inner
    }
}

/// The outcome of a transcode, for display and download.
#[wasm_bindgen]
pub struct JsTranscodeResult {
    inner: TranscodeResult,
}

#[wasm_bindgen]
impl JsTranscodeResult {
    /// Encoded output as Uint8Array.
    ///
    /// Note: This creates a copy in JavaScript memory. Wrap it in a Blob of
    /// type `mime` to offer it for download.
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.encoded.bytes.clone()
    }

    /// Suggested download name, e.g. "photo_1000x500.jpg"
    #[wasm_bindgen(getter)]
    pub fn file_name(&self) -> String {
        self.inner.file_name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    #[wasm_bindgen(getter)]
    pub fn original_width(&self) -> u32 {
        self.inner.original_width
    }

    #[wasm_bindgen(getter)]
    pub fn original_height(&self) -> u32 {
        self.inner.original_height
    }

    #[wasm_bindgen(getter)]
    pub fn original_size(&self) -> f64 {
        self.inner.original_size as f64
    }

    #[wasm_bindgen(getter)]
    pub fn final_size(&self) -> f64 {
        self.inner.final_size() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn dpi(&self) -> u32 {
        self.inner.dpi
    }

    /// Output extension token, e.g. "jpg"
    #[wasm_bindgen(getter)]
    pub fn format(&self) -> String {
        self.inner.format_token().to_string()
    }

    /// Output MIME type, e.g. "image/jpeg"
    #[wasm_bindgen(getter)]
    pub fn mime(&self) -> String {
        self.inner.format.mime().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn original_format(&self) -> String {
        self.inner.original_format.clone()
    }

    /// Quality fraction the output was encoded at
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> f32 {
        self.inner.quality
    }

    /// Number of encoder invocations
    #[wasm_bindgen(getter)]
    pub fn attempts(&self) -> u32 {
        self.inner.attempts as u32
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl From<TranscodeResult> for JsTranscodeResult {
    fn from(inner: TranscodeResult) -> Self {
        Self { inner }
    }
}
