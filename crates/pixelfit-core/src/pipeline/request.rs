//! Request and result types of a transcode run.

use serde::{Deserialize, Serialize};

use crate::encode::{clamp_quality, quality_from_percent, OutputFormat};

/// DPI written when the caller does not choose one.
pub const DEFAULT_DPI: u32 = 96;

/// Quality fraction used when the caller does not choose one.
pub const DEFAULT_ENCODE_QUALITY: f32 = 0.85;

/// Size target value used when the UI field is empty.
pub const DEFAULT_TARGET_SIZE: f64 = 200.0;

/// How to encode the resampled pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeRequest {
    pub format: OutputFormat,
    /// Quality fraction; ignored for lossless formats.
    pub quality: f32,
    /// Pixel density tag for JPEG output.
    pub dpi: u32,
}

impl Default for EncodeRequest {
    fn default() -> Self {
        Self {
            format: OutputFormat::Jpeg,
            quality: DEFAULT_ENCODE_QUALITY,
            dpi: DEFAULT_DPI,
        }
    }
}

impl EncodeRequest {
    /// A zero DPI becomes [`DEFAULT_DPI`].
    pub fn new(format: OutputFormat, quality: f32, dpi: u32) -> Self {
        Self {
            format,
            quality,
            dpi: normalize_dpi(dpi),
        }
    }

    /// Build from the UI's 1-100 quality slider.
    pub fn from_percent(format: OutputFormat, quality: u8, dpi: u32) -> Self {
        Self::new(format, quality_from_percent(quality), dpi)
    }

    /// Quality as it will be handed to the encoder.
    pub fn effective_quality(&self) -> f32 {
        clamp_quality(self.quality)
    }

    /// DPI as it will be written, never zero.
    pub fn effective_dpi(&self) -> u32 {
        normalize_dpi(self.dpi)
    }
}

fn normalize_dpi(dpi: u32) -> u32 {
    if dpi == 0 {
        DEFAULT_DPI
    } else {
        dpi
    }
}

/// Unit of a size target as entered in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SizeUnit {
    #[default]
    #[serde(rename = "KB")]
    Kb,
    #[serde(rename = "MB")]
    Mb,
}

impl SizeUnit {
    pub fn bytes_per_unit(self) -> u64 {
        match self {
            SizeUnit::Kb => 1024,
            SizeUnit::Mb => 1024 * 1024,
        }
    }
}

/// A desired output size in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeTarget {
    pub bytes: u64,
    pub enabled: bool,
}

impl SizeTarget {
    pub fn new(bytes: u64) -> Self {
        Self {
            bytes,
            enabled: true,
        }
    }

    /// Convert a UI value and unit to bytes.
    ///
    /// Non-positive or non-finite values fall back to 200 of the given unit.
    pub fn from_unit(value: f64, unit: SizeUnit, enabled: bool) -> Self {
        let value = if value.is_finite() && value > 0.0 {
            value
        } else {
            DEFAULT_TARGET_SIZE
        };
        Self {
            bytes: (value * unit.bytes_per_unit() as f64).round() as u64,
            enabled,
        }
    }

    /// Whether the target should drive a quality search.
    ///
    /// A zero-byte target counts as disabled.
    pub fn is_active(&self) -> bool {
        self.enabled && self.bytes > 0
    }
}

/// Encoded bytes and the pixel size they describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedResult {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl EncodedResult {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Everything the caller needs to present and offer a finished transcode.
#[derive(Debug, Clone)]
pub struct TranscodeResult {
    pub encoded: EncodedResult,
    /// Suggested download name, e.g. `photo_1000x500.jpg`.
    pub file_name: String,
    pub original_width: u32,
    pub original_height: u32,
    pub original_size: u64,
    pub dpi: u32,
    pub format: OutputFormat,
    /// Extension-derived token of the source file, e.g. `png`.
    pub original_format: String,
    /// Quality the final bytes were encoded at.
    pub quality: f32,
    /// Number of encoder invocations.
    pub attempts: usize,
}

impl TranscodeResult {
    pub fn width(&self) -> u32 {
        self.encoded.width
    }

    pub fn height(&self) -> u32 {
        self.encoded.height
    }

    pub fn final_size(&self) -> u64 {
        self.encoded.len() as u64
    }

    /// Canonical extension of the output, e.g. `jpg`.
    pub fn format_token(&self) -> &'static str {
        self.format.extension()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.encoded.bytes
    }
}
