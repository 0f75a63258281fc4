//! Output formats and quality normalisation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lowest quality fraction ever passed to an encoder.
pub const MIN_QUALITY: f32 = 0.01;

/// Quality used when the caller supplies a non-finite value.
pub const DEFAULT_QUALITY: f32 = 0.92;

/// The closed set of formats pixelfit can produce.
///
/// Serialised as MIME tokens so request objects coming from the UI can name
/// the format the same way a browser does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/webp")]
    Webp,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Jpeg, OutputFormat::Png, OutputFormat::Webp];

    /// MIME token, e.g. `image/jpeg`.
    pub fn mime(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
            OutputFormat::Webp => "image/webp",
        }
    }

    /// Canonical file extension. JPEG uses the three-letter `jpg`.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
            OutputFormat::Webp => "webp",
        }
    }

    /// Whether quality has no meaning for this format.
    pub fn is_lossless(self) -> bool {
        matches!(self, OutputFormat::Png)
    }

    /// Parse a MIME token.
    pub fn from_mime(mime: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.mime().eq_ignore_ascii_case(mime.trim()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// Error returned when a format token is not one of the supported MIME types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported output format: {0}")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mime(s).ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// Clamp a quality fraction into `(0, 1]`.
pub fn clamp_quality(quality: f32) -> f32 {
    if !quality.is_finite() {
        return DEFAULT_QUALITY;
    }
    quality.clamp(MIN_QUALITY, 1.0)
}

/// Convert the UI's 1-100 quality integer to a fraction.
pub fn quality_from_percent(percent: u8) -> f32 {
    clamp_quality(percent as f32 / 100.0)
}

/// Map a quality fraction to the 1-100 scale JPEG encoders take.
pub fn jpeg_quality(quality: f32) -> u8 {
    (clamp_quality(quality) * 100.0).round().clamp(1.0, 100.0) as u8
}
