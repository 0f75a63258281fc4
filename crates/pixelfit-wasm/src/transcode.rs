//! Transcoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { JsSourceImage, transcode } from '@pixelfit/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const source = JsSourceImage.decode(bytes, file.name);
//!
//! const result = transcode(source, {
//!   dimMode: 'percent',
//!   percent: 50,
//!   format: 'image/jpeg',
//!   quality: 85,
//!   sizeEnabled: true,
//!   targetSize: 200,
//!   sizeUnit: 'KB',
//!   dpi: 300,
//! }, (pct, label) => progressBar.update(pct, label));
//!
//! const blob = new Blob([result.bytes()], { type: result.mime });
//! ```

use pixelfit_core::{
    DimensionRequest, EncodeRequest, OutputFormat, SizeTarget, SizeUnit, Transcoder,
};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::types::{JsSourceImage, JsTranscodeResult};

/// How the dimensions fields are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum DimMode {
    #[default]
    Pixel,
    Percent,
}

/// Plain settings object passed from the UI.
///
/// Missing fields take the UI's defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct TranscodeOptions {
    pub dim_mode: DimMode,
    pub width: u32,
    pub height: u32,
    pub percent: f64,
    pub lock_aspect: bool,
    pub format: OutputFormat,
    /// Quality slider value, 1-100.
    pub quality: u8,
    pub size_enabled: bool,
    pub target_size: f64,
    pub size_unit: SizeUnit,
    pub dpi: u32,
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self {
            dim_mode: DimMode::Pixel,
            width: 0,
            height: 0,
            percent: 100.0,
            lock_aspect: true,
            format: OutputFormat::Jpeg,
            quality: 85,
            size_enabled: false,
            target_size: 200.0,
            size_unit: SizeUnit::Kb,
            dpi: 96,
        }
    }
}

impl TranscodeOptions {
    pub(crate) fn dimension_request(&self) -> DimensionRequest {
        let request = match self.dim_mode {
            DimMode::Pixel => DimensionRequest::pixel(self.width, self.height),
            DimMode::Percent => DimensionRequest::percent(self.percent),
        };
        request.locked(self.lock_aspect)
    }

    pub(crate) fn encode_request(&self) -> EncodeRequest {
        EncodeRequest::from_percent(self.format, self.quality, self.dpi)
    }

    pub(crate) fn size_target(&self) -> Option<SizeTarget> {
        self.size_enabled
            .then(|| SizeTarget::from_unit(self.target_size, self.size_unit, true))
    }
}

/// Transcode a source image.
///
/// # Arguments
///
/// * `source` - The selected image
/// * `options` - Settings object (see module docs); missing fields use defaults
/// * `on_progress` - Optional `(percent, label) => void`, called at each stage
///
/// # Errors
///
/// Returns an error if the options object is malformed or encoding fails.
#[wasm_bindgen]
pub fn transcode(
    source: &JsSourceImage,
    options: JsValue,
    on_progress: Option<js_sys::Function>,
) -> Result<JsTranscodeResult, JsValue> {
    let options: TranscodeOptions = if options.is_undefined() || options.is_null() {
        TranscodeOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid transcode options: {}", e)))?
    };

    Transcoder::new()
        .transcode(
            source.source(),
            &options.dimension_request(),
            &options.encode_request(),
            options.size_target(),
            |event| {
                if let Some(callback) = &on_progress {
                    let pct = JsValue::from(event.percent);
                    let label = JsValue::from_str(event.label);
                    if let Err(err) = callback.call2(&JsValue::NULL, &pct, &label) {
                        web_sys::console::warn_2(
                            &JsValue::from_str("pixelfit: progress callback threw"),
                            &err,
                        );
                    }
                }
            },
        )
        .map(JsTranscodeResult::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelfit_core::DimensionMode;

    #[test]
    fn test_default_options_match_ui_defaults() {
        let opts = TranscodeOptions::default();
        assert_eq!(opts.dimension_request().mode, DimensionMode::Pixel { width: 0, height: 0 });
        assert!(opts.dimension_request().lock_aspect);

        let enc = opts.encode_request();
        assert_eq!(enc.format, OutputFormat::Jpeg);
        assert_eq!(enc.quality, 0.85);
        assert_eq!(enc.dpi, 96);
        assert_eq!(opts.size_target(), None);
    }

    #[test]
    fn test_percent_mode() {
        let opts = TranscodeOptions {
            dim_mode: DimMode::Percent,
            percent: 25.0,
            width: 999,
            ..Default::default()
        };
        assert_eq!(opts.dimension_request().mode, DimensionMode::Percent { scale: 25.0 });
    }

    #[test]
    fn test_size_target_conversion() {
        let opts = TranscodeOptions {
            size_enabled: true,
            target_size: 2.0,
            size_unit: SizeUnit::Mb,
            ..Default::default()
        };
        assert_eq!(opts.size_target(), Some(SizeTarget::new(2 * 1024 * 1024)));

        let opts = TranscodeOptions {
            size_enabled: true,
            target_size: 0.0,
            ..Default::default()
        };
        assert_eq!(opts.size_target(), Some(SizeTarget::new(200 * 1024)));
    }

    #[test]
    fn test_zero_dpi_uses_default() {
        let opts = TranscodeOptions {
            dpi: 0,
            ..Default::default()
        };
        assert_eq!(opts.encode_request().dpi, 96);
    }
}
