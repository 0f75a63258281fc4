//! Dimension and display helpers for the settings form.
//!
//! These let the UI keep its width/height fields in sync without
//! duplicating the rounding rules used by the transcoder.

use pixelfit_core::dimensions::{self, DimensionRequest};
use pixelfit_core::jfif::DPI_PRESETS;
use pixelfit_core::naming;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Resolve the output size for a pixel or percent request.
///
/// Returns `[width, height]`.
///
/// # Arguments
///
/// * `percent_mode` - Interpret `percent` instead of `width`/`height`
/// * `width`, `height` - Requested pixel size; zero keeps the natural axis
/// * `percent` - Scale in percent; non-positive means 100
/// * `natural_width`, `natural_height` - Size of the source image
#[wasm_bindgen]
pub fn resolve_dimensions(
    percent_mode: bool,
    width: u32,
    height: u32,
    percent: f64,
    natural_width: u32,
    natural_height: u32,
) -> Vec<u32> {
    let request = if percent_mode {
        DimensionRequest::percent(percent)
    } else {
        DimensionRequest::pixel(width, height)
    };
    let (w, h) = dimensions::resolve_dimensions(&request, natural_width, natural_height);
    vec![w, h]
}

/// Height matching `width` at the source's aspect ratio.
///
/// Returns `undefined` when the ratio is unknown or `width` is zero.
#[wasm_bindgen]
pub fn locked_height(width: u32, natural_width: u32, natural_height: u32) -> Option<u32> {
    dimensions::locked_height(width, dimensions::aspect_ratio(natural_width, natural_height))
}

/// Width matching `height` at the source's aspect ratio.
#[wasm_bindgen]
pub fn locked_width(height: u32, natural_width: u32, natural_height: u32) -> Option<u32> {
    dimensions::locked_width(height, dimensions::aspect_ratio(natural_width, natural_height))
}

/// Human-readable byte count, e.g. "12.3 KB".
#[wasm_bindgen]
pub fn format_bytes(bytes: f64) -> String {
    naming::format_bytes(bytes.max(0.0) as u64)
}

#[derive(Serialize)]
struct DpiPreset {
    dpi: u32,
    label: &'static str,
}

/// DPI presets as `[{ dpi, label }]`.
#[wasm_bindgen]
pub fn dpi_presets() -> Result<JsValue, JsValue> {
    let presets: Vec<DpiPreset> = DPI_PRESETS
        .iter()
        .map(|&(dpi, label)| DpiPreset { dpi, label })
        .collect();
    serde_wasm_bindgen::to_value(&presets)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize presets: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_pixel_and_percent() {
        assert_eq!(resolve_dimensions(false, 1000, 0, 0.0, 4000, 3000), vec![1000, 3000]);
        assert_eq!(resolve_dimensions(true, 0, 0, 50.0, 4000, 3000), vec![2000, 1500]);
        assert_eq!(resolve_dimensions(true, 0, 0, -5.0, 4000, 3000), vec![4000, 3000]);
    }

    #[test]
    fn test_locked_axes() {
        assert_eq!(locked_height(1000, 4000, 3000), Some(750));
        assert_eq!(locked_width(750, 4000, 3000), Some(1000));
        assert_eq!(locked_height(1000, 0, 3000), None);
        assert_eq!(locked_width(0, 4000, 3000), None);
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512.0), "512 B");
        assert_eq!(format_bytes(1536.0), "1.5 KB");
        assert_eq!(format_bytes(-1.0), "0 B");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_dpi_presets_array() {
        let value = dpi_presets().unwrap();
        let array = js_sys::Array::from(&value);
        assert_eq!(array.length(), 5);
    }
}
