//! JPEG metadata WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { embed_jpeg_dpi, read_jpeg_dpi } from '@pixelfit/wasm';
//!
//! const tagged = embed_jpeg_dpi(jpegBytes, 300);
//! const density = read_jpeg_dpi(tagged); // { units: 1, x: 300, y: 300 }
//! ```

use pixelfit_core::jfif;
use wasm_bindgen::prelude::*;

/// Set the DPI of a JPEG by writing a JFIF APP0 segment after SOI.
///
/// Buffers that do not start with the SOI marker are returned unchanged. An
/// existing APP0 segment is replaced; otherwise one is inserted.
///
/// # Arguments
///
/// * `bytes` - JPEG file contents
/// * `dpi` - Density to write on both axes (truncated to 16 bits)
#[wasm_bindgen]
pub fn embed_jpeg_dpi(bytes: &[u8], dpi: u32) -> Vec<u8> {
    jfif::patch_density(bytes, dpi)
}

/// Read the JFIF density of a JPEG.
///
/// Returns `{ units, x, y }`, or `undefined` when the buffer has no JFIF APP0
/// segment directly after SOI.
#[wasm_bindgen]
pub fn read_jpeg_dpi(bytes: &[u8]) -> Result<JsValue, JsValue> {
    match jfif::read_density(bytes) {
        Some(density) => serde_wasm_bindgen::to_value(&density)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize density: {}", e))),
        None => Ok(JsValue::UNDEFINED),
    }
}

/// Whether the buffer starts with a JPEG SOI marker.
#[wasm_bindgen]
pub fn is_jpeg(bytes: &[u8]) -> bool {
    jfif::is_jpeg(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_passes_non_jpeg_through() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A];
        assert_eq!(embed_jpeg_dpi(&png, 300), png.to_vec());
        assert!(!is_jpeg(&png));
    }

    #[test]
    fn test_embed_inserts_app0() {
        let bare = [0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x02, 0xFF, 0xD9];
        let out = embed_jpeg_dpi(&bare, 150);
        assert_eq!(out.len(), bare.len() + 18);
        assert_eq!(&out[2..4], &[0xFF, 0xE0]);
        assert_eq!(&out[out.len() - 6..], &bare[2..]);
        assert_eq!(
            jfif::read_density(&out),
            Some(jfif::Density {
                units: jfif::UNITS_DPI,
                x: 150,
                y: 150
            })
        );
    }
}
