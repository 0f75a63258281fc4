//! pixelfit WASM - WebAssembly bindings for pixelfit
//!
//! This crate exposes the pixelfit-core transcoding pipeline to a browser UI.
//!
//! # Module Structure
//!
//! - `types` - Wrappers for the selected source and the transcode result
//! - `transcode` - The transcode entry point with progress reporting
//! - `metadata` - JFIF DPI embedding and inspection
//! - `dimensions` - Size resolution, aspect lock and formatting helpers
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsSourceImage, transcode } from '@pixelfit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const source = JsSourceImage.decode(bytes, file.name);
//! const result = transcode(source, { format: 'image/webp', quality: 80 });
//! console.log(`${result.file_name}: ${result.final_size} bytes`);
//! ```

use wasm_bindgen::prelude::*;

mod dimensions;
mod metadata;
mod transcode;
mod types;

// Re-export public types
pub use dimensions::{dpi_presets, format_bytes, locked_height, locked_width, resolve_dimensions};
pub use metadata::{embed_jpeg_dpi, is_jpeg, read_jpeg_dpi};
pub use transcode::transcode;
pub use types::{JsSourceImage, JsTranscodeResult};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
