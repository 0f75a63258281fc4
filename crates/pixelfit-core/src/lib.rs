//! pixelfit Core - Client-side image transcoding
//!
//! This crate provides the transcoding pipeline behind pixelfit: resize a
//! picture, re-encode it as JPEG, PNG or WebP, optionally hunt for an encoder
//! quality that lands near a byte budget, and stamp the DPI into JPEG output.
//!
//! # Modules
//!
//! - `decode` - Loading a selected file into an immutable [`SourceImage`]
//! - `dimensions` - Output size resolution and aspect-lock helpers
//! - `raster` - The [`Rasterizer`] capability and its `image`-backed default
//! - `encode` - Output formats, quality handling and the [`Encoder`] capability
//! - `search` - Bisection over quality for a target size
//! - `jfif` - JFIF APP0 density patching
//! - `pipeline` - The [`Transcoder`] that sequences a run
//! - `naming` - Download names and byte formatting

pub mod decode;
pub mod dimensions;
pub mod encode;
pub mod jfif;
pub mod naming;
pub mod pipeline;
pub mod raster;
pub mod search;

pub use decode::{DecodeError, DecodedImage, SourceImage};
pub use dimensions::{resolve_dimensions, DimensionMode, DimensionRequest};
pub use encode::{EncodeError, Encoder, ImageEncoder, OutputFormat};
pub use jfif::{patch_density, read_density, Density};
pub use pipeline::{
    EncodeRequest, ProgressEvent, SizeTarget, SizeUnit, Stage, TranscodeError, TranscodeResult,
    Transcoder,
};
pub use raster::{FilterType, ImageRasterizer, RasterError, Rasterizer};
pub use search::{search, SearchOutcome};
