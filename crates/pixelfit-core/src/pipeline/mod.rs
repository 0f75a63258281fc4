//! Transcode pipeline for pixelfit.
//!
//! Sequences one run end to end:
//! 1. Resolve output dimensions
//! 2. Resample through a [`Rasterizer`](crate::raster::Rasterizer)
//! 3. Encode once, or search quality for a size target
//! 4. Tag JPEG output with the requested DPI
//! 5. Assemble a [`TranscodeResult`]
//!
//! # Architecture
//!
//! Runs are synchronous and single-threaded. Progress is delivered through a
//! callback at each stage boundary, which is where a browser caller can yield
//! to its event loop before the next stage starts.
//!
//! # Examples
//!
//! ```ignore
//! use pixelfit_core::decode::SourceImage;
//! use pixelfit_core::dimensions::DimensionRequest;
//! use pixelfit_core::encode::OutputFormat;
//! use pixelfit_core::pipeline::{EncodeRequest, SizeTarget, SizeUnit, Transcoder};
//!
//! let source = SourceImage::load(&std::fs::read("photo.png")?, "photo.png")?;
//! let result = Transcoder::new().transcode(
//!     &source,
//!     &DimensionRequest::percent(50.0),
//!     &EncodeRequest::from_percent(OutputFormat::Jpeg, 85, 300),
//!     Some(SizeTarget::from_unit(200.0, SizeUnit::Kb, true)),
//!     |event| println!("{:>3}% {}", event.percent, event.label),
//! )?;
//! println!("{} ({} bytes)", result.file_name, result.final_size());
//! ```

mod progress;
mod request;
mod transcoder;

pub use progress::{ProgressEvent, Stage};
pub use request::{
    EncodeRequest, EncodedResult, SizeTarget, SizeUnit, TranscodeResult, DEFAULT_DPI,
    DEFAULT_ENCODE_QUALITY, DEFAULT_TARGET_SIZE,
};
pub use transcoder::{TranscodeError, Transcoder};
