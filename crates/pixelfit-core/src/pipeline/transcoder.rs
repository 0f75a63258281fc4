//! The transcode orchestrator.

use log::{debug, info};
use thiserror::Error;

use super::progress::{ProgressEvent, Stage};
use super::request::{EncodeRequest, EncodedResult, SizeTarget, TranscodeResult};
use crate::decode::SourceImage;
use crate::dimensions::{resolve_dimensions, DimensionRequest};
use crate::encode::{clamp_quality, EncodeError, Encoder, ImageEncoder, OutputFormat};
use crate::jfif::patch_density;
use crate::naming::output_file_name;
use crate::raster::{ImageRasterizer, RasterError, Rasterizer};
use crate::search::search;

/// A failed transcode. Both variants are fatal for the run.
#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("Rasterization failed: {0}")]
    Raster(#[from] RasterError),

    #[error("Encoding failed: {0}")]
    Encode(#[from] EncodeError),
}

/// Runs sources through resample, encode, size search and DPI tagging.
///
/// Holds only its two capabilities, so one instance can serve any number of
/// sequential runs; nothing carries over between them.
#[derive(Debug, Clone, Default)]
pub struct Transcoder<R = ImageRasterizer, E = ImageEncoder> {
    rasterizer: R,
    encoder: E,
}

impl Transcoder {
    /// Transcoder backed by the `image` crate.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Rasterizer, E: Encoder> Transcoder<R, E> {
    pub fn with_backends(rasterizer: R, encoder: E) -> Self {
        Self { rasterizer, encoder }
    }

    /// Transcode `source` and report each stage to `progress`.
    ///
    /// Progress is delivered synchronously before the stage's work starts,
    /// with non-decreasing percentages ending at 100. A rasterizer or encoder
    /// failure aborts the run; nothing is retried.
    pub fn transcode<P>(
        &self,
        source: &SourceImage,
        dimensions: &DimensionRequest,
        request: &EncodeRequest,
        size_target: Option<SizeTarget>,
        mut progress: P,
    ) -> Result<TranscodeResult, TranscodeError>
    where
        P: FnMut(ProgressEvent),
    {
        let mut report = |stage: Stage| {
            debug!("transcode: {} ({}%)", stage.label(), stage.percent());
            progress(stage.event());
        };

        report(Stage::Prepare);
        let (width, height) =
            resolve_dimensions(dimensions, source.natural_width(), source.natural_height());

        report(Stage::Render);
        let pixels = self.rasterizer.resample(source.image(), width, height)?;

        report(Stage::Encode);
        let format = request.format;
        let target = size_target.filter(|t| t.is_active() && !format.is_lossless());

        let (mut bytes, quality, attempts) = match target {
            None => {
                let quality = request.effective_quality();
                let bytes = self.encoder.encode(&pixels, format, quality)?;
                (bytes, quality, 1)
            }
            Some(target) => {
                report(Stage::Search);
                let outcome = search(
                    |q| self.encoder.encode(&pixels, format, clamp_quality(q)),
                    target.bytes,
                )?;
                if !outcome.converged {
                    debug!(
                        "size target {} not reached; keeping {} bytes at q={:.3}",
                        target.bytes,
                        outcome.bytes.len(),
                        outcome.quality
                    );
                }
                let attempts = outcome.attempts();
                (outcome.bytes, outcome.quality, attempts)
            }
        };

        report(Stage::Finalize);
        report(Stage::Package);

        let dpi = request.effective_dpi();
        if format == OutputFormat::Jpeg {
            bytes = patch_density(&bytes, dpi);
        }

        let file_name = output_file_name(source.name(), width, height, format);
        info!(
            "transcoded {} -> {} ({}x{}, {} bytes, {} attempt(s))",
            source.name(),
            file_name,
            width,
            height,
            bytes.len(),
            attempts
        );

        report(Stage::Done);

        Ok(TranscodeResult {
            encoded: EncodedResult {
                bytes,
                width,
                height,
            },
            file_name,
            original_width: source.natural_width(),
            original_height: source.natural_height(),
            original_size: source.byte_size(),
            dpi,
            format,
            original_format: source.format_token(),
            quality,
            attempts,
        })
    }
}
