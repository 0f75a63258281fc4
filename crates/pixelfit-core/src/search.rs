//! Quality search for a target output size.
//!
//! Encoded size grows (roughly) with quality, so a bisection over the quality
//! fraction finds a setting whose output lands near a byte budget. The search
//! is best effort: it stops as soon as an attempt is within [`TOLERANCE`] of
//! the target, and otherwise returns the last attempt after
//! [`MAX_ITERATIONS`] encodes, whatever its size.

use log::debug;

/// Lower bound of the searched quality range.
pub const QUALITY_FLOOR: f64 = 0.05;

/// Upper bound of the searched quality range.
pub const QUALITY_CEILING: f64 = 0.99;

/// Hard cap on encoder invocations per search.
pub const MAX_ITERATIONS: usize = 12;

/// Relative size error accepted as "on target".
pub const TOLERANCE: f64 = 0.05;

/// One encode attempt and the bracket after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchStep {
    pub quality: f32,
    pub size: u64,
    pub lo: f64,
    pub hi: f64,
}

/// Result of a quality search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Bytes of the last attempt.
    pub bytes: Vec<u8>,
    /// Quality the returned bytes were encoded at.
    pub quality: f32,
    /// Whether the returned bytes are within tolerance of the target.
    pub converged: bool,
    /// Every attempt, in order.
    pub steps: Vec<SearchStep>,
}

impl SearchOutcome {
    /// Number of encoder invocations.
    pub fn attempts(&self) -> usize {
        self.steps.len()
    }
}

/// Relative distance between an encoded size and the target.
pub fn relative_error(size: u64, target_bytes: u64) -> f64 {
    (size as f64 - target_bytes as f64).abs() / target_bytes as f64
}

/// Bisect quality until `encode` produces roughly `target_bytes` bytes.
///
/// `encode` is called strictly sequentially with qualities inside
/// `[QUALITY_FLOOR, QUALITY_CEILING]`, at most [`MAX_ITERATIONS`] times. An
/// encoder error ends the search and is returned as is.
///
/// A zero target has no meaningful answer; callers treat it as "no target".
/// If one arrives anyway, a single encode at the ceiling is returned.
pub fn search<F, E>(mut encode: F, target_bytes: u64) -> Result<SearchOutcome, E>
where
    F: FnMut(f32) -> Result<Vec<u8>, E>,
{
    if target_bytes == 0 {
        let quality = QUALITY_CEILING as f32;
        let bytes = encode(quality)?;
        let step = SearchStep {
            quality,
            size: bytes.len() as u64,
            lo: QUALITY_FLOOR,
            hi: QUALITY_CEILING,
        };
        return Ok(SearchOutcome {
            bytes,
            quality,
            converged: false,
            steps: vec![step],
        });
    }

    let (mut lo, mut hi) = (QUALITY_FLOOR, QUALITY_CEILING);
    let mut steps = Vec::with_capacity(MAX_ITERATIONS);
    let mut best: Option<(Vec<u8>, f32)> = None;
    let mut converged = false;

    for _ in 0..MAX_ITERATIONS {
        let mid = (lo + hi) / 2.0;
        let quality = mid as f32;
        let bytes = encode(quality)?;
        let size = bytes.len() as u64;
        let error = relative_error(size, target_bytes);

        if error < TOLERANCE {
            converged = true;
        } else if size > target_bytes {
            hi = mid;
        } else {
            lo = mid;
        }

        debug!(
            "quality search: q={:.4} size={} target={} err={:.3} bracket=[{:.4}, {:.4}]",
            quality, size, target_bytes, error, lo, hi
        );

        steps.push(SearchStep { quality, size, lo, hi });
        best = Some((bytes, quality));

        if converged {
            break;
        }
    }

    // MAX_ITERATIONS > 0, so at least one attempt was made
    let (bytes, quality) = best.unwrap_or_default();
    Ok(SearchOutcome {
        bytes,
        quality,
        converged,
        steps,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
