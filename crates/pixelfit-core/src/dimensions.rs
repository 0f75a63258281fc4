//! Output dimension resolution.
//!
//! Turns a dimension request from the UI (explicit pixel size or a percentage
//! scale) into concrete output dimensions. Every invalid numeric input
//! degrades to a safe default instead of failing, since these values come
//! straight from interactive controls.

use serde::{Deserialize, Serialize};

/// How the output size is specified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum DimensionMode {
    /// Explicit pixel size. Zero means "keep the natural size" for that axis.
    Pixel { width: u32, height: u32 },
    /// Uniform scale in percent of the natural size. Non-positive means 100.
    Percent { scale: f64 },
}

impl Default for DimensionMode {
    fn default() -> Self {
        DimensionMode::Pixel {
            width: 0,
            height: 0,
        }
    }
}

/// A dimension request as issued by the caller.
///
/// `lock_aspect` is advisory: the resolver never alters a pixel request to
/// keep the ratio. Callers apply it while editing through [`with_width`] and
/// [`with_height`].
///
/// [`with_width`]: DimensionRequest::with_width
/// [`with_height`]: DimensionRequest::with_height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionRequest {
    pub mode: DimensionMode,
    pub lock_aspect: bool,
}

impl DimensionRequest {
    /// Request an explicit pixel size.
    pub fn pixel(width: u32, height: u32) -> Self {
        Self {
            mode: DimensionMode::Pixel { width, height },
            lock_aspect: false,
        }
    }

    /// Request a percentage of the natural size.
    pub fn percent(scale: f64) -> Self {
        Self {
            mode: DimensionMode::Percent { scale },
            lock_aspect: false,
        }
    }

    /// Set the aspect-lock flag.
    pub fn locked(mut self, lock_aspect: bool) -> Self {
        self.lock_aspect = lock_aspect;
        self
    }

    /// Update the requested width.
    ///
    /// When the aspect lock is on and `ratio` is known, the height follows.
    /// Has no effect in percent mode.
    pub fn with_width(mut self, width: u32, ratio: Option<f64>) -> Self {
        if let DimensionMode::Pixel { height, .. } = self.mode {
            let height = if self.lock_aspect {
                locked_height(width, ratio).unwrap_or(height)
            } else {
                height
            };
            self.mode = DimensionMode::Pixel { width, height };
        }
        self
    }

    /// Update the requested height.
    ///
    /// When the aspect lock is on and `ratio` is known, the width follows.
    /// Has no effect in percent mode.
    pub fn with_height(mut self, height: u32, ratio: Option<f64>) -> Self {
        if let DimensionMode::Pixel { width, .. } = self.mode {
            let width = if self.lock_aspect {
                locked_width(height, ratio).unwrap_or(width)
            } else {
                width
            };
            self.mode = DimensionMode::Pixel { width, height };
        }
        self
    }
}

/// Resolve a dimension request against the natural size of the source.
///
/// Both returned axes are at least 1.
pub fn resolve_dimensions(request: &DimensionRequest, natural_w: u32, natural_h: u32) -> (u32, u32) {
    match request.mode {
        DimensionMode::Pixel { width, height } => {
            let w = if width == 0 { natural_w } else { width };
            let h = if height == 0 { natural_h } else { height };
            (w.max(1), h.max(1))
        }
        DimensionMode::Percent { scale } => {
            let scale = if scale.is_finite() && scale > 0.0 {
                scale
            } else {
                100.0
            };
            (scale_axis(natural_w, scale), scale_axis(natural_h, scale))
        }
    }
}

fn scale_axis(natural: u32, scale: f64) -> u32 {
    let scaled = (natural as f64 * scale / 100.0).round();
    // `as` saturates on overflow, so huge scales pin to u32::MAX
    (scaled as u32).max(1)
}

/// Width / height ratio of the source, if both axes are non-zero.
pub fn aspect_ratio(width: u32, height: u32) -> Option<f64> {
    if width == 0 || height == 0 {
        None
    } else {
        Some(width as f64 / height as f64)
    }
}

/// Height that keeps `ratio` for the given width.
pub fn locked_height(width: u32, ratio: Option<f64>) -> Option<u32> {
    match ratio {
        Some(r) if width > 0 && r > 0.0 => Some((width as f64 / r).round() as u32),
        _ => None,
    }
}

/// Width that keeps `ratio` for the given height.
pub fn locked_width(height: u32, ratio: Option<f64>) -> Option<u32> {
    match ratio {
        Some(r) if height > 0 && r > 0.0 => Some((height as f64 * r).round() as u32),
        _ => None,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn natural_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=10_000, 1u32..=10_000)
    }

    proptest! {
        /// Property: Pixel{0,0} always resolves to the natural size.
        #[test]
        fn prop_pixel_zero_is_identity((w, h) in natural_strategy()) {
            let req = DimensionRequest::pixel(0, 0);
            prop_assert_eq!(resolve_dimensions(&req, w, h), (w, h));
        }

        /// Property: Non-positive percentages behave like 100%.
        #[test]
        fn prop_non_positive_percent_is_identity(
            (w, h) in natural_strategy(),
            scale in -1000.0f64..=0.0,
        ) {
            let req = DimensionRequest::percent(scale);
            prop_assert_eq!(resolve_dimensions(&req, w, h), (w, h));
        }

        /// Property: Positive percentages round and clamp to at least 1.
        #[test]
        fn prop_percent_matches_formula(
            (w, h) in natural_strategy(),
            scale in 0.01f64..=400.0,
        ) {
            let req = DimensionRequest::percent(scale);
            let expected_w = ((w as f64 * scale / 100.0).round() as u32).max(1);
            let expected_h = ((h as f64 * scale / 100.0).round() as u32).max(1);
            prop_assert_eq!(resolve_dimensions(&req, w, h), (expected_w, expected_h));
        }

        /// Property: Output is never zero in either axis.
        #[test]
        fn prop_output_at_least_one(
            width in 0u32..=5000,
            height in 0u32..=5000,
            (w, h) in (0u32..=5000, 0u32..=5000),
        ) {
            let (out_w, out_h) = resolve_dimensions(&DimensionRequest::pixel(width, height), w, h);
            prop_assert!(out_w >= 1 && out_h >= 1);
        }
    }
}
