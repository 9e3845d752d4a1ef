use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MotionError;

const MIN_LERP: f32 = 0.01;

/// Scroll relay and smoothing layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scroll", inline)]
#[serde(default)]
pub struct ScrollOptions {
    /// Whether the smoothing layer is active (ignored under reduced motion).
    #[schemars(title = "Smooth Scrolling")]
    pub smooth: bool,
    /// Fraction of the remaining distance covered per frame.
    #[schemars(title = "Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub lerp: f32,
    /// Distance (px) below which the smoothed offset snaps to the raw one.
    #[schemars(skip)]
    pub epsilon_px: f32,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            smooth: true,
            lerp: 0.1,
            epsilon_px: 0.5,
        }
    }
}

impl ScrollOptions {
    /// Reject smoothing settings the relay could never settle with.
    ///
    /// `lerp` must lie in `[0.01, 1]` and `epsilon_px` must be finite and
    /// positive.
    pub fn validate(&self) -> Result<(), MotionError> {
        if !(MIN_LERP..=1.0).contains(&self.lerp) {
            return Err(MotionError::InvalidOption(format!(
                "scroll.lerp {} is outside [{MIN_LERP}, 1]",
                self.lerp
            )));
        }
        if !self.epsilon_px.is_finite() || self.epsilon_px <= 0.0 {
            return Err(MotionError::InvalidOption(format!(
                "scroll.epsilon_px {} must be finite and positive",
                self.epsilon_px
            )));
        }
        Ok(())
    }

    /// Copy with unusable values replaced: a NaN `lerp` falls back to the
    /// default and is otherwise clamped to `[0.01, 1]`; a non-finite or
    /// non-positive `epsilon_px` falls back to the default.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let lerp = if self.lerp.is_nan() {
            defaults.lerp
        } else {
            self.lerp.clamp(MIN_LERP, 1.0)
        };
        let epsilon_px = if self.epsilon_px.is_finite() && self.epsilon_px > 0.0 {
            self.epsilon_px
        } else {
            defaults.epsilon_px
        };
        Self {
            smooth: self.smooth,
            lerp,
            epsilon_px,
        }
    }
}
