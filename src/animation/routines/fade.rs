//! Fade-in: opacity 0→1 while sliding up from a vertical offset.

use glam::Vec2;
use web_time::Duration;

use super::traits::{progress, AnimationRoutine, Sample};
use crate::animation::driver::MotionDriver;
use crate::error::RoutineError;
use crate::node::{Node, NodeVisual};
use crate::util::easing::EasingFunction;

/// Single opacity + offset transition.
///
/// Also backs the `default` kind (no offset) and each stagger member.
#[derive(Debug, Clone)]
pub struct Fade {
    /// Transition length.
    pub duration: Duration,
    /// Starting vertical offset in pixels.
    pub offset_px: f32,
    /// Easing curve.
    pub easing: EasingFunction,
    name: &'static str,
}

impl Fade {
    /// Fade with a vertical slide.
    #[must_use]
    pub fn new(duration: Duration, offset_px: f32) -> Self {
        Self {
            duration,
            offset_px,
            easing: EasingFunction::DEFAULT,
            name: "fade",
        }
    }

    /// Opacity-only fade used for unclassified nodes.
    #[must_use]
    pub fn plain(duration: Duration) -> Self {
        Self {
            name: "default",
            ..Self::new(duration, 0.0)
        }
    }

    /// Set custom easing.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Duration for `node`, honoring its declared override.
    #[must_use]
    pub fn duration_for(&self, node: &Node) -> Duration {
        node.params().duration.unwrap_or(self.duration)
    }

    /// Visual state at eased progress `e`.
    pub(crate) fn at(&self, node: &Node, e: f32) -> NodeVisual {
        NodeVisual {
            opacity: e,
            translate: Vec2::new(0.0, self.offset_px * (1.0 - e)),
            ..node.visual().clone()
        }
    }
}

impl Default for Fade {
    fn default() -> Self {
        Self::new(Duration::from_millis(600), 30.0)
    }
}

impl AnimationRoutine for Fade {
    fn name(&self) -> &'static str {
        self.name
    }

    fn initial(&self, node: &Node) -> NodeVisual {
        self.at(node, 0.0)
    }

    fn sample(
        &self,
        node: &Node,
        elapsed: Duration,
        driver: &dyn MotionDriver,
    ) -> Result<Sample, RoutineError> {
        let t = progress(elapsed, self.duration_for(node));
        if t >= 1.0 {
            return Ok(Sample {
                visual: self.at(node, 1.0),
                complete: true,
            });
        }
        Ok(Sample {
            visual: self.at(node, driver.ease(self.easing, t)),
            complete: false,
        })
    }

    fn finish(&self, node: &mut Node) {
        let end = self.at(node, 1.0);
        *node.visual_mut() = end;
    }

    fn duration(&self, node: &Node) -> Duration {
        self.duration_for(node)
    }
}
