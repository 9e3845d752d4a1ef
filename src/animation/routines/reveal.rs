//! Content reveal: the inner surface slides up from 100% offset inside a
//! clipping container.

use web_time::Duration;

use super::traits::{progress, AnimationRoutine, Prepared, Sample};
use crate::animation::driver::MotionDriver;
use crate::error::RoutineError;
use crate::node::{Node, NodeVisual};
use crate::util::easing::EasingFunction;

/// Two-surface slide guarded by the node's `revealed` flag.
#[derive(Debug, Clone)]
pub struct Reveal {
    /// Slide length.
    pub duration: Duration,
    /// Easing curve.
    pub easing: EasingFunction,
}

impl Reveal {
    /// Create a reveal of the given length.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            easing: EasingFunction::CubicOut,
        }
    }

    fn at(node: &Node, e: f32) -> NodeVisual {
        NodeVisual {
            content_offset_pct: 100.0 * (1.0 - e),
            ..node.visual().clone()
        }
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(Duration::from_millis(800))
    }
}

impl AnimationRoutine for Reveal {
    fn name(&self) -> &'static str {
        "reveal"
    }

    fn initial(&self, node: &Node) -> NodeVisual {
        Self::at(node, 0.0)
    }

    fn prepare(&self, node: &mut Node) -> Result<Prepared, RoutineError> {
        if node.mark_revealed() {
            Ok(Prepared::Ready)
        } else {
            Ok(Prepared::AlreadyApplied)
        }
    }

    fn sample(
        &self,
        node: &Node,
        elapsed: Duration,
        driver: &dyn MotionDriver,
    ) -> Result<Sample, RoutineError> {
        let t = progress(elapsed, node.params().duration.unwrap_or(self.duration));
        let e = if t >= 1.0 { 1.0 } else { driver.ease(self.easing, t) };
        Ok(Sample {
            visual: Self::at(node, e),
            complete: t >= 1.0,
        })
    }

    fn finish(&self, node: &mut Node) {
        let _ = node.mark_revealed();
        node.visual_mut().content_offset_pct = 0.0;
        node.visual_mut().opacity = 1.0;
    }

    fn duration(&self, node: &Node) -> Duration {
        node.params().duration.unwrap_or(self.duration)
    }
}
