//! Type-writer reveal: one character per fixed tick.

use web_time::Duration;

use super::traits::{AnimationRoutine, Cadence, Prepared, Sample};
use crate::animation::driver::MotionDriver;
use crate::error::RoutineError;
use crate::node::{Node, NodeVisual};

/// Emits the node's text one character per `speed` interval.
///
/// The emitted prefix is derived from elapsed time rather than a tick count,
/// so late or coalesced ticks catch up instead of dropping characters.
#[derive(Debug, Clone)]
pub struct Typewriter {
    /// Default interval between characters.
    pub speed: Duration,
}

impl Typewriter {
    /// Typewriter with the given default interval.
    #[must_use]
    pub fn new(speed: Duration) -> Self {
        Self { speed }
    }

    fn speed_for(&self, node: &Node) -> Duration {
        node.params().speed.unwrap_or(self.speed)
    }

    /// Number of characters visible after `elapsed`.
    #[must_use]
    pub fn emitted(&self, node: &Node, elapsed: Duration) -> usize {
        let total = node.source_text().chars().count();
        let speed = self.speed_for(node);
        if speed.is_zero() {
            return total;
        }
        let ticks = elapsed.as_nanos() / speed.as_nanos();
        usize::try_from(ticks).map_or(total, |t| t.min(total))
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(Duration::from_millis(50))
    }
}

impl AnimationRoutine for Typewriter {
    fn name(&self) -> &'static str {
        "typewriter"
    }

    fn cadence(&self, node: &Node) -> Cadence {
        Cadence::Interval(self.speed_for(node))
    }

    fn initial(&self, node: &Node) -> NodeVisual {
        NodeVisual {
            text: Some(String::new()),
            ..node.visual().clone()
        }
    }

    fn prepare(&self, node: &mut Node) -> Result<Prepared, RoutineError> {
        if self.speed_for(node).is_zero() {
            return Err(RoutineError::InvalidParameter {
                name: "speed",
                reason: "tick interval must be non-zero".to_owned(),
            });
        }
        Ok(Prepared::Ready)
    }

    fn sample(
        &self,
        node: &Node,
        elapsed: Duration,
        _driver: &dyn MotionDriver,
    ) -> Result<Sample, RoutineError> {
        let source = node.source_text();
        let total = source.chars().count();
        let count = self.emitted(node, elapsed);
        let text: String = source.chars().take(count).collect();
        Ok(Sample {
            visual: NodeVisual {
                text: Some(text),
                ..node.visual().clone()
            },
            complete: count >= total,
        })
    }

    fn finish(&self, node: &mut Node) {
        let text = node.source_text().to_owned();
        node.visual_mut().text = Some(text);
        node.visual_mut().opacity = 1.0;
    }

    fn duration(&self, node: &Node) -> Duration {
        let total = node.source_text().chars().count();
        self.speed_for(node)
            .saturating_mul(u32::try_from(total).unwrap_or(u32::MAX))
    }
}
