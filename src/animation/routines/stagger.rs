//! Staggered list reveal: each group member fades in after a delay based on
//! its sequence index.

use web_time::Duration;

use super::fade::Fade;
use super::traits::{AnimationRoutine, Sample};
use crate::animation::driver::MotionDriver;
use crate::error::RoutineError;
use crate::node::{Node, NodeVisual};

/// Staggered fade-in where members animate with index-based delays.
///
/// # Timing
///
/// Each member starts its own fade after a delay based on its index:
/// - Member 0: starts at t=0
/// - Member 1: starts at t=delay_per_item
/// - Member N: starts at t=N*delay_per_item
///
/// Each member's individual fade lasts `item.duration`.
#[derive(Debug, Clone)]
pub struct Stagger {
    /// Fade run by each member.
    pub item: Fade,
    /// Delay between consecutive members starting.
    pub delay_per_item: Duration,
}

impl Stagger {
    /// Create a new stagger.
    #[must_use]
    pub fn new(item: Fade, delay_per_item: Duration) -> Self {
        Self {
            item,
            delay_per_item,
        }
    }

    /// Start offset of the member at `index`.
    #[must_use]
    pub fn member_delay(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_per_item.saturating_mul(index)
    }

    /// Total duration for a group of `members` members.
    #[must_use]
    pub fn total_duration_for(&self, members: usize) -> Duration {
        if members == 0 {
            return Duration::ZERO;
        }
        self.member_delay(members - 1)
            .saturating_add(self.item.duration)
    }
}

impl Default for Stagger {
    fn default() -> Self {
        Self::new(Fade::default(), Duration::from_millis(100))
    }
}

impl AnimationRoutine for Stagger {
    fn name(&self) -> &'static str {
        "stagger"
    }

    fn start_delay(&self, node: &Node) -> Duration {
        // Ungrouped members behave like a plain fade
        node.group()
            .map_or(Duration::ZERO, |(_, index)| self.member_delay(index))
    }

    fn initial(&self, node: &Node) -> NodeVisual {
        self.item.initial(node)
    }

    fn sample(
        &self,
        node: &Node,
        elapsed: Duration,
        driver: &dyn MotionDriver,
    ) -> Result<Sample, RoutineError> {
        self.item.sample(node, elapsed, driver)
    }

    fn finish(&self, node: &mut Node) {
        self.item.finish(node);
    }

    fn duration(&self, node: &Node) -> Duration {
        self.item.duration_for(node)
    }
}
