//! Character-split title reveal.

use web_time::Duration;

use super::traits::{progress, AnimationRoutine, Prepared, Sample};
use crate::animation::driver::MotionDriver;
use crate::error::RoutineError;
use crate::node::{CharUnit, Node, NodeVisual, SPACE_MARKER};
use crate::util::easing::EasingFunction;

/// Splits a title into one unit per character, each fading and sliding in
/// after a delay proportional to its index.
///
/// The split itself is the idempotence guard: a node whose visual already
/// carries units is never split again.
#[derive(Debug, Clone)]
pub struct TitleChars {
    /// Delay added per character index.
    pub char_delay: Duration,
    /// Each character's transition length.
    pub char_duration: Duration,
    /// Starting vertical offset of each character.
    pub offset_px: f32,
    /// Easing curve per character.
    pub easing: EasingFunction,
}

impl TitleChars {
    /// Create a title reveal.
    #[must_use]
    pub fn new(char_delay: Duration, char_duration: Duration, offset_px: f32) -> Self {
        Self {
            char_delay,
            char_duration,
            offset_px,
            easing: EasingFunction::DEFAULT,
        }
    }

    fn delay_for(&self, node: &Node) -> Duration {
        node.params().char_delay.unwrap_or(self.char_delay)
    }

    /// Split `text` into hidden units. Spaces become [`SPACE_MARKER`].
    #[must_use]
    pub fn split(&self, node: &Node) -> Vec<CharUnit> {
        let delay = self.delay_for(node);
        node.source_text()
            .chars()
            .enumerate()
            .map(|(i, ch)| CharUnit {
                ch: if ch == ' ' { SPACE_MARKER } else { ch },
                delay: delay.saturating_mul(u32::try_from(i).unwrap_or(u32::MAX)),
                opacity: 0.0,
                offset_y: self.offset_px,
            })
            .collect()
    }
}

impl Default for TitleChars {
    fn default() -> Self {
        Self::new(Duration::from_millis(30), Duration::from_millis(500), 20.0)
    }
}

impl AnimationRoutine for TitleChars {
    fn name(&self) -> &'static str {
        "title-chars"
    }

    fn initial(&self, node: &Node) -> NodeVisual {
        NodeVisual {
            opacity: 0.0,
            ..node.visual().clone()
        }
    }

    fn prepare(&self, node: &mut Node) -> Result<Prepared, RoutineError> {
        if node.visual().is_split() {
            return Ok(Prepared::AlreadyApplied);
        }
        let units = self.split(node);
        let visual = node.visual_mut();
        visual.chars = units;
        visual.text = None;
        // Container shows; visibility is now carried by the units
        visual.opacity = 1.0;
        Ok(Prepared::Ready)
    }

    fn sample(
        &self,
        node: &Node,
        elapsed: Duration,
        driver: &dyn MotionDriver,
    ) -> Result<Sample, RoutineError> {
        if !node.visual().is_split() && !node.source_text().is_empty() {
            return Err(RoutineError::Interrupted(
                "title units were removed while animating".to_owned(),
            ));
        }
        let mut visual = node.visual().clone();
        let mut complete = true;
        for unit in &mut visual.chars {
            let local = elapsed.saturating_sub(unit.delay);
            let t = progress(local, self.char_duration);
            let e = if t >= 1.0 { 1.0 } else { driver.ease(self.easing, t) };
            complete &= t >= 1.0;
            unit.opacity = e;
            unit.offset_y = self.offset_px * (1.0 - e);
        }
        Ok(Sample { visual, complete })
    }

    fn finish(&self, node: &mut Node) {
        let visual = node.visual_mut();
        visual.opacity = 1.0;
        // Unsplit text is already a valid end state; never split here
        for unit in &mut visual.chars {
            unit.opacity = 1.0;
            unit.offset_y = 0.0;
        }
    }

    fn duration(&self, node: &Node) -> Duration {
        let count = node.source_text().chars().count();
        if count == 0 {
            return Duration::ZERO;
        }
        self.delay_for(node)
            .saturating_mul(u32::try_from(count - 1).unwrap_or(u32::MAX))
            .saturating_add(self.char_duration)
    }
}
