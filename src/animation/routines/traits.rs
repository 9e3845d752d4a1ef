//! Core trait for per-kind animation routines.

use std::sync::Arc;

use web_time::Duration;

use crate::animation::driver::MotionDriver;
use crate::error::RoutineError;
use crate::node::{Node, NodeVisual};

/// How a running routine is re-scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cadence {
    /// Sampled once per rendering frame.
    #[default]
    Frame,
    /// Sampled on a fixed real-time tick, independent of render rate.
    Interval(Duration),
}

/// Result of a routine's structural preparation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prepared {
    /// The routine may start sampling.
    Ready,
    /// The routine's effect is already present on the node; running it
    /// again would corrupt it.
    AlreadyApplied,
}

/// One sampled frame of a routine.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Full visual state to write to the node.
    pub visual: NodeVisual,
    /// Whether the routine reached its completion criterion.
    pub complete: bool,
}

/// Defines how one animation kind drives a node.
///
/// Sampling is a pure function of the node and elapsed time; only
/// [`prepare`](Self::prepare) and [`finish`](Self::finish) mutate the node
/// directly. See [`Fade`](super::Fade), [`Counter`](super::Counter),
/// [`TitleChars`](super::TitleChars) for examples.
pub trait AnimationRoutine: Send + Sync {
    /// Name for debugging/logging.
    fn name(&self) -> &'static str {
        "unnamed"
    }

    /// How the dispatcher re-schedules this routine.
    fn cadence(&self, _node: &Node) -> Cadence {
        Cadence::Frame
    }

    /// Delay between dispatch and the first sample.
    fn start_delay(&self, _node: &Node) -> Duration {
        Duration::ZERO
    }

    /// Visual state a node rests in while pending.
    fn initial(&self, node: &Node) -> NodeVisual;

    /// Structural preparation at dispatch time. Routines that mutate
    /// content (split text, reveal surfaces) guard against doing it twice.
    fn prepare(&self, _node: &mut Node) -> Result<Prepared, RoutineError> {
        Ok(Prepared::Ready)
    }

    /// Visual state after `elapsed` since the routine started.
    fn sample(
        &self,
        node: &Node,
        elapsed: Duration,
        driver: &dyn MotionDriver,
    ) -> Result<Sample, RoutineError>;

    /// Write the end state directly, with no animation.
    ///
    /// Must always leave the node fully rendered, whatever state a failed
    /// or skipped run left it in.
    fn finish(&self, node: &mut Node);

    /// Nominal running time for this node (excluding start delay).
    fn duration(&self, node: &Node) -> Duration;
}

/// Type alias for shared routine references.
pub type SharedRoutine = Arc<dyn AnimationRoutine>;

/// Create a shared routine from any [`AnimationRoutine`] implementation.
#[must_use]
pub fn shared<R: AnimationRoutine + 'static>(routine: R) -> SharedRoutine {
    Arc::new(routine)
}

/// Raw progress of `elapsed` through `duration`, clamped to [0, 1].
pub(crate) fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}
