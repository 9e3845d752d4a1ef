//! A single scheduled routine run.

use web_time::{Duration, Instant};

use super::routines::{Cadence, SharedRoutine};
use crate::node::{GroupId, NodeId};

/// Executes one routine on one node from start to completion.
///
/// The runner holds:
/// - The routine and the cadence it asked for
/// - When sampling begins (dispatch time plus the routine's start delay)
/// - For interval cadence, when the next tick is due
pub struct ActiveRun {
    node: NodeId,
    routine: SharedRoutine,
    /// First instant at which the routine is sampled.
    start: Instant,
    cadence: Cadence,
    next_tick: Instant,
    group: Option<GroupId>,
}

impl ActiveRun {
    /// Schedule `routine` for `node`, starting `delay` after `now`.
    ///
    /// A delay that would overflow the clock starts the run at `now`.
    #[must_use]
    pub fn new(
        node: NodeId,
        routine: SharedRoutine,
        now: Instant,
        delay: Duration,
        cadence: Cadence,
        group: Option<GroupId>,
    ) -> Self {
        let start = now.checked_add(delay).unwrap_or_else(|| {
            log::debug!("start delay {delay:?} for {node} overflows, starting now");
            now
        });
        Self {
            node,
            routine,
            start,
            cadence,
            next_tick: start,
            group,
        }
    }

    /// Node this run animates.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Routine being run.
    #[must_use]
    pub fn routine(&self) -> &SharedRoutine {
        &self.routine
    }

    /// When sampling begins.
    #[must_use]
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Re-scheduling cadence.
    #[must_use]
    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    /// Stagger group this run belongs to, if any.
    #[must_use]
    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    /// Time since sampling began, or `None` while still delayed.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        now.checked_duration_since(self.start)
    }

    /// Whether the run should be sampled at `now` by a pass of `cadence`.
    #[must_use]
    pub fn due(&self, now: Instant, pass: PassKind) -> bool {
        match (self.cadence, pass) {
            (Cadence::Frame, PassKind::Frame) => self.elapsed(now).is_some(),
            (Cadence::Interval(_), PassKind::Timer) => now >= self.next_tick,
            _ => false,
        }
    }

    /// Advance the next interval tick past `now`.
    pub fn schedule_next(&mut self, now: Instant) {
        let Cadence::Interval(period) = self.cadence else {
            return;
        };
        if period.is_zero() {
            self.next_tick = now;
            return;
        }
        if self.next_tick > now {
            return;
        }
        let behind = now.saturating_duration_since(self.next_tick);
        let steps = behind.as_nanos() / period.as_nanos() + 1;
        self.next_tick = steps
            .checked_mul(period.as_nanos())
            .and_then(|nanos| u64::try_from(nanos).ok())
            .map(Duration::from_nanos)
            .and_then(|skip| self.next_tick.checked_add(skip))
            .or_else(|| now.checked_add(period))
            .unwrap_or(now);
    }

    /// Next interval tick (equals `start` for frame cadence).
    #[must_use]
    pub fn next_tick(&self) -> Instant {
        self.next_tick
    }
}

/// Which scheduling loop is sampling runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    /// The rendering-frame callback.
    Frame,
    /// The fixed real-time tick.
    Timer,
}

impl std::fmt::Debug for ActiveRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveRun")
            .field("node", &self.node)
            .field("routine", &self.routine.name())
            .field("cadence", &self.cadence)
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}
