//! Rate-limited screen-reader announcements.

use std::collections::VecDeque;

use web_time::{Duration, Instant};

/// Lower bound on the spacing between two delivered messages.
pub const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Ordered queue of pending live-region messages, drained at most once per
/// interval so assistive technology is never flooded.
#[derive(Debug)]
pub struct AnnouncementQueue {
    pending: VecDeque<String>,
    interval: Duration,
    last_delivery: Option<Instant>,
}

impl AnnouncementQueue {
    /// Queue delivering at most one message per `interval`. Intervals
    /// shorter than [`MIN_INTERVAL`] are raised to it.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            pending: VecDeque::new(),
            interval: interval.max(MIN_INTERVAL),
            last_delivery: None,
        }
    }

    /// Enqueue a message. Blank messages are dropped.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        if message.trim().is_empty() {
            return;
        }
        self.pending.push_back(message);
    }

    /// Deliver the next message if the rate limit allows.
    pub fn drain(&mut self, now: Instant) -> Option<String> {
        if self
            .last_delivery
            .is_some_and(|last| now.saturating_duration_since(last) < self.interval)
        {
            return None;
        }
        let message = self.pending.pop_front()?;
        self.last_delivery = Some(now);
        Some(message)
    }

    /// Number of messages waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no messages are waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Effective delivery interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for AnnouncementQueue {
    fn default() -> Self {
        Self::new(MIN_INTERVAL)
    }
}
