//! Scroll position relay.
//!
//! Raw scroll events only record the newest offset. Once per rendering
//! frame [`ScrollRelay::resolve`] turns it into the authoritative
//! [`ScrollFrame`], optionally through a smoothing layer, and
//! [`ScrollRelay::publish`] hands that frame to subscribers. Subscribers are
//! never called from [`ScrollRelay::on_raw_scroll`].

use web_time::Instant;

use crate::options::ScrollOptions;

/// The resolved scroll state for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    /// Authoritative offset in pixels.
    pub offset: f32,
    /// Offset change per second since the previous frame.
    pub velocity: f32,
    /// Frame timestamp.
    pub timestamp: Instant,
}

/// Handle returned by [`ScrollRelay::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&ScrollFrame)>;

/// Page dimensions needed for progress computation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Total scrollable content height.
    pub content_height: f32,
    /// Visible viewport height.
    pub viewport_height: f32,
}

/// Single writer of the page's scroll offset.
pub struct ScrollRelay {
    options: ScrollOptions,
    raw: f32,
    raw_pending: bool,
    raw_events: u64,
    current: f32,
    last: Option<ScrollFrame>,
    metrics: ScrollMetrics,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl ScrollRelay {
    /// Relay starting at offset 0.
    ///
    /// Smoothing settings that could never settle are replaced, see
    /// [`ScrollOptions::sanitized`].
    #[must_use]
    pub fn new(options: ScrollOptions) -> Self {
        if options.validate().is_err() {
            log::warn!(
                "scroll smoothing lerp {} epsilon {} replaced",
                options.lerp,
                options.epsilon_px
            );
        }
        Self {
            options: options.sanitized(),
            raw: 0.0,
            raw_pending: false,
            raw_events: 0,
            current: 0.0,
            last: None,
            metrics: ScrollMetrics::default(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Record a raw scroll position from the host. Never notifies.
    pub fn on_raw_scroll(&mut self, offset: f32) {
        if !offset.is_finite() {
            log::debug!("ignoring non-finite scroll offset");
            return;
        }
        self.raw = offset.max(0.0);
        self.raw_pending = true;
        self.raw_events += 1;
    }

    /// Update page dimensions.
    pub fn set_metrics(&mut self, metrics: ScrollMetrics) {
        self.metrics = metrics;
    }

    /// Current page dimensions.
    #[must_use]
    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    /// Resolve the authoritative offset for the frame at `now`.
    ///
    /// Returns `None` when nothing changed or when this frame has already
    /// been resolved. The smoothing layer is bypassed under reduced motion
    /// and snaps to the raw offset once within `epsilon_px` or once a step
    /// no longer moves the offset, so the resolved offset always converges.
    pub fn resolve(&mut self, now: Instant, reduced: bool) -> Option<ScrollFrame> {
        if self.last.is_some_and(|f| f.timestamp == now) {
            return None;
        }
        if !self.raw_pending && self.current == self.raw {
            return None;
        }
        self.raw_pending = false;

        let previous = self.current;
        self.current = if self.options.smooth && !reduced {
            let next = previous + (self.raw - previous) * self.options.lerp;
            if next == previous || (self.raw - next).abs() <= self.options.epsilon_px {
                self.raw
            } else {
                next
            }
        } else {
            self.raw
        };

        let velocity = self
            .last
            .map(|f| now.saturating_duration_since(f.timestamp).as_secs_f32())
            .filter(|dt| *dt > 0.0)
            .map_or(0.0, |dt| (self.current - previous) / dt);
        let frame = ScrollFrame {
            offset: self.current,
            velocity,
            timestamp: now,
        };
        self.last = Some(frame);
        Some(frame)
    }

    /// Deliver a resolved frame to every subscriber, in subscription order.
    pub fn publish(&mut self, frame: &ScrollFrame) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(frame);
        }
    }

    /// Register a per-frame scroll consumer.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&ScrollFrame) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a consumer. Returns whether it was subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Authoritative offset as of the last resolved frame.
    #[must_use]
    pub fn current_offset(&self) -> f32 {
        self.current
    }

    /// Newest raw offset reported by the host.
    #[must_use]
    pub fn raw_offset(&self) -> f32 {
        self.raw
    }

    /// Last resolved frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<ScrollFrame> {
        self.last
    }

    /// Number of raw events received.
    #[must_use]
    pub fn raw_events(&self) -> u64 {
        self.raw_events
    }

    /// Whether the smoothing layer has not yet reached the raw offset.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.raw_pending || self.current != self.raw
    }

    /// Page progress in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f32 {
        let range = self.metrics.content_height - self.metrics.viewport_height;
        if range <= 0.0 {
            return 0.0;
        }
        (self.current / range).clamp(0.0, 1.0)
    }

    /// Parallax translation for a layer moving at `speed`.
    #[must_use]
    pub fn parallax(&self, speed: f32) -> f32 {
        -self.current * speed
    }
}

impl std::fmt::Debug for ScrollRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollRelay")
            .field("raw", &self.raw)
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
