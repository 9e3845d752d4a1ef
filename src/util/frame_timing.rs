//! Frame statistics: smoothed frame rate, last delta and frame count.

use web_time::{Duration, Instant};

/// Frame timing with a smoothed FPS estimate and the last frame delta.
///
/// Driven by the host's frame callback timestamps rather than the wall clock
/// so that replayed or simulated frames produce the same numbers.
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Option<Instant>,
    /// Duration between the two most recent frames
    last_delta: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Total frames observed
    frame_count: u64,
}

impl FrameTiming {
    /// Create a new frame timer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: None,
            last_delta: Duration::ZERO,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
            frame_count: 0,
        }
    }

    /// Record a frame boundary at `now`.
    pub fn end_frame(&mut self, now: Instant) {
        self.frame_count += 1;
        let Some(last) = self.last_frame.replace(now) else {
            return;
        };
        let elapsed = now.saturating_duration_since(last);
        self.last_delta = elapsed;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Time between the two most recent frames.
    #[must_use]
    pub fn last_delta(&self) -> Duration {
        self.last_delta
    }

    /// Number of frames observed so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}
