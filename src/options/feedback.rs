use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Press, ripple and hover feedback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Feedback", inline)]
#[serde(default)]
pub struct FeedbackOptions {
    /// Ripple lifetime in ms.
    #[schemars(title = "Ripple (ms)", range(min = 0, max = 3000))]
    pub ripple_ms: u64,
    /// Hover enter/leave transition length in ms.
    #[schemars(title = "Hover (ms)", range(min = 0, max = 3000))]
    pub hover_ms: u64,
    /// Scale at full hover.
    #[schemars(title = "Hover Scale", range(min = 1.0, max = 1.5), extend("step" = 0.01))]
    pub hover_scale: f32,
    /// Scale while pressed.
    #[schemars(title = "Press Scale", range(min = 0.5, max = 1.0), extend("step" = 0.01))]
    pub press_scale: f32,
}

impl FeedbackOptions {
    /// Ripple lifetime.
    #[must_use]
    pub fn ripple(&self) -> Duration {
        Duration::from_millis(self.ripple_ms)
    }

    /// Hover transition length.
    #[must_use]
    pub fn hover(&self) -> Duration {
        Duration::from_millis(self.hover_ms)
    }
}

impl Default for FeedbackOptions {
    fn default() -> Self {
        Self {
            ripple_ms: 600,
            hover_ms: 300,
            hover_scale: 1.05,
            press_scale: 0.95,
        }
    }
}

/// Screen-reader announcement pacing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Announcements", inline)]
#[serde(default)]
pub struct AnnounceOptions {
    /// Minimum spacing between delivered messages, in ms.
    #[schemars(title = "Min Interval (ms)", range(min = 1000, max = 10000))]
    pub min_interval_ms: u64,
}

impl AnnounceOptions {
    /// Minimum spacing between delivered messages.
    #[must_use]
    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }
}

impl Default for AnnounceOptions {
    fn default() -> Self {
        Self {
            min_interval_ms: 1000,
        }
    }
}
