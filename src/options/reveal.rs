use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Visibility ratios at which an observed node counts as "entered".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Visibility", inline)]
#[serde(default)]
pub struct VisibilityOptions {
    /// Default thresholds for nodes that do not declare their own.
    #[schemars(title = "Thresholds")]
    pub thresholds: Vec<f32>,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            thresholds: vec![0.1],
        }
    }
}

/// Fade-in: opacity 0→1 while sliding up into place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Fade", inline)]
#[serde(default)]
pub struct FadeOptions {
    /// Transition length in milliseconds.
    #[schemars(title = "Duration (ms)", range(min = 0, max = 3000))]
    pub duration_ms: u64,
    /// Starting vertical offset in pixels.
    #[schemars(title = "Offset (px)", range(min = 0.0, max = 200.0), extend("step" = 1.0))]
    pub offset_px: f32,
}

impl FadeOptions {
    /// Transition length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for FadeOptions {
    fn default() -> Self {
        Self {
            duration_ms: 600,
            offset_px: 30.0,
        }
    }
}

/// Staggered list reveal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Stagger", inline)]
#[serde(default)]
pub struct StaggerOptions {
    /// Delay between consecutive members starting, in milliseconds.
    #[schemars(title = "Delay (ms)", range(min = 0, max = 1000))]
    pub delay_ms: u64,
    /// Each member's own fade-in length, in milliseconds.
    #[schemars(title = "Item Duration (ms)", range(min = 0, max = 3000))]
    pub item_duration_ms: u64,
}

impl StaggerOptions {
    /// Delay between consecutive members.
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Per-member fade length.
    #[must_use]
    pub fn item_duration(&self) -> Duration {
        Duration::from_millis(self.item_duration_ms)
    }
}

impl Default for StaggerOptions {
    fn default() -> Self {
        Self {
            delay_ms: 100,
            item_duration_ms: 600,
        }
    }
}

/// Content-reveal slide (container fades, inner content slides up).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Reveal", inline)]
#[serde(default)]
pub struct RevealOptions {
    /// Slide length in milliseconds.
    #[schemars(title = "Duration (ms)", range(min = 0, max = 3000))]
    pub duration_ms: u64,
}

impl RevealOptions {
    /// Slide length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { duration_ms: 800 }
    }
}

/// Character-by-character title reveal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Title", inline)]
#[serde(default)]
pub struct TitleOptions {
    /// Delay added per character index, in milliseconds.
    #[schemars(title = "Char Delay (ms)", range(min = 0, max = 500))]
    pub char_delay_ms: u64,
    /// Each character's own fade/slide length, in milliseconds.
    #[schemars(title = "Char Duration (ms)", range(min = 0, max = 3000))]
    pub char_duration_ms: u64,
    /// Starting vertical offset of each character, in pixels.
    #[schemars(title = "Offset (px)", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub offset_px: f32,
}

impl TitleOptions {
    /// Delay per character index.
    #[must_use]
    pub fn char_delay(&self) -> Duration {
        Duration::from_millis(self.char_delay_ms)
    }

    /// Per-character transition length.
    #[must_use]
    pub fn char_duration(&self) -> Duration {
        Duration::from_millis(self.char_duration_ms)
    }
}

impl Default for TitleOptions {
    fn default() -> Self {
        Self {
            char_delay_ms: 30,
            char_duration_ms: 500,
            offset_px: 20.0,
        }
    }
}

/// Plain opacity fade for nodes with no more specific kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Default", inline)]
#[serde(default)]
pub struct DefaultKindOptions {
    /// Fade length in milliseconds.
    #[schemars(title = "Duration (ms)", range(min = 0, max = 3000))]
    pub duration_ms: u64,
}

impl DefaultKindOptions {
    /// Fade length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for DefaultKindOptions {
    fn default() -> Self {
        Self { duration_ms: 400 }
    }
}
