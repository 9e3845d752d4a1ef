use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Numeric counter tween.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Counter", inline)]
#[serde(default)]
pub struct CounterOptions {
    /// Default tween length when a node does not declare one, in ms.
    #[schemars(title = "Duration (ms)", range(min = 0, max = 10000))]
    pub duration_ms: u64,
    /// Symbol prefixed to currency-formatted values.
    #[schemars(title = "Currency Symbol")]
    pub currency_symbol: String,
    /// Announce the final value to screen readers when a counter finishes.
    #[schemars(title = "Announce")]
    pub announce: bool,
}

impl CounterOptions {
    /// Default tween length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            currency_symbol: "$".to_owned(),
            announce: true,
        }
    }
}

/// Type-writer text reveal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Typewriter", inline)]
#[serde(default)]
pub struct TypewriterOptions {
    /// Default interval between characters, in ms.
    #[schemars(title = "Speed (ms/char)", range(min = 1, max = 1000))]
    pub speed_ms: u64,
}

impl TypewriterOptions {
    /// Default tick interval.
    #[must_use]
    pub fn speed(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        Self { speed_ms: 50 }
    }
}
