use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Magnetic pointer field parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pointer", inline)]
#[serde(default)]
pub struct PointerOptions {
    /// Radius (px) within which a magnetic node follows the pointer.
    #[schemars(title = "Radius", range(min = 1.0, max = 1000.0), extend("step" = 1.0))]
    pub radius: f32,
    /// Fraction of the pointer offset applied at full force.
    #[schemars(title = "Strength", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub strength: f32,
    /// Radius (px) within which other magnetic nodes are distorted.
    #[schemars(title = "Neighbor Radius", range(min = 1.0, max = 2000.0), extend("step" = 1.0))]
    pub neighbor_radius: f32,
    /// Maximum neighbor displacement (px) at full source and neighbor force.
    #[schemars(title = "Neighbor Strength", range(min = 0.0, max = 50.0), extend("step" = 0.5))]
    pub neighbor_strength_px: f32,
    /// Spring release duration after pointer-leave, in ms.
    #[schemars(title = "Release (ms)", range(min = 0, max = 3000))]
    pub release_ms: u64,
    /// Neighbor reset duration, in ms.
    #[schemars(title = "Neighbor Release (ms)", range(min = 0, max = 3000))]
    pub neighbor_release_ms: u64,
    /// Overshoot of the release curve.
    #[schemars(skip)]
    pub overshoot: f32,
}

impl PointerOptions {
    /// Spring release duration.
    #[must_use]
    pub fn release(&self) -> Duration {
        Duration::from_millis(self.release_ms)
    }

    /// Neighbor reset duration.
    #[must_use]
    pub fn neighbor_release(&self) -> Duration {
        Duration::from_millis(self.neighbor_release_ms)
    }
}

impl Default for PointerOptions {
    fn default() -> Self {
        Self {
            radius: 100.0,
            strength: 0.3,
            neighbor_radius: 200.0,
            neighbor_strength_px: 8.0,
            release_ms: 600,
            neighbor_release_ms: 300,
            overshoot: 1.701_58,
        }
    }
}
