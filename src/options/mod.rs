//! Centralized motion options with TOML preset support.
//!
//! All tweakable timing and strength settings (reveal routines, counters,
//! typewriter, pointer field, scroll smoothing, feedback, announcements) are
//! consolidated here. Options serialize to/from TOML so a site can ship a
//! preset alongside its stylesheet.

mod feedback;
mod pointer;
mod reveal;
mod scroll;
mod text;

use std::path::Path;

pub use feedback::{AnnounceOptions, FeedbackOptions};
pub use pointer::PointerOptions;
pub use reveal::{
    DefaultKindOptions, FadeOptions, RevealOptions, StaggerOptions,
    TitleOptions, VisibilityOptions,
};
use schemars::JsonSchema;
pub use scroll::ScrollOptions;
use serde::{Deserialize, Serialize};
pub use text::{CounterOptions, TypewriterOptions};

use crate::error::MotionError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[pointer]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct MotionOptions {
    /// Visibility thresholds.
    pub visibility: VisibilityOptions,
    /// Fade-in routine.
    pub fade: FadeOptions,
    /// Staggered list reveal.
    pub stagger: StaggerOptions,
    /// Content-reveal slide.
    pub reveal: RevealOptions,
    /// Numeric counter tween.
    pub counter: CounterOptions,
    /// Type-writer reveal.
    pub typewriter: TypewriterOptions,
    /// Character-split title reveal.
    pub title: TitleOptions,
    /// Fallback fade for unclassified nodes.
    pub default_kind: DefaultKindOptions,
    /// Magnetic pointer field.
    pub pointer: PointerOptions,
    /// Scroll relay and smoothing.
    pub scroll: ScrollOptions,
    /// Press, ripple and hover feedback.
    pub feedback: FeedbackOptions,
    /// Screen-reader announcement pacing.
    #[schemars(skip)]
    pub announce: AnnounceOptions,
}

impl MotionOptions {
    /// Generate JSON Schema describing the tunable options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(MotionOptions)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// Values that parse but cannot drive the engine (see
    /// [`MotionOptions::validate`]) are rejected.
    pub fn from_toml(content: &str) -> Result<Self, MotionError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| MotionError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), MotionError> {
        self.scroll.validate()
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, MotionError> {
        let content = std::fs::read_to_string(path).map_err(MotionError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), MotionError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MotionError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MotionError::Io)?;
        }
        std::fs::write(path, content).map_err(MotionError::Io)
    }
}
