//! Output visual state of a node.
//!
//! The engine never touches a real element: it writes [`NodeVisual`] values
//! that a host maps onto opacity, transform, clip and text content.

use glam::Vec2;
use web_time::Duration;

/// Placeholder written in place of a literal space when a title is split,
/// so the host's layout does not collapse inter-word spacing.
pub const SPACE_MARKER: char = '\u{00A0}';

/// One visual unit of a character-split title.
#[derive(Debug, Clone, PartialEq)]
pub struct CharUnit {
    /// The character shown ([`SPACE_MARKER`] for spaces).
    pub ch: char,
    /// Start delay relative to the routine start.
    pub delay: Duration,
    /// Current opacity.
    pub opacity: f32,
    /// Current vertical offset in pixels.
    pub offset_y: f32,
}

impl CharUnit {
    /// The character as it appears in the source text.
    #[must_use]
    pub fn source_char(&self) -> char {
        if self.ch == SPACE_MARKER {
            ' '
        } else {
            self.ch
        }
    }
}

/// Concatenate split units back into the original text.
#[must_use]
pub fn reconstruct_text(units: &[CharUnit]) -> String {
    units.iter().map(CharUnit::source_char).collect()
}

/// A transient expanding circle rooted at a press point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    /// Press point relative to the target's origin.
    pub center: Vec2,
    /// Current radius in pixels.
    pub radius: f32,
    /// Current opacity.
    pub opacity: f32,
}

/// Composite 2D transform written to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    /// Translation in pixels.
    pub translate: Vec2,
    /// Uniform scale.
    pub scale: f32,
}

impl Transform2D {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale: 1.0,
    };

    /// Whether this is (numerically) the identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.translate.length_squared() < 1e-8 && (self.scale - 1.0).abs() < 1e-6
    }
}

/// Everything the engine controls about one node's appearance.
///
/// Separate channels are kept per producer (routine offset, magnetic field,
/// parallax, feedback scale) and only combined in [`transform`](Self::transform).
#[derive(Debug, Clone, PartialEq)]
pub struct NodeVisual {
    /// Container opacity.
    pub opacity: f32,
    /// Offset written by reveal routines.
    pub translate: Vec2,
    /// Scale written by hover / press feedback.
    pub scale: f32,
    /// Inner-surface vertical offset as a percentage of its height (reveal).
    pub content_offset_pct: f32,
    /// Displacement written by the pointer field.
    pub magnetic: Vec2,
    /// Vertical parallax offset written by the scroll relay.
    pub parallax_y: f32,
    /// Scroll progress (0..1) for progress-bar nodes.
    pub progress: Option<f32>,
    /// Hover glow intensity (0..1).
    pub glow: f32,
    /// Replacement text content, when a routine owns the text.
    pub text: Option<String>,
    /// Per-character units once a title has been split.
    pub chars: Vec<CharUnit>,
    /// Active press ripple, if any.
    pub ripple: Option<Ripple>,
}

impl Default for NodeVisual {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate: Vec2::ZERO,
            scale: 1.0,
            content_offset_pct: 0.0,
            magnetic: Vec2::ZERO,
            parallax_y: 0.0,
            progress: None,
            glow: 0.0,
            text: None,
            chars: Vec::new(),
            ripple: None,
        }
    }
}

impl NodeVisual {
    /// Combined transform of every translation channel and the scale.
    #[must_use]
    pub fn transform(&self) -> Transform2D {
        Transform2D {
            translate: self.translate
                + self.magnetic
                + Vec2::new(0.0, self.parallax_y),
            scale: self.scale,
        }
    }

    /// Whether the title text has been split into units.
    #[must_use]
    pub fn is_split(&self) -> bool {
        !self.chars.is_empty()
    }

    /// Text a reader would see: split units, routine text, or `None` when
    /// the host's own text is untouched.
    #[must_use]
    pub fn visible_text(&self) -> Option<String> {
        if self.is_split() {
            return Some(reconstruct_text(&self.chars));
        }
        self.text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fully_visible_identity() {
        let v = NodeVisual::default();
        assert_eq!(v.opacity, 1.0);
        assert!(v.transform().is_identity());
        assert_eq!(v.visible_text(), None);
    }

    #[test]
    fn transform_sums_channels() {
        let v = NodeVisual {
            translate: Vec2::new(0.0, 10.0),
            magnetic: Vec2::new(3.0, -2.0),
            parallax_y: -5.0,
            scale: 1.05,
            ..NodeVisual::default()
        };
        let t = v.transform();
        assert_eq!(t.translate, Vec2::new(3.0, 3.0));
        assert_eq!(t.scale, 1.05);
    }

    #[test]
    fn space_marker_maps_back_to_space() {
        let units: Vec<CharUnit> = ['a', SPACE_MARKER, 'b']
            .into_iter()
            .map(|ch| CharUnit {
                ch,
                delay: Duration::ZERO,
                opacity: 1.0,
                offset_y: 0.0,
            })
            .collect();
        assert_eq!(reconstruct_text(&units), "a b");
    }
}
