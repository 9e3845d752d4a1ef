//! Animation kinds and marker classification.

use std::fmt;

/// The animation family assigned to a node.
///
/// Resolved once at registration from the node's declared markers; see
/// [`AnimationKind::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationKind {
    /// Opacity and vertical offset fade-in.
    Fade,
    /// Member of a staggered list reveal.
    Stagger,
    /// Two-surface content slide.
    Reveal,
    /// Numeric counter tween.
    Counter,
    /// One character per fixed tick.
    Typewriter,
    /// Title split into per-character units.
    TitleChars,
    /// Plain fade for nodes with no more specific marker.
    #[default]
    Default,
}

impl AnimationKind {
    /// Kinds in resolution order: the first kind whose markers match wins.
    pub const PRECEDENCE: [AnimationKind; 6] = [
        AnimationKind::TitleChars,
        AnimationKind::Typewriter,
        AnimationKind::Counter,
        AnimationKind::Reveal,
        AnimationKind::Stagger,
        AnimationKind::Fade,
    ];

    /// All kinds, including [`Default`](Self::Default).
    pub const ALL: [AnimationKind; 7] = [
        AnimationKind::Fade,
        AnimationKind::Stagger,
        AnimationKind::Reveal,
        AnimationKind::Counter,
        AnimationKind::Typewriter,
        AnimationKind::TitleChars,
        AnimationKind::Default,
    ];

    /// Marker names that select this kind.
    #[must_use]
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            AnimationKind::TitleChars => {
                &["title-chars", "hero-title", "split-text"]
            }
            AnimationKind::Typewriter => &["typewriter"],
            AnimationKind::Counter => &["counter", "stat-number"],
            AnimationKind::Reveal => &["reveal-text", "reveal"],
            AnimationKind::Stagger => &["stagger-item"],
            AnimationKind::Fade => &["fade-in"],
            AnimationKind::Default => &[],
        }
    }

    /// Resolve the most specific kind for a set of declared markers.
    ///
    /// Matching is case-insensitive; unknown markers are ignored. Falls back
    /// to [`Default`](Self::Default) when nothing matches.
    #[must_use]
    pub fn classify<S: AsRef<str>>(markers: &[S]) -> Self {
        Self::PRECEDENCE
            .into_iter()
            .find(|kind| {
                markers.iter().any(|m| {
                    let m = m.as_ref().trim();
                    kind.markers().iter().any(|k| k.eq_ignore_ascii_case(m))
                })
            })
            .unwrap_or_default()
    }

    /// Short name for logging.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AnimationKind::Fade => "fade",
            AnimationKind::Stagger => "stagger",
            AnimationKind::Reveal => "reveal",
            AnimationKind::Counter => "counter",
            AnimationKind::Typewriter => "typewriter",
            AnimationKind::TitleChars => "title-chars",
            AnimationKind::Default => "default",
        }
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_marker() {
        assert_eq!(AnimationKind::classify(&["fade-in"]), AnimationKind::Fade);
        assert_eq!(
            AnimationKind::classify(&["stat-number"]),
            AnimationKind::Counter
        );
    }

    #[test]
    fn most_specific_kind_wins() {
        // A staggered counter is still a counter
        assert_eq!(
            AnimationKind::classify(&["stagger-item", "counter"]),
            AnimationKind::Counter
        );
        assert_eq!(
            AnimationKind::classify(&["fade-in", "hero-title"]),
            AnimationKind::TitleChars
        );
        assert_eq!(
            AnimationKind::classify(&["reveal", "fade-in"]),
            AnimationKind::Reveal
        );
    }

    #[test]
    fn unknown_markers_fall_back_to_default() {
        assert_eq!(
            AnimationKind::classify(&["card", "btn-primary"]),
            AnimationKind::Default
        );
        let none: [&str; 0] = [];
        assert_eq!(AnimationKind::classify(&none), AnimationKind::Default);
    }

    #[test]
    fn matching_ignores_case_and_whitespace() {
        assert_eq!(
            AnimationKind::classify(&[" Typewriter "]),
            AnimationKind::Typewriter
        );
    }
}
