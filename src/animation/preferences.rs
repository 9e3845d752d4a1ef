//! Animation preferences map kinds to routines.
//!
//! Sites can customize which routine is used for each animation kind.

use super::routines::{
    shared, Counter, Fade, Reveal, SharedRoutine, Stagger, TitleChars,
    Typewriter,
};
use crate::node::AnimationKind;
use crate::options::MotionOptions;

/// Configurable mapping from animation kinds to routines.
#[derive(Clone)]
pub struct RoutinePreferences {
    /// Routine for `fade-in` nodes.
    pub fade: SharedRoutine,
    /// Routine for stagger group members.
    pub stagger: SharedRoutine,
    /// Routine for two-surface content reveals.
    pub reveal: SharedRoutine,
    /// Routine for numeric counters.
    pub counter: SharedRoutine,
    /// Routine for type-writer text.
    pub typewriter: SharedRoutine,
    /// Routine for character-split titles.
    pub title_chars: SharedRoutine,
    /// Routine for unclassified nodes.
    pub default: SharedRoutine,
}

impl RoutinePreferences {
    /// Routines configured from `options`.
    #[must_use]
    pub fn from_options(options: &MotionOptions) -> Self {
        let item = Fade::new(
            options.stagger.item_duration(),
            options.fade.offset_px,
        );
        Self {
            fade: shared(Fade::new(
                options.fade.duration(),
                options.fade.offset_px,
            )),
            stagger: shared(Stagger::new(item, options.stagger.delay())),
            reveal: shared(Reveal::new(options.reveal.duration())),
            counter: shared(Counter::new(
                options.counter.duration(),
                options.counter.currency_symbol.clone(),
            )),
            typewriter: shared(Typewriter::new(options.typewriter.speed())),
            title_chars: shared(TitleChars::new(
                options.title.char_delay(),
                options.title.char_duration(),
                options.title.offset_px,
            )),
            default: shared(Fade::plain(options.default_kind.duration())),
        }
    }

    /// Routine for a given kind.
    #[must_use]
    pub fn get(&self, kind: AnimationKind) -> &SharedRoutine {
        match kind {
            AnimationKind::Fade => &self.fade,
            AnimationKind::Stagger => &self.stagger,
            AnimationKind::Reveal => &self.reveal,
            AnimationKind::Counter => &self.counter,
            AnimationKind::Typewriter => &self.typewriter,
            AnimationKind::TitleChars => &self.title_chars,
            AnimationKind::Default => &self.default,
        }
    }

    /// Set the routine for a given kind.
    pub fn set(&mut self, kind: AnimationKind, routine: SharedRoutine) {
        match kind {
            AnimationKind::Fade => self.fade = routine,
            AnimationKind::Stagger => self.stagger = routine,
            AnimationKind::Reveal => self.reveal = routine,
            AnimationKind::Counter => self.counter = routine,
            AnimationKind::Typewriter => self.typewriter = routine,
            AnimationKind::TitleChars => self.title_chars = routine,
            AnimationKind::Default => self.default = routine,
        }
    }
}

impl Default for RoutinePreferences {
    fn default() -> Self {
        Self::from_options(&MotionOptions::default())
    }
}

impl std::fmt::Debug for RoutinePreferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutinePreferences")
            .field("fade", &self.fade.name())
            .field("stagger", &self.stagger.name())
            .field("reveal", &self.reveal.name())
            .field("counter", &self.counter.name())
            .field("typewriter", &self.typewriter.name())
            .field("title_chars", &self.title_chars.name())
            .field("default", &self.default.name())
            .finish()
    }
}
