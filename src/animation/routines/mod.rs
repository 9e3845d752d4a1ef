//! Animation routines define how each kind of node is animated.
//!
//! Routines are decoupled from kinds: the same routine can back several
//! kinds (a plain [`Fade`] backs both `fade-in` and unclassified nodes), and
//! a site can swap the routine used for any kind through
//! [`RoutinePreferences`](super::RoutinePreferences).

mod counter;
mod fade;
mod reveal;
mod stagger;
mod title_chars;
mod traits;
mod typewriter;

pub use counter::Counter;
pub use fade::Fade;
pub use reveal::Reveal;
pub use stagger::Stagger;
pub use title_chars::TitleChars;
pub(crate) use traits::progress;
pub use traits::{
    shared, AnimationRoutine, Cadence, Prepared, Sample, SharedRoutine,
};
pub use typewriter::Typewriter;
