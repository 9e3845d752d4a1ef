//! Interaction feedback: press ripples, press morph and hover glow.
//!
//! All three are driven by discrete input events and sampled per frame.
//! Hover and press use retargetable tweens, so a leave that arrives before
//! the enter finished starts from the current interpolated value.

mod ripple;

use glam::Vec2;
use rustc_hash::FxHashMap;
use web_time::{Duration, Instant};

pub use ripple::ActiveRipple;

use crate::node::{Bounds, NodeId, Ripple};
use crate::options::FeedbackOptions;
use crate::util::easing::EasingFunction;
use crate::util::tween::Tween;

/// Feedback channels written to a node each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackVisual {
    /// Combined hover and press scale.
    pub scale: f32,
    /// Hover glow intensity (0..1).
    pub glow: f32,
    /// Active ripple.
    pub ripple: Option<Ripple>,
}

#[derive(Debug, Clone)]
struct TargetFeedback {
    ripple: Option<ActiveRipple>,
    /// 0 = resting, 1 = fully hovered.
    hover: Tween<f32>,
    /// Press scale multiplier.
    press: Tween<f32>,
}

impl TargetFeedback {
    fn new(now: Instant) -> Self {
        Self {
            ripple: None,
            hover: Tween::settled(0.0, now),
            press: Tween::settled(1.0, now),
        }
    }

    fn is_active(&self, now: Instant) -> bool {
        self.ripple.is_some()
            || !self.hover.is_complete(now)
            || !self.press.is_complete(now)
    }
}

/// Per-target interaction feedback state.
#[derive(Debug)]
pub struct Feedback {
    options: FeedbackOptions,
    targets: FxHashMap<NodeId, TargetFeedback>,
}

impl Feedback {
    /// Create with no active targets.
    #[must_use]
    pub fn new(options: FeedbackOptions) -> Self {
        Self {
            options,
            targets: FxHashMap::default(),
        }
    }

    fn target(&mut self, id: NodeId, now: Instant) -> &mut TargetFeedback {
        self.targets
            .entry(id)
            .or_insert_with(|| TargetFeedback::new(now))
    }

    /// Press-start at `point` relative to the target's origin.
    ///
    /// Replaces any ripple already running on the same target. Under
    /// reduced motion no ripple is spawned and the press scale is applied
    /// without a transition.
    pub fn press(
        &mut self,
        id: NodeId,
        point: Vec2,
        bounds: Option<Bounds>,
        now: Instant,
        reduced: bool,
    ) {
        let ripple_duration = self.options.ripple();
        let (press_scale, morph) = (self.options.press_scale, self.morph_duration());
        let target = self.target(id, now);
        if reduced {
            target.ripple = None;
            target.press.snap(press_scale, now);
            return;
        }
        target.ripple = Some(ActiveRipple::new(point, bounds, now, ripple_duration));
        target
            .press
            .retarget(press_scale, now, morph, EasingFunction::CubicOut);
    }

    /// Press-end: ease the press scale back.
    pub fn release(&mut self, id: NodeId, now: Instant, reduced: bool) {
        let morph = self.morph_duration();
        let target = self.target(id, now);
        if reduced {
            target.press.snap(1.0, now);
        } else {
            target.press.retarget(1.0, now, morph, EasingFunction::SPRING);
        }
    }

    /// Hover enter (`entered = true`) or leave.
    pub fn hover(&mut self, id: NodeId, entered: bool, now: Instant, reduced: bool) {
        let duration = self.options.hover();
        let goal = if entered { 1.0 } else { 0.0 };
        let target = self.target(id, now);
        if reduced {
            target.hover.snap(goal, now);
        } else {
            target
                .hover
                .retarget(goal, now, duration, EasingFunction::CubicOut);
        }
    }

    /// Sample every target at `now`, dropping expired ripples.
    pub fn update(&mut self, now: Instant) -> Vec<(NodeId, FeedbackVisual)> {
        let hover_scale = self.options.hover_scale;
        let mut out: Vec<(NodeId, FeedbackVisual)> = self
            .targets
            .iter_mut()
            .map(|(id, target)| {
                let ripple = target.ripple.and_then(|r| r.sample(now));
                if ripple.is_none() {
                    target.ripple = None;
                }
                let hover = target.hover.value(now);
                let visual = FeedbackVisual {
                    scale: target.press.value(now) * (1.0 + (hover_scale - 1.0) * hover),
                    glow: hover,
                    ripple,
                };
                (*id, visual)
            })
            .collect();
        out.sort_unstable_by_key(|(id, _)| *id);
        out
    }

    /// Whether any target is still transitioning.
    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        self.targets.values().any(|t| t.is_active(now))
    }

    /// Drop ripples and settle every tween at its target (reduced motion
    /// switched on).
    pub fn settle(&mut self, now: Instant) {
        for target in self.targets.values_mut() {
            target.ripple = None;
            let hover = target.hover.target();
            let press = target.press.target();
            target.hover.snap(hover, now);
            target.press.snap(press, now);
        }
    }

    /// Forget a target.
    pub fn remove(&mut self, id: NodeId) -> bool {
        self.targets.remove(&id).is_some()
    }

    fn morph_duration(&self) -> Duration {
        self.options.hover() / 2
    }
}
