//! Retargetable value tweens.
//!
//! A [`Tween`] interpolates between two values of any [`Lerp`] type over a
//! fixed duration. Retargeting mid-flight restarts from the *current*
//! interpolated value, so an interrupted enter/leave pair never jumps.

use glam::Vec2;
use web_time::{Duration, Instant};

use super::easing::EasingFunction;

/// Linear interpolation between two values of the same type.
pub trait Lerp: Copy {
    /// Value at fraction `t` between `self` (t=0) and `other` (t=1).
    fn lerp_to(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

/// A time-based interpolation from `from` to `to`.
#[derive(Debug, Clone, Copy)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    start: Instant,
    duration: Duration,
    easing: EasingFunction,
}

impl<T: Lerp> Tween<T> {
    /// Start a tween at `now`.
    #[must_use]
    pub fn new(
        from: T,
        to: T,
        now: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from,
            to,
            start: now,
            duration,
            easing,
        }
    }

    /// A tween already resting at `value`.
    #[must_use]
    pub fn settled(value: T, now: Instant) -> Self {
        Self::new(value, value, now, Duration::ZERO, EasingFunction::Linear)
    }

    /// Normalized raw progress (0.0 to 1.0).
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated value at `now`. Exactly `to` once complete.
    #[must_use]
    pub fn value(&self, now: Instant) -> T {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from.lerp_to(self.to, self.easing.evaluate(t))
    }

    /// Whether the tween has reached its target.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Target value.
    #[must_use]
    pub fn target(&self) -> T {
        self.to
    }

    /// Redirect toward `to`, starting from the value observed at `now`.
    pub fn retarget(
        &mut self,
        to: T,
        now: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) {
        let current = self.value(now);
        *self = Self::new(current, to, now, duration, easing);
    }

    /// Jump straight to `value` with no interpolation.
    pub fn snap(&mut self, value: T, now: Instant) {
        *self = Self::settled(value, now);
    }
}
