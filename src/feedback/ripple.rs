//! Press ripples.

use glam::Vec2;
use web_time::{Duration, Instant};

use crate::node::{Bounds, Ripple};
use crate::util::easing::EasingFunction;

/// Radius used when the target's size is unknown.
const FALLBACK_RADIUS: f32 = 100.0;

/// An expanding circle spawned by one press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveRipple {
    center: Vec2,
    max_radius: f32,
    start: Instant,
    duration: Duration,
}

impl ActiveRipple {
    /// Ripple rooted at `center` (relative to the target's origin) that
    /// grows until it covers the whole target.
    #[must_use]
    pub fn new(center: Vec2, bounds: Option<Bounds>, now: Instant, duration: Duration) -> Self {
        let max_radius = bounds.map_or(FALLBACK_RADIUS, |b| covering_radius(center, b.size));
        Self {
            center,
            max_radius,
            start: now,
            duration,
        }
    }

    /// Visual state at `now`, or `None` once expired.
    #[must_use]
    pub fn sample(&self, now: Instant) -> Option<Ripple> {
        let elapsed = now.saturating_duration_since(self.start);
        if elapsed >= self.duration {
            return None;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        Some(Ripple {
            center: self.center,
            radius: self.max_radius * EasingFunction::QuadraticOut.evaluate(t),
            opacity: 1.0 - t,
        })
    }

    /// Whether the ripple has run its full duration.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    /// Where the press landed.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.center
    }
}

/// Distance from `point` to the farthest corner of a `size` box at origin.
fn covering_radius(point: Vec2, size: Vec2) -> f32 {
    [
        Vec2::ZERO,
        Vec2::new(size.x, 0.0),
        Vec2::new(0.0, size.y),
        size,
    ]
    .into_iter()
    .map(|corner| corner.distance(point))
    .fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_fades_and_expires() {
        let t0 = Instant::now();
        let bounds = Bounds::new(0.0, 0.0, 30.0, 40.0);
        let ripple = ActiveRipple::new(Vec2::ZERO, Some(bounds), t0, Duration::from_millis(600));

        let start = ripple.sample(t0).unwrap();
        assert_eq!(start.radius, 0.0);
        assert_eq!(start.opacity, 1.0);

        let mid = ripple.sample(t0 + Duration::from_millis(300)).unwrap();
        assert!(mid.radius > 0.0 && mid.radius < 50.0);
        assert!((mid.opacity - 0.5).abs() < 1e-3);

        assert!(ripple.sample(t0 + Duration::from_millis(600)).is_none());
        assert!(ripple.is_expired(t0 + Duration::from_millis(600)));
    }

    #[test]
    fn covers_farthest_corner() {
        assert_eq!(covering_radius(Vec2::ZERO, Vec2::new(30.0, 40.0)), 50.0);
        assert_eq!(covering_radius(Vec2::new(15.0, 20.0), Vec2::new(30.0, 40.0)), 25.0);
    }
}
