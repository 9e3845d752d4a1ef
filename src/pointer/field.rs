//! Per-node magnetic field state.

use glam::Vec2;
use web_time::{Duration, Instant};

use crate::node::NodeId;
use crate::util::easing::EasingFunction;
use crate::util::tween::Tween;

/// Linear force falloff: 1 at the center, 0 at and beyond `radius`.
///
/// Continuous and non-increasing in `distance` over `[0, radius]`.
#[must_use]
pub fn force_at(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 || distance.is_nan() {
        return 0.0;
    }
    ((radius - distance.max(0.0)) / radius).clamp(0.0, 1.0)
}

/// Magnetic record for one node: where it is, how far its pull reaches, and
/// its two displacement channels.
///
/// The *primary* channel follows the pointer while it is within `radius`;
/// the *neighbor* channel carries distortion induced by other magnetic
/// nodes. Each channel releases independently.
#[derive(Debug, Clone)]
pub struct MagneticField {
    node: NodeId,
    center: Vec2,
    radius: f32,
    /// Force at the last update, in [0, 1].
    force: f32,
    primary: Tween<Vec2>,
    primary_engaged: bool,
    neighbor: Tween<Vec2>,
    neighbor_engaged: bool,
}

impl MagneticField {
    /// Resting field centered on `center`.
    #[must_use]
    pub fn new(node: NodeId, center: Vec2, radius: f32, now: Instant) -> Self {
        Self {
            node,
            center,
            radius,
            force: 0.0,
            primary: Tween::settled(Vec2::ZERO, now),
            primary_engaged: false,
            neighbor: Tween::settled(Vec2::ZERO, now),
            neighbor_engaged: false,
        }
    }

    /// Node this field moves.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Field center in page coordinates.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Move the field (host layout changed).
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    /// Primary pull radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Force computed at the last update.
    #[must_use]
    pub fn force(&self) -> f32 {
        self.force
    }

    /// Force exerted on this node by a pointer at `pointer`.
    #[must_use]
    pub fn force_from(&self, pointer: Vec2) -> f32 {
        force_at(self.center.distance(pointer), self.radius)
    }

    /// Follow the pointer directly with the given translation.
    pub(crate) fn engage_primary(&mut self, force: f32, translate: Vec2, now: Instant) {
        self.force = force;
        self.primary.snap(translate, now);
        self.primary_engaged = true;
    }

    /// Spring the primary channel back to zero from wherever it is.
    pub(crate) fn release_primary(
        &mut self,
        now: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) {
        self.force = 0.0;
        if self.primary_engaged {
            self.primary.retarget(Vec2::ZERO, now, duration, easing);
            self.primary_engaged = false;
        }
    }

    /// Hold the neighbor channel at `offset`.
    pub(crate) fn engage_neighbor(&mut self, offset: Vec2, now: Instant) {
        self.neighbor.snap(offset, now);
        self.neighbor_engaged = true;
    }

    /// Ease the neighbor channel back to zero.
    pub(crate) fn release_neighbor(
        &mut self,
        now: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) {
        if self.neighbor_engaged {
            self.neighbor.retarget(Vec2::ZERO, now, duration, easing);
            self.neighbor_engaged = false;
        }
    }

    /// Drop both channels to zero immediately.
    pub(crate) fn reset(&mut self, now: Instant) {
        self.force = 0.0;
        self.primary.snap(Vec2::ZERO, now);
        self.neighbor.snap(Vec2::ZERO, now);
        self.primary_engaged = false;
        self.neighbor_engaged = false;
    }

    /// Combined displacement at `now`.
    #[must_use]
    pub fn displacement(&self, now: Instant) -> Vec2 {
        self.primary.value(now) + self.neighbor.value(now)
    }

    /// Whether either channel is engaged or still releasing.
    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        self.primary_engaged
            || self.neighbor_engaged
            || !self.primary.is_complete(now)
            || !self.neighbor.is_complete(now)
    }
}
