//! Pointer field engine: continuous magnetic displacement for nodes near
//! the pointer.
//!
//! Pointer moves only record the latest position; forces are re-derived
//! once per frame in [`PointerField::update`]. The field is coupled: a node
//! under the pointer also nudges every other magnetic node within the
//! neighbor radius, scaled by both its own force and the neighbor's
//! distance falloff.
//!
//! Neighbor coupling visits every registered magnetic node per source, so
//! the per-frame cost is quadratic in the number of engaged nodes. Sites
//! with many magnetic nodes should keep the neighbor radius small.

mod field;

use std::collections::BTreeMap;

use glam::Vec2;
use web_time::Instant;

pub use field::{force_at, MagneticField};

use crate::node::NodeId;
use crate::options::PointerOptions;
use crate::util::easing::EasingFunction;

/// Drives all magnetic fields from the global pointer position.
#[derive(Debug)]
pub struct PointerField {
    options: PointerOptions,
    fields: BTreeMap<NodeId, MagneticField>,
    pointer: Option<Vec2>,
    /// Set on pointer-leave until the next update applies the release.
    left: bool,
}

impl PointerField {
    /// Create an empty field engine.
    #[must_use]
    pub fn new(options: PointerOptions) -> Self {
        Self {
            options,
            fields: BTreeMap::new(),
            pointer: None,
            left: false,
        }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &PointerOptions {
        &self.options
    }

    /// Make `id` magnetic, centered on `center`.
    pub fn register(&mut self, id: NodeId, center: Vec2, now: Instant) {
        let field = MagneticField::new(id, center, self.options.radius, now);
        let _ = self.fields.insert(id, field);
    }

    /// Stop moving `id`.
    pub fn unregister(&mut self, id: NodeId) -> bool {
        self.fields.remove(&id).is_some()
    }

    /// Update the center of `id` after a layout change.
    pub fn set_center(&mut self, id: NodeId, center: Vec2) -> bool {
        self.fields
            .get_mut(&id)
            .map(|f| f.set_center(center))
            .is_some()
    }

    /// Field record for `id`.
    #[must_use]
    pub fn field(&self, id: NodeId) -> Option<&MagneticField> {
        self.fields.get(&id)
    }

    /// Last known pointer position.
    #[must_use]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Record a pointer move. Forces are applied on the next update.
    pub fn pointer_move(&mut self, position: Vec2) {
        self.pointer = Some(position);
        self.left = false;
    }

    /// Record that the pointer left the page.
    pub fn pointer_leave(&mut self) {
        self.pointer = None;
        self.left = true;
    }

    /// Drop every displacement to zero and forget the pointer.
    pub fn reset(&mut self, now: Instant) {
        self.pointer = None;
        self.left = false;
        for field in self.fields.values_mut() {
            field.reset(now);
        }
    }

    /// Whether any field is displaced or releasing.
    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        self.pointer.is_some() || self.fields.values().any(|f| f.is_active(now))
    }

    /// Re-derive all fields at `now` and return each node's displacement.
    ///
    /// Under reduced motion nothing is computed and every node stays at
    /// zero displacement.
    pub fn update(&mut self, now: Instant, reduced: bool) -> Vec<(NodeId, Vec2)> {
        if reduced {
            self.reset(now);
        } else if let Some(pointer) = self.pointer {
            self.apply_pointer(pointer, now);
        } else if std::mem::take(&mut self.left) {
            self.release_all(now);
        }
        self.fields
            .iter()
            .map(|(id, f)| (*id, f.displacement(now)))
            .collect()
    }

    fn apply_pointer(&mut self, pointer: Vec2, now: Instant) {
        let spring = self.spring();
        let reset_curve = EasingFunction::CubicOut;
        let release = self.options.release();
        let neighbor_release = self.options.neighbor_release();

        // Sources: nodes with the pointer inside their radius
        let sources: Vec<(NodeId, Vec2, f32)> = self
            .fields
            .values()
            .filter_map(|f| {
                let force = f.force_from(pointer);
                (force > 0.0).then_some((f.node(), f.center(), force))
            })
            .collect();

        for field in self.fields.values_mut() {
            let to_pointer = pointer - field.center();
            let own = sources.iter().find(|(id, _, _)| *id == field.node());
            match own {
                Some(&(_, _, force)) => field.engage_primary(
                    force,
                    to_pointer * force * self.options.strength,
                    now,
                ),
                None => field.release_primary(now, release, spring),
            }

            let direction = to_pointer.normalize_or_zero();
            let distortion: Vec2 = sources
                .iter()
                .filter(|(id, _, _)| *id != field.node())
                .map(|(_, center, source_force)| {
                    let falloff = force_at(
                        center.distance(field.center()),
                        self.options.neighbor_radius,
                    );
                    direction
                        * *source_force
                        * falloff
                        * self.options.neighbor_strength_px
                })
                .sum();
            if distortion.length_squared() > 0.0 {
                field.engage_neighbor(distortion, now);
            } else {
                field.release_neighbor(now, neighbor_release, reset_curve);
            }
        }
    }

    fn release_all(&mut self, now: Instant) {
        let spring = self.spring();
        let release = self.options.release();
        let neighbor_release = self.options.neighbor_release();
        for field in self.fields.values_mut() {
            field.release_primary(now, release, spring);
            field.release_neighbor(now, neighbor_release, EasingFunction::CubicOut);
        }
    }

    fn spring(&self) -> EasingFunction {
        EasingFunction::BackOut {
            overshoot: self.options.overshoot,
        }
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn displacement(out: &[(NodeId, Vec2)], id: u64) -> Vec2 {
        out.iter()
            .find(|(n, _)| *n == NodeId(id))
            .map(|(_, v)| *v)
            .unwrap()
    }

    #[test]
    fn node_follows_pointer_within_radius() {
        let t0 = Instant::now();
        let mut pf = PointerField::new(PointerOptions::default());
        pf.register(NodeId(1), Vec2::ZERO, t0);

        // Force 0.5 at distance 50: 50 * 0.5 * 0.3 = 7.5
        pf.pointer_move(Vec2::new(50.0, 0.0));
        let out = pf.update(t0, false);
        let d = displacement(&out, 1);
        assert!((d.x - 7.5).abs() < 1e-4);
        assert_eq!(d.y, 0.0);

        // Outside the radius the node releases rather than snapping
        pf.pointer_move(Vec2::new(500.0, 0.0));
        let out = pf.update(t0 + ms(10), false);
        assert!(displacement(&out, 1).x > 0.0);
        let out = pf.update(t0 + ms(700), false);
        assert_eq!(displacement(&out, 1), Vec2::ZERO);
    }

    #[test]
    fn neighbors_bend_toward_pointer() {
        let t0 = Instant::now();
        let mut pf = PointerField::new(PointerOptions::default());
        pf.register(NodeId(1), Vec2::ZERO, t0);
        pf.register(NodeId(2), Vec2::new(150.0, 0.0), t0);
        pf.register(NodeId(3), Vec2::new(1000.0, 0.0), t0);

        // Pointer on node 1: full source force
        pf.pointer_move(Vec2::ZERO);
        let out = pf.update(t0, false);
        let n2 = displacement(&out, 2);
        // Toward pointer (negative x), scaled by 1 * 0.25 * 8
        assert!((n2.x + 2.0).abs() < 1e-4);
        // Far node is untouched
        assert_eq!(displacement(&out, 3), Vec2::ZERO);
    }

    #[test]
    fn leave_releases_primary_and_neighbors() {
        let t0 = Instant::now();
        let mut pf = PointerField::new(PointerOptions::default());
        pf.register(NodeId(1), Vec2::ZERO, t0);
        pf.register(NodeId(2), Vec2::new(150.0, 0.0), t0);
        pf.pointer_move(Vec2::new(20.0, 0.0));
        let _ = pf.update(t0, false);

        pf.pointer_leave();
        let _ = pf.update(t0, false);
        // Neighbor reset is faster than the primary spring
        let out = pf.update(t0 + ms(300), false);
        assert_eq!(displacement(&out, 2), Vec2::ZERO);
        assert_ne!(displacement(&out, 1), Vec2::ZERO);
        assert!(pf.is_active(t0 + ms(300)));

        let out = pf.update(t0 + ms(600), false);
        assert_eq!(displacement(&out, 1), Vec2::ZERO);
        assert!(!pf.is_active(t0 + ms(600)));
    }

    #[test]
    fn reduced_motion_keeps_identity() {
        let t0 = Instant::now();
        let mut pf = PointerField::new(PointerOptions::default());
        pf.register(NodeId(1), Vec2::ZERO, t0);
        pf.pointer_move(Vec2::new(10.0, 10.0));
        let out = pf.update(t0, true);
        assert_eq!(displacement(&out, 1), Vec2::ZERO);
        assert!(!pf.is_active(t0));
    }
}
