//! Visibility watcher: turns raw intersection ratios into one-shot
//! "entered" events.
//!
//! The host reports `(node, ratio)` pairs from its intersection primitive.
//! The watcher tracks which side of the node's lowest threshold each node is
//! on and queues an [`Entered`] event only on an outside → inside
//! transition. Ratios are not interpreted beyond that; downstream code may
//! inspect the crossed threshold if it needs finer granularity.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::error::MotionError;
use crate::node::NodeId;

/// A node crossed into the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entered {
    /// Node that entered.
    pub node: NodeId,
    /// Observed visibility ratio.
    pub ratio: f32,
    /// Highest configured threshold at or below `ratio`.
    pub threshold: f32,
}

#[derive(Debug, Clone)]
struct Watch {
    /// Sorted ascending, deduplicated, non-empty.
    thresholds: Vec<f32>,
    inside: bool,
}

impl Watch {
    fn lowest(&self) -> f32 {
        self.thresholds.first().copied().unwrap_or(0.0)
    }

    fn crossed(&self, ratio: f32) -> f32 {
        self.thresholds
            .iter()
            .copied()
            .take_while(|t| *t <= ratio)
            .last()
            .unwrap_or_else(|| self.lowest())
    }

    fn is_inside(&self, ratio: f32) -> bool {
        ratio > 0.0 && ratio >= self.lowest()
    }
}

/// Tracks per-node viewport state and queues enter transitions.
#[derive(Debug, Default)]
pub struct VisibilityWatcher {
    watches: FxHashMap<NodeId, Watch>,
    pending: VecDeque<Entered>,
}

impl VisibilityWatcher {
    /// Create an empty watcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin observing `id` with the given ratio thresholds.
    ///
    /// Thresholds must lie in `[0, 1]`; they are sorted and deduplicated.
    /// An empty list observes any non-zero intersection. Re-registering
    /// replaces the thresholds and resets the node to "outside".
    pub fn register(
        &mut self,
        id: NodeId,
        thresholds: &[f32],
    ) -> Result<(), MotionError> {
        if let Some(bad) = thresholds
            .iter()
            .copied()
            .find(|t| !(0.0..=1.0).contains(t))
        {
            return Err(MotionError::InvalidThreshold(bad));
        }
        let mut sorted = thresholds.to_vec();
        sorted.sort_by(f32::total_cmp);
        sorted.dedup();
        if sorted.is_empty() {
            sorted.push(0.0);
        }
        let _ = self.watches.insert(
            id,
            Watch {
                thresholds: sorted,
                inside: false,
            },
        );
        Ok(())
    }

    /// Stop observing `id` and drop any queued event for it.
    pub fn unregister(&mut self, id: NodeId) -> bool {
        self.pending.retain(|e| e.node != id);
        self.watches.remove(&id).is_some()
    }

    /// Record an observed ratio. Returns whether an enter was queued.
    pub fn observe(&mut self, id: NodeId, ratio: f32) -> bool {
        let Some(watch) = self.watches.get_mut(&id) else {
            log::debug!("visibility report for unwatched node {id}");
            return false;
        };
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        let now_inside = watch.is_inside(ratio);
        let entered = now_inside && !watch.inside;
        watch.inside = now_inside;
        if entered {
            self.pending.push_back(Entered {
                node: id,
                ratio,
                threshold: watch.crossed(ratio),
            });
        }
        entered
    }

    /// Whether `id` is currently considered inside the viewport.
    #[must_use]
    pub fn is_inside(&self, id: NodeId) -> bool {
        self.watches.get(&id).is_some_and(|w| w.inside)
    }

    /// Whether `id` is being observed.
    #[must_use]
    pub fn is_watching(&self, id: NodeId) -> bool {
        self.watches.contains_key(&id)
    }

    /// Take all queued enter events in arrival order.
    pub fn drain(&mut self) -> Vec<Entered> {
        self.pending.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_enter_transition() {
        let mut w = VisibilityWatcher::new();
        w.register(NodeId(1), &[0.1]).unwrap();

        assert!(!w.observe(NodeId(1), 0.05));
        assert!(w.observe(NodeId(1), 0.2));
        // Still inside: no repeat, even at higher ratios
        assert!(!w.observe(NodeId(1), 0.8));
        assert_eq!(w.drain().len(), 1);

        // Leave and come back
        assert!(!w.observe(NodeId(1), 0.0));
        assert!(w.observe(NodeId(1), 0.5));
        assert_eq!(w.drain().len(), 1);
    }

    #[test]
    fn reports_crossed_threshold() {
        let mut w = VisibilityWatcher::new();
        w.register(NodeId(1), &[0.5, 0.1, 0.5, 0.25]).unwrap();
        let _ = w.observe(NodeId(1), 0.3);
        let events = w.drain();
        assert_eq!(events[0].threshold, 0.25);
        assert_eq!(events[0].ratio, 0.3);
    }

    #[test]
    fn rejects_out_of_range_thresholds() {
        let mut w = VisibilityWatcher::new();
        let err = w.register(NodeId(1), &[0.1, 1.5]).unwrap_err();
        assert!(matches!(err, MotionError::InvalidThreshold(t) if t == 1.5));
        assert!(w.register(NodeId(1), &[f32::NAN]).is_err());
        assert!(!w.is_watching(NodeId(1)));
    }

    #[test]
    fn unregister_purges_pending_events() {
        let mut w = VisibilityWatcher::new();
        w.register(NodeId(1), &[0.1]).unwrap();
        w.register(NodeId(2), &[0.1]).unwrap();
        let _ = w.observe(NodeId(1), 1.0);
        let _ = w.observe(NodeId(2), 1.0);
        assert!(w.unregister(NodeId(1)));
        assert!(!w.unregister(NodeId(1)));

        let events = w.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].node, NodeId(2));
        // Reports for removed nodes are ignored
        assert!(!w.observe(NodeId(1), 1.0));
    }

    #[test]
    fn empty_thresholds_watch_any_intersection() {
        let mut w = VisibilityWatcher::new();
        w.register(NodeId(1), &[]).unwrap();
        assert!(!w.observe(NodeId(1), 0.0));
        assert!(w.observe(NodeId(1), 0.01));
    }
}
