//! Accessors and collaborator-facing outputs for MotionEngine.

use super::{MotionEngine, MotionEvent};
use crate::node::{Node, NodeId, NodeState, NodeVisual};
use crate::options::MotionOptions;
use crate::scroll::{ScrollFrame, SubscriptionId};

impl MotionEngine {
    /// Registered node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.store.get(id)
    }

    /// Current visual state of a node.
    #[must_use]
    pub fn visual(&self, id: NodeId) -> Option<&NodeVisual> {
        self.store.get(id).map(Node::visual)
    }

    /// Lifecycle tag of a node.
    #[must_use]
    pub fn state(&self, id: NodeId) -> Option<NodeState> {
        self.store.get(id).map(Node::state)
    }

    /// Nodes whose visual state changed since the last call, sorted.
    pub fn take_dirty(&mut self) -> Vec<NodeId> {
        self.store.take_dirty()
    }

    /// Take all notifications produced so far.
    pub fn drain_events(&mut self) -> Vec<MotionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Authoritative scroll offset as of the last frame.
    #[must_use]
    pub fn current_offset(&self) -> f32 {
        self.scroll.current_offset()
    }

    /// Last resolved scroll frame.
    #[must_use]
    pub fn scroll_frame(&self) -> Option<ScrollFrame> {
        self.scroll.last_frame()
    }

    /// Receive the coalesced scroll frame once per rendering frame.
    pub fn subscribe_scroll(
        &mut self,
        subscriber: impl FnMut(&ScrollFrame) + 'static,
    ) -> SubscriptionId {
        self.scroll.subscribe(subscriber)
    }

    /// Stop receiving scroll frames.
    pub fn unsubscribe_scroll(&mut self, id: SubscriptionId) -> bool {
        self.scroll.unsubscribe(id)
    }

    /// Queue a screen-reader announcement.
    pub fn announce(&mut self, message: impl Into<String>) {
        self.announcements.push(message);
    }

    /// Whether motion is currently reduced.
    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.gate.is_reduced()
    }

    /// Smoothed frame rate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Frames processed so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.timing.frame_count()
    }

    /// Options the engine was built with.
    #[must_use]
    pub fn options(&self) -> &MotionOptions {
        &self.options
    }

    /// Number of registered nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.store.len()
    }

    /// Name of the active timing driver.
    #[must_use]
    pub fn driver_name(&self) -> &'static str {
        self.dispatcher.driver().name()
    }
}
