//! Typed input feed.
//!
//! Host event sources (intersection observers, pointer and scroll
//! listeners, the reduced-motion media query) never call into the engine
//! directly: they publish [`MotionInput`] values through a cloneable
//! [`InputFeed`], and the engine drains them at the start of each frame.

mod event;

use std::sync::mpsc;

pub use event::MotionInput;

use crate::node::{Bounds, NodeId};

/// Sending half of the engine's input channel.
///
/// Sends never block. Once the engine is dropped they are silently
/// discarded.
#[derive(Debug, Clone)]
pub struct InputFeed {
    tx: mpsc::Sender<MotionInput>,
}

impl InputFeed {
    /// Create a feed and the receiver the engine drains.
    pub(crate) fn channel() -> (Self, mpsc::Receiver<MotionInput>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    /// Publish a raw input. Returns `false` if the engine is gone.
    #[must_use]
    pub fn send(&self, input: MotionInput) -> bool {
        self.tx.send(input).is_ok()
    }

    /// A node's visibility ratio changed.
    #[must_use]
    pub fn visibility(&self, node: NodeId, ratio: f32) -> bool {
        self.send(MotionInput::Visibility { node, ratio })
    }

    /// The pointer moved to page coordinates `(x, y)`.
    #[must_use]
    pub fn pointer_move(&self, x: f32, y: f32) -> bool {
        self.send(MotionInput::PointerMove { x, y })
    }

    /// The pointer left the page.
    #[must_use]
    pub fn pointer_leave(&self) -> bool {
        self.send(MotionInput::PointerLeave)
    }

    /// Press-start on `node` at `(x, y)` relative to its origin.
    #[must_use]
    pub fn press(&self, node: NodeId, x: f32, y: f32) -> bool {
        self.send(MotionInput::Press { node, x, y })
    }

    /// Press-end on `node`.
    #[must_use]
    pub fn release(&self, node: NodeId) -> bool {
        self.send(MotionInput::Release { node })
    }

    /// Hover entered (`true`) or left (`false`) `node`.
    #[must_use]
    pub fn hover(&self, node: NodeId, entered: bool) -> bool {
        self.send(MotionInput::Hover { node, entered })
    }

    /// The platform reduced-motion preference changed.
    #[must_use]
    pub fn reduced_motion(&self, reduced: bool) -> bool {
        self.send(MotionInput::ReducedMotion(reduced))
    }

    /// Raw scroll position.
    #[must_use]
    pub fn scroll(&self, offset: f32) -> bool {
        self.send(MotionInput::Scroll { offset })
    }

    /// Page or viewport size changed.
    #[must_use]
    pub fn resize(&self, content_height: f32, viewport_height: f32) -> bool {
        self.send(MotionInput::Resize {
            content_height,
            viewport_height,
        })
    }

    /// A node's page bounds changed.
    #[must_use]
    pub fn layout(&self, node: NodeId, bounds: Bounds) -> bool {
        self.send(MotionInput::Layout { node, bounds })
    }
}
