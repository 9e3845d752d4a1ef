use crate::node::{Bounds, NodeId};

/// Platform-agnostic input events consumed by the engine.
///
/// Coordinates are CSS pixels. Pointer moves are page coordinates; press
/// coordinates are relative to the pressed node's origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionInput {
    /// Intersection ratio report for a node.
    Visibility {
        /// Reporting node.
        node: NodeId,
        /// Visible fraction in [0, 1].
        ratio: f32,
    },
    /// Pointer moved.
    PointerMove {
        /// Horizontal page position.
        x: f32,
        /// Vertical page position.
        y: f32,
    },
    /// Pointer left the page.
    PointerLeave,
    /// Press-start on a node.
    Press {
        /// Pressed node.
        node: NodeId,
        /// Horizontal offset within the node.
        x: f32,
        /// Vertical offset within the node.
        y: f32,
    },
    /// Press-end on a node.
    Release {
        /// Released node.
        node: NodeId,
    },
    /// Hover enter or leave.
    Hover {
        /// Hovered node.
        node: NodeId,
        /// `true` on enter, `false` on leave.
        entered: bool,
    },
    /// Reduced-motion preference.
    ReducedMotion(bool),
    /// Raw scroll position.
    Scroll {
        /// Vertical scroll offset.
        offset: f32,
    },
    /// Page dimensions.
    Resize {
        /// Total content height.
        content_height: f32,
        /// Viewport height.
        viewport_height: f32,
    },
    /// Node bounds changed.
    Layout {
        /// Node whose layout changed.
        node: NodeId,
        /// New page bounds.
        bounds: Bounds,
    },
}
