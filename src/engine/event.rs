use crate::node::{GroupId, NodeId};

/// Notifications the engine publishes to collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MotionEvent {
    /// A node's animation reached its end state.
    Finished(NodeId),
    /// The last member of a stagger group finished.
    GroupFinished(GroupId),
    /// A message for the screen-reader live region.
    Announcement(String),
}
