//! Animatable nodes: identity, declared kind, lifecycle tag and visual state.
//!
//! Nodes belong to the host page. The engine only keeps a registry of the
//! nodes it was told about, mutates their [`NodeVisual`] and lifecycle
//! [`NodeState`], and forgets them on unregister.

mod kind;
mod visual;

use std::fmt;

use glam::Vec2;
use rustc_hash::{FxHashMap, FxHashSet};
use web_time::Duration;

pub use kind::AnimationKind;
pub use visual::{
    reconstruct_text, CharUnit, NodeVisual, Ripple, Transform2D, SPACE_MARKER,
};

use crate::error::MotionError;

/// Host-assigned identity of a visual node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity of a stagger group (usually the parent container).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u64);

/// One-shot lifecycle of an animated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeState {
    /// Registered, waiting for its trigger.
    #[default]
    Pending,
    /// A routine is driving the node.
    Running,
    /// End state applied; never re-enters `Running`.
    Done,
}

/// How a counter renders its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterFormat {
    /// `1234`
    #[default]
    Plain,
    /// `1234%`
    Percentage,
    /// `$1,234` (symbol from options)
    Currency,
}

/// Kind-specific parameters declared on a node. `None` falls back to the
/// engine options.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeParams {
    /// Counter target value.
    pub target: Option<f64>,
    /// Counter display style.
    pub format: CounterFormat,
    /// Overall routine duration.
    pub duration: Option<Duration>,
    /// Per-character delay for title reveals.
    pub char_delay: Option<Duration>,
    /// Tick interval for the typewriter.
    pub speed: Option<Duration>,
}

/// Axis-aligned bounds in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Top-left corner.
    pub origin: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Bounds {
    /// Bounds from position and size.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }
}

/// Everything the host declares about a node when registering it.
#[derive(Debug, Clone, Default)]
pub struct NodeDecl {
    /// Classification markers (class names).
    pub markers: Vec<String>,
    /// Original text content.
    pub text: String,
    /// Kind-specific parameters.
    pub params: NodeParams,
    /// Stagger group membership and sequence index.
    pub group: Option<(GroupId, usize)>,
    /// Page bounds (needed for magnetic nodes and ripples).
    pub bounds: Option<Bounds>,
    /// Whether the node participates in the pointer field.
    pub magnetic: bool,
    /// Parallax speed factor.
    pub parallax: Option<f32>,
    /// Whether the node is a scroll-progress bar.
    pub progress_bar: bool,
    /// Visibility thresholds overriding the defaults.
    pub thresholds: Option<Vec<f32>>,
}

impl NodeDecl {
    /// Empty declaration (classifies as [`AnimationKind::Default`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a classification marker.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.markers.push(marker.into());
        self
    }

    /// Set the original text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the counter target.
    #[must_use]
    pub fn target(mut self, target: f64) -> Self {
        self.params.target = Some(target);
        self
    }

    /// Set the counter format.
    #[must_use]
    pub fn format(mut self, format: CounterFormat) -> Self {
        self.params.format = format;
        self
    }

    /// Override the routine duration.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.params.duration = Some(duration);
        self
    }

    /// Override the per-character title delay.
    #[must_use]
    pub fn char_delay(mut self, delay: Duration) -> Self {
        self.params.char_delay = Some(delay);
        self
    }

    /// Override the typewriter tick interval.
    #[must_use]
    pub fn speed(mut self, speed: Duration) -> Self {
        self.params.speed = Some(speed);
        self
    }

    /// Place the node in a stagger group at `index`.
    #[must_use]
    pub fn in_group(mut self, group: GroupId, index: usize) -> Self {
        self.group = Some((group, index));
        self
    }

    /// Set page bounds.
    #[must_use]
    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Make the node magnetic.
    #[must_use]
    pub fn magnetic(mut self) -> Self {
        self.magnetic = true;
        self
    }

    /// Give the node a parallax speed factor.
    #[must_use]
    pub fn parallax(mut self, speed: f32) -> Self {
        self.parallax = Some(speed);
        self
    }

    /// Mark the node as a scroll-progress bar.
    #[must_use]
    pub fn progress_bar(mut self) -> Self {
        self.progress_bar = true;
        self
    }

    /// Override visibility thresholds.
    #[must_use]
    pub fn thresholds(mut self, thresholds: Vec<f32>) -> Self {
        self.thresholds = Some(thresholds);
        self
    }
}

/// A registered node.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    kind: AnimationKind,
    state: NodeState,
    params: NodeParams,
    group: Option<(GroupId, usize)>,
    source_text: String,
    revealed: bool,
    bounds: Option<Bounds>,
    magnetic: bool,
    parallax: Option<f32>,
    progress_bar: bool,
    visual: NodeVisual,
}

impl Node {
    /// Build a node from its declaration, resolving its kind once.
    #[must_use]
    pub fn from_decl(id: NodeId, decl: NodeDecl) -> Self {
        let kind = AnimationKind::classify(&decl.markers);
        Self {
            id,
            kind,
            state: NodeState::Pending,
            params: decl.params,
            group: decl.group,
            source_text: decl.text,
            revealed: false,
            bounds: decl.bounds,
            magnetic: decl.magnetic,
            parallax: decl.parallax,
            progress_bar: decl.progress_bar,
            visual: NodeVisual::default(),
        }
    }

    /// Node identity.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Resolved animation kind.
    #[must_use]
    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    /// Lifecycle tag.
    #[must_use]
    pub fn state(&self) -> NodeState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: NodeState) {
        self.state = state;
    }

    /// Declared parameters.
    #[must_use]
    pub fn params(&self) -> &NodeParams {
        &self.params
    }

    /// Stagger group membership.
    #[must_use]
    pub fn group(&self) -> Option<(GroupId, usize)> {
        self.group
    }

    /// Original text content, as declared.
    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Whether the reveal routine has already run on this node.
    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Set the reveal guard. Returns `false` if it was already set.
    pub fn mark_revealed(&mut self) -> bool {
        !std::mem::replace(&mut self.revealed, true)
    }

    /// Page bounds, if declared.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub(crate) fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
    }

    /// Whether the node participates in the pointer field.
    #[must_use]
    pub fn is_magnetic(&self) -> bool {
        self.magnetic
    }

    /// Parallax speed factor.
    #[must_use]
    pub fn parallax(&self) -> Option<f32> {
        self.parallax
    }

    /// Whether this node shows scroll progress.
    #[must_use]
    pub fn is_progress_bar(&self) -> bool {
        self.progress_bar
    }

    /// Current visual state.
    #[must_use]
    pub fn visual(&self) -> &NodeVisual {
        &self.visual
    }

    /// Mutable visual state.
    pub fn visual_mut(&mut self) -> &mut NodeVisual {
        &mut self.visual
    }
}

/// Registry of nodes plus the set changed since the host last looked.
#[derive(Debug, Default)]
pub struct NodeStore {
    nodes: FxHashMap<NodeId, Node>,
    dirty: FxHashSet<NodeId>,
}

impl NodeStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. Fails if the id is already registered.
    pub fn insert(&mut self, node: Node) -> Result<&mut Node, MotionError> {
        let id = node.id();
        if self.nodes.contains_key(&id) {
            return Err(MotionError::DuplicateNode(id));
        }
        let _ = self.dirty.insert(id);
        Ok(self.nodes.entry(id).or_insert(node))
    }

    /// Remove a node, returning it if it existed.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        let _ = self.dirty.remove(&id);
        self.nodes.remove(&id)
    }

    /// Shared access.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Mutable access. Marks the node dirty.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let node = self.nodes.get_mut(&id)?;
        let _ = self.dirty.insert(id);
        Some(node)
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Ids of nodes satisfying `pred`, sorted for deterministic iteration.
    #[must_use]
    pub fn ids_where(&self, pred: impl Fn(&Node) -> bool) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self
            .nodes
            .values()
            .filter(|n| pred(n))
            .map(Node::id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no nodes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Write `value` into one visual channel, marking the node dirty only
    /// if the channel actually changed. Returns whether it changed.
    pub fn set_channel<T, F>(&mut self, id: NodeId, value: T, channel: F) -> bool
    where
        T: PartialEq,
        F: FnOnce(&mut NodeVisual) -> &mut T,
    {
        let Some(node) = self.nodes.get_mut(&id) else {
            return false;
        };
        let slot = channel(&mut node.visual);
        if *slot == value {
            return false;
        }
        *slot = value;
        let _ = self.dirty.insert(id);
        true
    }

    /// Drain the set of nodes mutated since the last call, sorted.
    pub fn take_dirty(&mut self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.dirty.drain().collect();
        ids.sort_unstable();
        ids
    }
}
