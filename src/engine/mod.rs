//! The motion engine façade.
//!
//! [`MotionEngine`] owns every subsystem (node store, visibility watcher,
//! motion gate, dispatcher, pointer field, scroll relay, feedback,
//! announcements) and exposes two entry points to the host:
//!
//! - [`MotionEngine::frame`], called from the rendering-frame callback
//! - [`MotionEngine::tick_timers`], called from a fixed real-time interval
//!   for typewriter-style routines
//!
//! Inputs arrive either through the [`InputFeed`] returned by
//! [`MotionEngine::new`] (drained at the start of each frame) or directly via
//! [`MotionEngine::handle_input`].

mod event;
mod frame;
mod input;
mod queries;

use std::sync::mpsc;
use std::sync::Arc;

pub use event::MotionEvent;
use web_time::Instant;

use crate::animation::routines::SharedRoutine;
use crate::animation::{
    select_driver, BuiltinDriver, DispatchEvent, DispatchOutcome, Dispatcher,
    DriverFactory, MotionGate, RoutinePreferences, SharedDriver,
};
use crate::announce::AnnouncementQueue;
use crate::error::MotionError;
use crate::feedback::Feedback;
use crate::input::{InputFeed, MotionInput};
use crate::node::{AnimationKind, Node, NodeDecl, NodeId, NodeStore};
use crate::options::MotionOptions;
use crate::pointer::PointerField;
use crate::scroll::ScrollRelay;
use crate::util::frame_timing::FrameTiming;
use crate::visibility::VisibilityWatcher;

/// Scroll-, pointer- and visibility-driven animation engine.
pub struct MotionEngine {
    options: MotionOptions,
    store: NodeStore,
    visibility: VisibilityWatcher,
    gate: MotionGate,
    dispatcher: Dispatcher,
    pointer: PointerField,
    scroll: ScrollRelay,
    feedback: Feedback,
    announcements: AnnouncementQueue,
    timing: FrameTiming,
    input_rx: mpsc::Receiver<MotionInput>,
    events: Vec<MotionEvent>,
}

impl MotionEngine {
    /// Engine using the built-in easing driver.
    #[must_use]
    pub fn new(options: MotionOptions) -> (Self, InputFeed) {
        let factory = || -> Result<SharedDriver, MotionError> {
            Ok(Arc::new(BuiltinDriver))
        };
        Self::with_driver(options, &factory)
    }

    /// Engine whose timing driver comes from `factory`. A failing factory
    /// degrades to instant end states instead of failing construction.
    #[must_use]
    pub fn with_driver(
        options: MotionOptions,
        factory: &dyn DriverFactory,
    ) -> (Self, InputFeed) {
        let driver = select_driver(factory);
        let (feed, input_rx) = InputFeed::channel();
        let engine = Self {
            store: NodeStore::new(),
            visibility: VisibilityWatcher::new(),
            gate: MotionGate::default(),
            dispatcher: Dispatcher::new(
                RoutinePreferences::from_options(&options),
                driver,
            ),
            pointer: PointerField::new(options.pointer.clone()),
            scroll: ScrollRelay::new(options.scroll.clone()),
            feedback: Feedback::new(options.feedback.clone()),
            announcements: AnnouncementQueue::new(
                options.announce.min_interval(),
            ),
            timing: FrameTiming::new(),
            input_rx,
            events: Vec::new(),
            options,
        };
        (engine, feed)
    }

    /// Begin managing `id`.
    ///
    /// The node is classified, put into its routine's start state and
    /// observed for visibility with its own thresholds or the configured
    /// defaults. Magnetic nodes with bounds join the pointer field at `now`.
    pub fn register(
        &mut self,
        id: NodeId,
        decl: NodeDecl,
        now: Instant,
    ) -> Result<(), MotionError> {
        if self.store.contains(id) {
            return Err(MotionError::DuplicateNode(id));
        }
        let thresholds = decl
            .thresholds
            .clone()
            .unwrap_or_else(|| self.options.visibility.thresholds.clone());
        self.visibility.register(id, &thresholds)?;

        let node = self.store.insert(Node::from_decl(id, decl))?;
        self.dispatcher.initialize(node);
        log::debug!("registered {id} as {}", node.kind());

        if node.is_magnetic() {
            match node.bounds() {
                Some(bounds) => {
                    self.pointer.register(id, bounds.center(), now);
                }
                None => log::debug!("magnetic {id} has no bounds yet"),
            }
        }
        Ok(())
    }

    /// Stop managing `id`, cancelling any scheduled continuation. Returns
    /// whether the node was registered.
    pub fn unregister(&mut self, id: NodeId) -> bool {
        let _ = self.visibility.unregister(id);
        let _ = self.dispatcher.cancel(id);
        let _ = self.pointer.unregister(id);
        let _ = self.feedback.remove(id);
        self.store.remove(id).is_some()
    }

    /// Trigger `id` immediately, as if it had just entered the viewport.
    pub fn dispatch(
        &mut self,
        id: NodeId,
        now: Instant,
    ) -> Vec<(NodeId, DispatchOutcome)> {
        let outcomes = self.dispatcher.trigger(
            &mut self.store,
            id,
            now,
            self.gate.is_reduced(),
        );
        self.collect_dispatch_events();
        outcomes
    }

    /// Replace the routine used for `kind` in future dispatches.
    pub fn set_routine(
        &mut self,
        kind: AnimationKind,
        routine: SharedRoutine,
    ) {
        self.dispatcher.set_routine(kind, routine);
    }

    /// Translate dispatcher completions into engine events, queueing counter
    /// announcements.
    fn collect_dispatch_events(&mut self) {
        for event in self.dispatcher.drain_events() {
            match event {
                DispatchEvent::Finished(id) => {
                    self.events.push(MotionEvent::Finished(id));
                    if !self.options.counter.announce {
                        continue;
                    }
                    let announcement = self
                        .store
                        .get(id)
                        .filter(|n| n.kind() == AnimationKind::Counter)
                        .and_then(|n| n.visual().text.clone());
                    if let Some(text) = announcement {
                        self.announcements.push(text);
                    }
                }
                DispatchEvent::GroupFinished(group) => {
                    self.events.push(MotionEvent::GroupFinished(group));
                }
            }
        }
    }
}

impl std::fmt::Debug for MotionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionEngine")
            .field("nodes", &self.store.len())
            .field("reduced_motion", &self.gate.is_reduced())
            .field("dispatcher", &self.dispatcher)
            .field("scroll", &self.scroll)
            .finish_non_exhaustive()
    }
}
