//! Animation dispatcher: routes entered nodes to their routine and drives
//! every run to completion.
//!
//! # Lifecycle
//!
//! A node moves `Pending → Running → Done` exactly once. Dispatching a node
//! in any other state is a silent no-op, so a double-firing visibility
//! source can never restart an animation.
//!
//! # Failure handling
//!
//! A [`RoutineError`](crate::error::RoutineError) from `prepare` or `sample`
//! never escapes: the routine's `finish` writes the end state, the node is
//! marked done and a `Finished` event is still emitted.

use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};
use web_time::Instant;

use super::driver::SharedDriver;
use super::preferences::RoutinePreferences;
use super::routines::{AnimationRoutine, Cadence, Prepared, SharedRoutine};
use super::runner::{ActiveRun, PassKind};
use crate::node::{AnimationKind, GroupId, Node, NodeId, NodeState, NodeStore};

/// Why a dispatch request did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The node is not registered.
    UnknownNode,
    /// The node already ran or is running.
    NotPending,
}

/// What a single dispatch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A run was scheduled.
    Started,
    /// The end state was applied synchronously.
    Completed,
    /// The routine failed to prepare; the end state was forced.
    Recovered,
    /// Nothing happened.
    Skipped(SkipReason),
}

/// Completion notifications produced by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchEvent {
    /// A node reached `Done`.
    Finished(NodeId),
    /// Every dispatched member of a stagger group reached `Done`.
    GroupFinished(GroupId),
}

/// Routes nodes to routines and tracks in-flight runs.
pub struct Dispatcher {
    preferences: RoutinePreferences,
    driver: SharedDriver,
    /// Ordered by node id so sampling order is deterministic.
    runs: BTreeMap<NodeId, ActiveRun>,
    /// Members of each triggered group still running.
    groups: FxHashMap<GroupId, FxHashSet<NodeId>>,
    events: Vec<DispatchEvent>,
}

impl Dispatcher {
    /// Create a dispatcher with the given routines and timing driver.
    #[must_use]
    pub fn new(preferences: RoutinePreferences, driver: SharedDriver) -> Self {
        Self {
            preferences,
            driver,
            runs: BTreeMap::new(),
            groups: FxHashMap::default(),
            events: Vec::new(),
        }
    }

    /// Current kind → routine mapping.
    #[must_use]
    pub fn preferences(&self) -> &RoutinePreferences {
        &self.preferences
    }

    /// Replace the routine used for `kind`. Runs already in flight keep the
    /// routine they started with.
    pub fn set_routine(&mut self, kind: AnimationKind, routine: SharedRoutine) {
        self.preferences.set(kind, routine);
    }

    /// Active timing driver.
    #[must_use]
    pub fn driver(&self) -> &SharedDriver {
        &self.driver
    }

    /// Put a freshly registered node into its routine's start state.
    pub fn initialize(&self, node: &mut Node) {
        let routine = self.preferences.get(node.kind());
        let initial = routine.initial(node);
        *node.visual_mut() = initial;
    }

    /// Handle an "entered" trigger for `id`.
    ///
    /// For a stagger member, the trigger fans out to every pending member
    /// of its group; each member's delay comes from its own sequence index.
    pub fn trigger(
        &mut self,
        store: &mut NodeStore,
        id: NodeId,
        now: Instant,
        reduced: bool,
    ) -> Vec<(NodeId, DispatchOutcome)> {
        let Some(node) = store.get(id) else {
            log::debug!("trigger for unknown node {id}");
            return vec![(id, DispatchOutcome::Skipped(SkipReason::UnknownNode))];
        };
        let group = match (node.kind(), node.group()) {
            (AnimationKind::Stagger, Some((group, _))) => group,
            _ => return vec![(id, self.dispatch(store, id, now, reduced))],
        };

        let mut members: Vec<(usize, NodeId)> = store
            .iter()
            .filter(|n| {
                n.state() == NodeState::Pending
                    && n.group().is_some_and(|(g, _)| g == group)
            })
            .filter_map(|n| n.group().map(|(_, index)| (index, n.id())))
            .collect();
        if members.is_empty() {
            log::debug!("group {} already triggered", group.0);
            return vec![(id, DispatchOutcome::Skipped(SkipReason::NotPending))];
        }
        members.sort_unstable();

        let _ = self.groups.entry(group).or_default();
        let outcomes = members
            .into_iter()
            .map(|(_, member)| (member, self.dispatch(store, member, now, reduced)))
            .collect();
        // Every member may have completed synchronously
        self.settle_group(group);
        outcomes
    }

    /// Dispatch a single node, without group fan-out.
    pub fn dispatch(
        &mut self,
        store: &mut NodeStore,
        id: NodeId,
        now: Instant,
        reduced: bool,
    ) -> DispatchOutcome {
        let Some(node) = store.get_mut(id) else {
            log::debug!("dispatch for unknown node {id}");
            return DispatchOutcome::Skipped(SkipReason::UnknownNode);
        };
        if node.state() != NodeState::Pending {
            log::debug!("ignoring repeat trigger for {id}");
            return DispatchOutcome::Skipped(SkipReason::NotPending);
        }
        let routine = self.preferences.get(node.kind()).clone();
        let group = node.group().map(|(g, _)| g);

        if reduced || self.driver.is_instant() {
            complete(routine.as_ref(), node);
            self.record_finished(id, group);
            return DispatchOutcome::Completed;
        }

        match routine.prepare(node) {
            Ok(Prepared::Ready) => {
                node.set_state(NodeState::Running);
                let delay = routine.start_delay(node);
                let cadence = routine.cadence(node);
                if let Some(g) = group {
                    let _ = self.groups.entry(g).or_default().insert(id);
                }
                let run = ActiveRun::new(id, routine, now, delay, cadence, group);
                let _ = self.runs.insert(id, run);
                DispatchOutcome::Started
            }
            Ok(Prepared::AlreadyApplied) => {
                log::debug!("{} already applied to {id}", routine.name());
                complete(routine.as_ref(), node);
                self.record_finished(id, group);
                DispatchOutcome::Completed
            }
            Err(e) => {
                log::warn!("{} failed to prepare {id}: {e}", routine.name());
                complete(routine.as_ref(), node);
                self.record_finished(id, group);
                DispatchOutcome::Recovered
            }
        }
    }

    /// Sample every frame-cadence run. Returns the number still running.
    pub fn advance_frame(&mut self, store: &mut NodeStore, now: Instant) -> usize {
        self.advance(store, now, PassKind::Frame)
    }

    /// Sample every interval-cadence run whose tick is due.
    pub fn advance_timers(
        &mut self,
        store: &mut NodeStore,
        now: Instant,
    ) -> usize {
        self.advance(store, now, PassKind::Timer)
    }

    fn advance(
        &mut self,
        store: &mut NodeStore,
        now: Instant,
        pass: PassKind,
    ) -> usize {
        let due: Vec<NodeId> = self
            .runs
            .values()
            .filter(|run| run.due(now, pass))
            .map(ActiveRun::node)
            .collect();

        for id in due {
            let Some(node) = store.get_mut(id) else {
                // Node vanished without unregistering; drop its continuation
                let _ = self.cancel(id);
                continue;
            };
            let Some(run) = self.runs.get_mut(&id) else {
                continue;
            };
            let Some(elapsed) = run.elapsed(now) else {
                continue;
            };
            let routine = run.routine().clone();
            let group = run.group();

            match routine.sample(node, elapsed, self.driver.as_ref()) {
                Ok(sample) => {
                    *node.visual_mut() = sample.visual;
                    if !sample.complete {
                        run.schedule_next(now);
                        continue;
                    }
                    complete(routine.as_ref(), node);
                }
                Err(e) => {
                    log::warn!("{} failed on {id}: {e}", routine.name());
                    complete(routine.as_ref(), node);
                }
            }
            let _ = self.runs.remove(&id);
            self.record_finished(id, group);
        }
        self.runs.len()
    }

    /// Drop any continuation for `id` without finishing it. Returns whether
    /// a run existed.
    ///
    /// Used when a node is unregistered; no events are emitted, and a group
    /// left empty by the cancellation is forgotten rather than reported.
    pub fn cancel(&mut self, id: NodeId) -> bool {
        let Some(run) = self.runs.remove(&id) else {
            return false;
        };
        if let Some(group) = run.group() {
            if let Some(members) = self.groups.get_mut(&group) {
                let _ = members.remove(&id);
                if members.is_empty() {
                    let _ = self.groups.remove(&group);
                }
            }
        }
        true
    }

    /// Snap every in-flight run to its end state (reduced motion switched
    /// on mid-flight).
    pub fn finish_all(&mut self, store: &mut NodeStore) -> usize {
        let runs = std::mem::take(&mut self.runs);
        let count = runs.len();
        for (id, run) in runs {
            if let Some(node) = store.get_mut(id) {
                complete(run.routine().as_ref(), node);
            }
            self.record_finished(id, run.group());
        }
        count
    }

    /// Whether `id` has an in-flight run.
    #[must_use]
    pub fn is_running(&self, id: NodeId) -> bool {
        self.runs.contains_key(&id)
    }

    /// Number of in-flight runs.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.runs.len()
    }

    /// Whether any in-flight run is sampled by the frame pass.
    #[must_use]
    pub fn has_frame_runs(&self) -> bool {
        self.runs
            .values()
            .any(|run| run.cadence() == Cadence::Frame)
    }

    /// Whether any in-flight run uses interval cadence.
    #[must_use]
    pub fn has_timer_runs(&self) -> bool {
        self.runs
            .values()
            .any(|run| matches!(run.cadence(), Cadence::Interval(_)))
    }

    /// Take all completion events produced so far.
    pub fn drain_events(&mut self) -> Vec<DispatchEvent> {
        std::mem::take(&mut self.events)
    }

    fn record_finished(&mut self, id: NodeId, group: Option<GroupId>) {
        self.events.push(DispatchEvent::Finished(id));
        let Some(group) = group else {
            return;
        };
        // Members completed during fan-out were never tracked; the trigger
        // settles the group once fan-out ends
        let tracked = self
            .groups
            .get_mut(&group)
            .is_some_and(|members| members.remove(&id));
        if tracked {
            self.settle_group(group);
        }
    }

    fn settle_group(&mut self, group: GroupId) {
        if self.groups.get(&group).is_some_and(FxHashSet::is_empty) {
            let _ = self.groups.remove(&group);
            self.events.push(DispatchEvent::GroupFinished(group));
        }
    }
}

/// Write the routine's end state and mark the node done.
fn complete(routine: &dyn AnimationRoutine, node: &mut Node) {
    routine.finish(node);
    node.set_state(NodeState::Done);
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("driver", &self.driver.name())
            .field("runs", &self.runs.len())
            .field("groups", &self.groups.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use web_time::Duration;

    use super::*;
    use crate::animation::driver::{BuiltinDriver, InstantDriver};
    use crate::animation::routines::{shared, Sample};
    use crate::error::RoutineError;
    use crate::node::{NodeDecl, NodeVisual};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(RoutinePreferences::default(), Arc::new(BuiltinDriver))
    }

    fn register(d: &Dispatcher, store: &mut NodeStore, id: u64, decl: NodeDecl) {
        let node = store.insert(Node::from_decl(NodeId(id), decl)).unwrap();
        d.initialize(node);
    }

    fn run_until_idle(d: &mut Dispatcher, store: &mut NodeStore, t0: Instant) {
        let mut t = t0;
        for _ in 0..1000 {
            let _ = d.advance_timers(store, t);
            if d.advance_frame(store, t) == 0 {
                break;
            }
            t += ms(16);
        }
        assert_eq!(d.active_count(), 0, "runs never settled");
    }

    #[test]
    fn fade_runs_to_completion() {
        let mut d = dispatcher();
        let mut store = NodeStore::new();
        register(&d, &mut store, 1, NodeDecl::new().marker("fade-in"));
        assert_eq!(store.get(NodeId(1)).unwrap().visual().opacity, 0.0);

        let t0 = Instant::now();
        let out = d.trigger(&mut store, NodeId(1), t0, false);
        assert_eq!(out, vec![(NodeId(1), DispatchOutcome::Started)]);
        assert_eq!(store.get(NodeId(1)).unwrap().state(), NodeState::Running);

        let _ = d.advance_frame(&mut store, t0 + ms(300));
        let mid = store.get(NodeId(1)).unwrap().visual().opacity;
        assert!(mid > 0.0 && mid < 1.0);

        assert_eq!(d.advance_frame(&mut store, t0 + ms(600)), 0);
        let node = store.get(NodeId(1)).unwrap();
        assert_eq!(node.state(), NodeState::Done);
        assert_eq!(node.visual().opacity, 1.0);
        assert_eq!(node.visual().translate.y, 0.0);
        assert_eq!(d.drain_events(), vec![DispatchEvent::Finished(NodeId(1))]);
    }

    #[test]
    fn double_trigger_is_absorbed() {
        let mut d = dispatcher();
        let mut store = NodeStore::new();
        register(&d, &mut store, 1, NodeDecl::new().marker("fade-in"));
        let t0 = Instant::now();

        let _ = d.trigger(&mut store, NodeId(1), t0, false);
        let again = d.trigger(&mut store, NodeId(1), t0 + ms(10), false);
        assert_eq!(
            again,
            vec![(NodeId(1), DispatchOutcome::Skipped(SkipReason::NotPending))]
        );
        run_until_idle(&mut d, &mut store, t0);
        let finished = store.get(NodeId(1)).unwrap().visual().clone();

        let after = d.trigger(&mut store, NodeId(1), t0 + ms(5000), false);
        assert_eq!(
            after,
            vec![(NodeId(1), DispatchOutcome::Skipped(SkipReason::NotPending))]
        );
        assert_eq!(store.get(NodeId(1)).unwrap().visual(), &finished);
        assert_eq!(d.drain_events().len(), 1);
    }

    #[test]
    fn unknown_node_is_a_no_op() {
        let mut d = dispatcher();
        let mut store = NodeStore::new();
        let out = d.trigger(&mut store, NodeId(9), Instant::now(), false);
        assert_eq!(
            out,
            vec![(NodeId(9), DispatchOutcome::Skipped(SkipReason::UnknownNode))]
        );
        assert!(d.drain_events().is_empty());
    }

    #[test]
    fn reduced_motion_applies_end_state_synchronously() {
        let mut d = dispatcher();
        let mut store = NodeStore::new();
        register(
            &d,
            &mut store,
            1,
            NodeDecl::new().marker("counter").target(1000.0),
        );
        register(&d, &mut store, 2, NodeDecl::new().marker("typewriter").text("Hi"));
        register(&d, &mut store, 3, NodeDecl::new().marker("reveal"));

        let t0 = Instant::now();
        for id in 1..=3 {
            let out = d.trigger(&mut store, NodeId(id), t0, true);
            assert_eq!(out, vec![(NodeId(id), DispatchOutcome::Completed)]);
        }
        assert_eq!(d.active_count(), 0);
        assert_eq!(
            store.get(NodeId(1)).unwrap().visual().text.as_deref(),
            Some("1000")
        );
        assert_eq!(
            store.get(NodeId(2)).unwrap().visual().text.as_deref(),
            Some("Hi")
        );
        let reveal = store.get(NodeId(3)).unwrap();
        assert!(reveal.revealed());
        assert_eq!(reveal.visual().content_offset_pct, 0.0);
    }

    #[test]
    fn instant_driver_completes_every_dispatch() {
        let mut d = Dispatcher::new(
            RoutinePreferences::default(),
            Arc::new(InstantDriver),
        );
        let mut store = NodeStore::new();
        register(&d, &mut store, 1, NodeDecl::new().marker("fade-in"));
        let out = d.trigger(&mut store, NodeId(1), Instant::now(), false);
        assert_eq!(out, vec![(NodeId(1), DispatchOutcome::Completed)]);
        assert_eq!(store.get(NodeId(1)).unwrap().visual().opacity, 1.0);
    }

    #[test]
    fn stagger_members_start_by_index() {
        let mut d = dispatcher();
        let mut store = NodeStore::new();
        let group = GroupId(1);
        for i in 0..3 {
            register(
                &d,
                &mut store,
                10 + i as u64,
                NodeDecl::new().marker("stagger-item").in_group(group, i),
            );
        }

        // Last member becomes visible first; the whole group still fans out
        let t0 = Instant::now();
        let out = d.trigger(&mut store, NodeId(12), t0, false);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].0, NodeId(10));

        let _ = d.advance_frame(&mut store, t0 + ms(150));
        let opacity = |s: &NodeStore, id| s.get(NodeId(id)).unwrap().visual().opacity;
        assert!(opacity(&store, 10) > 0.0);
        assert!(opacity(&store, 11) > 0.0);
        assert_eq!(opacity(&store, 12), 0.0);

        // Member 1 finishes at 100 + 600ms, member 2 at 200 + 600ms
        let _ = d.advance_frame(&mut store, t0 + ms(700));
        let events = d.drain_events();
        assert!(events.contains(&DispatchEvent::Finished(NodeId(11))));
        assert!(!events.contains(&DispatchEvent::GroupFinished(group)));

        let _ = d.advance_frame(&mut store, t0 + ms(800));
        assert_eq!(
            d.drain_events(),
            vec![
                DispatchEvent::Finished(NodeId(12)),
                DispatchEvent::GroupFinished(group)
            ]
        );

        let again = d.trigger(&mut store, NodeId(11), t0 + ms(900), false);
        assert_eq!(
            again,
            vec![(NodeId(11), DispatchOutcome::Skipped(SkipReason::NotPending))]
        );
    }

    #[test]
    fn stagger_under_reduced_motion_finishes_group_at_once() {
        let mut d = dispatcher();
        let mut store = NodeStore::new();
        for i in 0..2 {
            register(
                &d,
                &mut store,
                i as u64,
                NodeDecl::new().marker("stagger-item").in_group(GroupId(4), i),
            );
        }
        let _ = d.trigger(&mut store, NodeId(0), Instant::now(), true);
        let events = d.drain_events();
        assert_eq!(events.last(), Some(&DispatchEvent::GroupFinished(GroupId(4))));
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn typewriter_runs_on_timer_pass_only() {
        let mut d = dispatcher();
        let mut store = NodeStore::new();
        register(&d, &mut store, 1, NodeDecl::new().marker("typewriter").text("abc"));
        let t0 = Instant::now();
        let _ = d.trigger(&mut store, NodeId(1), t0, false);
        assert!(d.has_timer_runs());

        let _ = d.advance_frame(&mut store, t0 + ms(100));
        assert_eq!(store.get(NodeId(1)).unwrap().visual().text.as_deref(), Some(""));

        let _ = d.advance_timers(&mut store, t0 + ms(100));
        assert_eq!(store.get(NodeId(1)).unwrap().visual().text.as_deref(), Some("ab"));

        assert_eq!(d.advance_timers(&mut store, t0 + ms(150)), 0);
        assert_eq!(
            store.get(NodeId(1)).unwrap().visual().text.as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn repeat_trigger_keeps_split_title_intact() {
        let mut d = dispatcher();
        let mut store = NodeStore::new();
        register(
            &d,
            &mut store,
            1,
            NodeDecl::new().marker("hero-title").text("Forge EC"),
        );
        let t0 = Instant::now();
        assert_eq!(
            d.trigger(&mut store, NodeId(1), t0, false),
            vec![(NodeId(1), DispatchOutcome::Started)]
        );
        let split = store.get(NodeId(1)).unwrap().visual().chars.clone();
        assert_eq!(split.len(), 8);

        assert_eq!(
            d.trigger(&mut store, NodeId(1), t0 + ms(16), false),
            vec![(NodeId(1), DispatchOutcome::Skipped(SkipReason::NotPending))]
        );
        let units: Vec<char> = store
            .get(NodeId(1))
            .unwrap()
            .visual()
            .chars
            .iter()
            .map(|u| u.ch)
            .collect();
        assert_eq!(units, split.iter().map(|u| u.ch).collect::<Vec<_>>());

        run_until_idle(&mut d, &mut store, t0 + ms(32));
        assert_eq!(
            d.dispatch(&mut store, NodeId(1), t0 + ms(5000), false),
            DispatchOutcome::Skipped(SkipReason::NotPending)
        );
        let visual = store.get(NodeId(1)).unwrap().visual();
        assert_eq!(visual.chars.len(), 8);
        assert_eq!(visual.visible_text().as_deref(), Some("Forge EC"));
    }

    struct Exploding;

    impl AnimationRoutine for Exploding {
        fn name(&self) -> &'static str {
            "exploding"
        }

        fn initial(&self, node: &Node) -> NodeVisual {
            NodeVisual {
                opacity: 0.0,
                ..node.visual().clone()
            }
        }

        fn sample(
            &self,
            _node: &Node,
            _elapsed: Duration,
            _driver: &dyn crate::animation::driver::MotionDriver,
        ) -> Result<Sample, RoutineError> {
            Err(RoutineError::Interrupted("boom".to_owned()))
        }

        fn finish(&self, node: &mut Node) {
            node.visual_mut().opacity = 1.0;
        }

        fn duration(&self, _node: &Node) -> Duration {
            ms(100)
        }
    }

    #[test]
    fn failing_routine_forces_end_state() {
        let mut d = dispatcher();
        d.set_routine(AnimationKind::Fade, shared(Exploding));
        let mut store = NodeStore::new();
        register(&d, &mut store, 1, NodeDecl::new().marker("fade-in"));
        register(&d, &mut store, 2, NodeDecl::new().marker("reveal"));
        let t0 = Instant::now();
        let _ = d.trigger(&mut store, NodeId(1), t0, false);
        let _ = d.trigger(&mut store, NodeId(2), t0, false);

        let _ = d.advance_frame(&mut store, t0 + ms(16));
        let node = store.get(NodeId(1)).unwrap();
        assert_eq!(node.state(), NodeState::Done);
        assert_eq!(node.visual().opacity, 1.0);
        // Other nodes keep animating
        assert!(d.is_running(NodeId(2)));
        assert_eq!(d.drain_events(), vec![DispatchEvent::Finished(NodeId(1))]);
    }

    #[test]
    fn counter_without_target_recovers() {
        let mut d = dispatcher();
        let mut store = NodeStore::new();
        register(&d, &mut store, 1, NodeDecl::new().marker("counter").text("42"));
        let out = d.trigger(&mut store, NodeId(1), Instant::now(), false);
        assert_eq!(out, vec![(NodeId(1), DispatchOutcome::Recovered)]);
        let node = store.get(NodeId(1)).unwrap();
        assert_eq!(node.state(), NodeState::Done);
        assert_eq!(node.visual().opacity, 1.0);
    }

    #[test]
    fn finish_all_snaps_running_nodes() {
        let mut d = dispatcher();
        let mut store = NodeStore::new();
        register(
            &d,
            &mut store,
            1,
            NodeDecl::new().marker("counter").target(500.0),
        );
        let t0 = Instant::now();
        let _ = d.trigger(&mut store, NodeId(1), t0, false);
        let _ = d.advance_frame(&mut store, t0 + ms(100));

        assert_eq!(d.finish_all(&mut store), 1);
        assert_eq!(
            store.get(NodeId(1)).unwrap().visual().text.as_deref(),
            Some("500")
        );
        assert_eq!(d.active_count(), 0);
    }

    #[test]
    fn cancel_drops_continuation_silently() {
        let mut d = dispatcher();
        let mut store = NodeStore::new();
        register(&d, &mut store, 1, NodeDecl::new().marker("fade-in"));
        let t0 = Instant::now();
        let _ = d.trigger(&mut store, NodeId(1), t0, false);
        let _ = store.remove(NodeId(1));
        assert!(d.cancel(NodeId(1)));
        assert!(!d.cancel(NodeId(1)));
        assert_eq!(d.advance_frame(&mut store, t0 + ms(1000)), 0);
        assert!(d.drain_events().is_empty());
    }
}
