//! Per-frame and per-tick scheduling for MotionEngine.

use web_time::Instant;

use super::{MotionEngine, MotionEvent};

impl MotionEngine {
    /// Run one rendering frame at `now`. Returns whether another frame is
    /// needed.
    ///
    /// Order within a frame:
    /// 1. queued inputs (gate changes take effect before anything reads it)
    /// 2. scroll relay resolves, then subscribers run
    /// 3. parallax and progress bars
    /// 4. entered nodes are dispatched
    /// 5. frame-cadence routines advance
    /// 6. pointer field and interaction feedback
    /// 7. at most one announcement is released
    pub fn frame(&mut self, now: Instant) -> bool {
        self.drain_inputs(now);
        let reduced = self.gate.is_reduced();

        if let Some(frame) = self.scroll.resolve(now, reduced) {
            self.scroll.publish(&frame);
            self.apply_scroll_effects();
        }

        for entered in self.visibility.drain() {
            let _ = self.dispatcher.trigger(
                &mut self.store,
                entered.node,
                now,
                reduced,
            );
        }
        let _ = self.dispatcher.advance_frame(&mut self.store, now);

        self.apply_pointer(now, reduced);
        self.apply_feedback(now);
        self.collect_dispatch_events();

        if let Some(message) = self.announcements.drain(now) {
            self.events.push(MotionEvent::Announcement(message));
        }
        self.timing.end_frame(now);
        self.needs_frame(now)
    }

    /// Advance fixed-interval routines at `now`. Returns whether the timer
    /// should keep running.
    pub fn tick_timers(&mut self, now: Instant) -> bool {
        let _ = self.dispatcher.advance_timers(&mut self.store, now);
        self.collect_dispatch_events();
        self.dispatcher.has_timer_runs()
    }

    /// Whether anything would change on the next frame.
    #[must_use]
    pub fn needs_frame(&self, now: Instant) -> bool {
        self.dispatcher.has_frame_runs()
            || self.pointer.is_active(now)
            || self.feedback.is_active(now)
            || self.scroll.is_settling()
            || !self.announcements.is_empty()
    }

    pub(super) fn apply_scroll_effects(&mut self) {
        let reduced = self.gate.is_reduced();
        let targets: Vec<_> = self
            .store
            .iter()
            .filter(|n| n.parallax().is_some() || n.is_progress_bar())
            .map(|n| (n.id(), n.parallax(), n.is_progress_bar()))
            .collect();
        let progress = self.scroll.progress();
        for (id, parallax, progress_bar) in targets {
            if let Some(speed) = parallax {
                let offset = if reduced { 0.0 } else { self.scroll.parallax(speed) };
                let _ = self.store.set_channel(id, offset, |v| &mut v.parallax_y);
            }
            if progress_bar {
                let _ = self
                    .store
                    .set_channel(id, Some(progress), |v| &mut v.progress);
            }
        }
    }

    pub(super) fn apply_pointer(&mut self, now: Instant, reduced: bool) {
        for (id, displacement) in self.pointer.update(now, reduced) {
            let _ = self
                .store
                .set_channel(id, displacement, |v| &mut v.magnetic);
        }
    }

    pub(super) fn apply_feedback(&mut self, now: Instant) {
        for (id, fb) in self.feedback.update(now) {
            let _ = self.store.set_channel(id, fb.scale, |v| &mut v.scale);
            let _ = self.store.set_channel(id, fb.glow, |v| &mut v.glow);
            let _ = self.store.set_channel(id, fb.ripple, |v| &mut v.ripple);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use glam::Vec2;
    use web_time::Duration;

    use super::*;
    use crate::animation::driver::MotionDriver;
    use crate::animation::routines::{shared, AnimationRoutine, Fade, Prepared, Sample};
    use crate::animation::{GateChange, SharedDriver};
    use crate::error::{MotionError, RoutineError};
    use crate::node::{
        AnimationKind, Bounds, CounterFormat, GroupId, Node, NodeDecl, NodeId, NodeState,
        NodeVisual,
    };
    use crate::options::MotionOptions;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn native_scroll() -> MotionOptions {
        let mut options = MotionOptions::default();
        options.scroll.smooth = false;
        options
    }

    /// Run frames every 16ms until idle; returns the time reached.
    fn settle(engine: &mut MotionEngine, from: Instant) -> Instant {
        let mut t = from;
        for _ in 0..500 {
            let _ = engine.tick_timers(t);
            if !engine.frame(t) {
                break;
            }
            t += ms(16);
        }
        t
    }

    #[test]
    fn visibility_feed_drives_fade_to_completion() {
        let (mut engine, feed) = MotionEngine::new(MotionOptions::default());
        let t0 = Instant::now();
        engine
            .register(NodeId(1), NodeDecl::new().marker("fade-in"), t0)
            .unwrap();
        assert_eq!(engine.visual(NodeId(1)).unwrap().opacity, 0.0);

        assert!(feed.visibility(NodeId(1), 0.4));
        assert!(engine.frame(t0));
        assert_eq!(engine.state(NodeId(1)), Some(NodeState::Running));

        let _ = settle(&mut engine, t0);
        assert_eq!(engine.state(NodeId(1)), Some(NodeState::Done));
        assert_eq!(engine.visual(NodeId(1)).unwrap().opacity, 1.0);
        assert_eq!(engine.drain_events(), vec![MotionEvent::Finished(NodeId(1))]);
    }

    #[test]
    fn reduced_motion_finishes_in_the_entering_frame() {
        let (mut engine, feed) = MotionEngine::new(MotionOptions::default());
        let t0 = Instant::now();
        engine
            .register(NodeId(1), NodeDecl::new().marker("hero-title").text("Forge EC"), t0)
            .unwrap();
        engine
            .register(
                NodeId(2),
                NodeDecl::new()
                    .marker("stat-number")
                    .target(1000.0)
                    .format(CounterFormat::Percentage),
                t0,
            )
            .unwrap();

        let _ = feed.reduced_motion(true);
        let _ = feed.visibility(NodeId(1), 1.0);
        let _ = feed.visibility(NodeId(2), 1.0);
        let _ = engine.frame(t0);

        let title = engine.visual(NodeId(1)).unwrap();
        assert_eq!(title.opacity, 1.0);
        assert!(!title.is_split());
        let counter = engine.visual(NodeId(2)).unwrap();
        assert_eq!(counter.text.as_deref(), Some("1000%"));

        let events = engine.drain_events();
        assert!(events.contains(&MotionEvent::Finished(NodeId(1))));
        assert!(events.contains(&MotionEvent::Finished(NodeId(2))));
        // Counter result is announced in the same frame
        assert!(events.contains(&MotionEvent::Announcement("1000%".to_owned())));
    }

    /// Fade that counts how often it is prepared.
    struct CountingFade {
        fade: Fade,
        prepared: Arc<AtomicUsize>,
    }

    impl AnimationRoutine for CountingFade {
        fn initial(&self, node: &Node) -> NodeVisual {
            self.fade.initial(node)
        }

        fn prepare(&self, node: &mut Node) -> Result<Prepared, RoutineError> {
            let _ = self.prepared.fetch_add(1, Ordering::SeqCst);
            self.fade.prepare(node)
        }

        fn sample(
            &self,
            node: &Node,
            elapsed: Duration,
            driver: &dyn MotionDriver,
        ) -> Result<Sample, RoutineError> {
            self.fade.sample(node, elapsed, driver)
        }

        fn finish(&self, node: &mut Node) {
            self.fade.finish(node);
        }

        fn duration(&self, node: &Node) -> Duration {
            self.fade.duration(node)
        }
    }

    #[test]
    fn routine_is_prepared_once_per_node() {
        let (mut engine, feed) = MotionEngine::new(MotionOptions::default());
        let prepared = Arc::new(AtomicUsize::new(0));
        engine.set_routine(
            AnimationKind::Fade,
            shared(CountingFade {
                fade: Fade::default(),
                prepared: Arc::clone(&prepared),
            }),
        );
        let t0 = Instant::now();
        engine
            .register(NodeId(1), NodeDecl::new().marker("fade-in"), t0)
            .unwrap();

        let _ = feed.visibility(NodeId(1), 1.0);
        let _ = engine.frame(t0);
        assert_eq!(engine.state(NodeId(1)), Some(NodeState::Running));

        // Leave and re-enter while running
        let _ = feed.visibility(NodeId(1), 0.0);
        let _ = feed.visibility(NodeId(1), 1.0);
        let _ = engine.frame(t0 + ms(16));
        let _ = engine.dispatch(NodeId(1), t0 + ms(20));

        let t = settle(&mut engine, t0 + ms(32));
        assert_eq!(engine.state(NodeId(1)), Some(NodeState::Done));

        // Re-entry after completion and gate flips
        let _ = feed.visibility(NodeId(1), 0.0);
        let _ = feed.visibility(NodeId(1), 1.0);
        let _ = engine.frame(t + ms(16));
        let _ = engine.set_reduced_motion(true, t + ms(32));
        let _ = engine.set_reduced_motion(false, t + ms(48));
        let _ = engine.dispatch(NodeId(1), t + ms(64));
        let _ = engine.frame(t + ms(80));

        assert_eq!(prepared.load(Ordering::SeqCst), 1);
        assert_eq!(engine.visual(NodeId(1)).unwrap().opacity, 1.0);
    }

    #[test]
    fn title_split_survives_repeat_entries() {
        let (mut engine, feed) = MotionEngine::new(MotionOptions::default());
        let t0 = Instant::now();
        engine
            .register(NodeId(1), NodeDecl::new().marker("hero-title").text("Forge EC"), t0)
            .unwrap();
        let _ = feed.visibility(NodeId(1), 1.0);
        let _ = engine.frame(t0);
        let split: Vec<char> = engine
            .visual(NodeId(1))
            .unwrap()
            .chars
            .iter()
            .map(|u| u.ch)
            .collect();
        assert_eq!(split.len(), 8);

        let _ = engine.dispatch(NodeId(1), t0 + ms(16));
        let _ = feed.visibility(NodeId(1), 0.0);
        let _ = feed.visibility(NodeId(1), 1.0);
        let t = settle(&mut engine, t0 + ms(32));
        let _ = engine.dispatch(NodeId(1), t + ms(16));

        let visual = engine.visual(NodeId(1)).unwrap();
        let units: Vec<char> = visual.chars.iter().map(|u| u.ch).collect();
        assert_eq!(units, split);
        assert_eq!(visual.visible_text().as_deref(), Some("Forge EC"));
    }

    #[test]
    fn gate_flip_snaps_running_animations() {
        let (mut engine, _feed) = MotionEngine::new(MotionOptions::default());
        let t0 = Instant::now();
        engine
            .register(NodeId(1), NodeDecl::new().marker("counter").target(250.0), t0)
            .unwrap();
        let _ = engine.dispatch(NodeId(1), t0);
        let _ = engine.frame(t0 + ms(100));
        assert_eq!(engine.state(NodeId(1)), Some(NodeState::Running));

        assert_eq!(engine.set_reduced_motion(true, t0 + ms(116)), GateChange::Reduced);
        assert_eq!(engine.state(NodeId(1)), Some(NodeState::Done));
        assert_eq!(engine.visual(NodeId(1)).unwrap().text.as_deref(), Some("250"));
        assert_eq!(engine.set_reduced_motion(true, t0 + ms(120)), GateChange::Unchanged);

        // Restoring motion does not re-animate
        let _ = engine.set_reduced_motion(false, t0 + ms(130));
        let _ = engine.dispatch(NodeId(1), t0 + ms(140));
        assert_eq!(engine.visual(NodeId(1)).unwrap().text.as_deref(), Some("250"));
    }

    #[test]
    fn scroll_subscribers_run_once_per_frame() {
        let (mut engine, feed) = MotionEngine::new(native_scroll());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _ = engine.subscribe_scroll(move |f| sink.borrow_mut().push(f.offset));

        for i in 0..100_u8 {
            let _ = feed.scroll(f32::from(i));
        }
        let _ = engine.frame(Instant::now());
        assert_eq!(*seen.borrow(), vec![99.0]);
        assert_eq!(engine.current_offset(), 99.0);
    }

    #[test]
    fn parallax_and_progress_follow_scroll() {
        let (mut engine, feed) = MotionEngine::new(native_scroll());
        let t0 = Instant::now();
        engine
            .register(NodeId(1), NodeDecl::new().parallax(0.5), t0)
            .unwrap();
        engine
            .register(NodeId(2), NodeDecl::new().progress_bar(), t0)
            .unwrap();
        let _ = feed.resize(2000.0, 1000.0);
        let _ = feed.scroll(400.0);
        let _ = engine.frame(t0);

        assert_eq!(engine.visual(NodeId(1)).unwrap().parallax_y, -200.0);
        assert_eq!(engine.visual(NodeId(2)).unwrap().progress, Some(0.4));

        // Parallax is decorative and turns off under reduced motion
        let _ = engine.set_reduced_motion(true, t0 + ms(16));
        assert_eq!(engine.visual(NodeId(1)).unwrap().parallax_y, 0.0);
        assert_eq!(engine.visual(NodeId(2)).unwrap().progress, Some(0.4));
    }

    #[test]
    fn magnetic_node_tracks_pointer_and_springs_back() {
        let (mut engine, feed) = MotionEngine::new(MotionOptions::default());
        let t0 = Instant::now();
        engine
            .register(
                NodeId(1),
                NodeDecl::new()
                    .magnetic()
                    .bounds(Bounds::new(0.0, 0.0, 100.0, 100.0)),
                t0,
            )
            .unwrap();
        let _ = feed.pointer_move(100.0, 50.0);
        assert!(engine.frame(t0));
        let pulled = engine.visual(NodeId(1)).unwrap().magnetic;
        assert!(pulled.x > 0.0);
        assert_eq!(pulled.y, 0.0);

        let _ = feed.pointer_leave();
        let end = settle(&mut engine, t0 + ms(16));
        assert!(end > t0 + ms(600));
        assert_eq!(engine.visual(NodeId(1)).unwrap().magnetic, Vec2::ZERO);
    }

    #[test]
    fn registration_follows_the_host_clock() {
        let (mut engine, feed) = MotionEngine::new(MotionOptions::default());
        // Host clock well ahead of the wall clock
        let t_reg = Instant::now() + Duration::from_secs(3600);
        engine
            .register(
                NodeId(1),
                NodeDecl::new()
                    .magnetic()
                    .bounds(Bounds::new(0.0, 0.0, 100.0, 100.0)),
                t_reg,
            )
            .unwrap();
        let field = engine.pointer.field(NodeId(1)).unwrap();
        assert!(!field.is_active(t_reg));
        assert_eq!(field.displacement(t_reg), Vec2::ZERO);
        assert!(!engine.needs_frame(t_reg));

        let _ = feed.pointer_move(100.0, 50.0);
        assert!(engine.frame(t_reg + ms(16)));
        assert!(engine.visual(NodeId(1)).unwrap().magnetic.x > 0.0);
        let _ = feed.pointer_leave();
        let _ = settle(&mut engine, t_reg + ms(32));
        assert_eq!(engine.visual(NodeId(1)).unwrap().magnetic, Vec2::ZERO);
    }

    #[test]
    fn typewriter_advances_on_timer_ticks() {
        let (mut engine, feed) = MotionEngine::new(MotionOptions::default());
        let t0 = Instant::now();
        engine
            .register(NodeId(1), NodeDecl::new().marker("typewriter").text("Forge"), t0)
            .unwrap();
        let _ = feed.visibility(NodeId(1), 1.0);
        assert!(!engine.frame(t0));
        assert!(engine.tick_timers(t0 + ms(100)));
        assert_eq!(engine.visual(NodeId(1)).unwrap().text.as_deref(), Some("Fo"));
        assert!(!engine.tick_timers(t0 + ms(250)));
        assert_eq!(engine.visual(NodeId(1)).unwrap().text.as_deref(), Some("Forge"));
    }

    #[test]
    fn stagger_group_reports_completion() {
        let (mut engine, feed) = MotionEngine::new(MotionOptions::default());
        let t0 = Instant::now();
        for i in 0..3 {
            engine
                .register(
                    NodeId(i as u64),
                    NodeDecl::new().marker("stagger-item").in_group(GroupId(7), i),
                    t0,
                )
                .unwrap();
        }
        let _ = feed.visibility(NodeId(0), 1.0);
        let _ = settle(&mut engine, t0);
        let events = engine.drain_events();
        assert_eq!(events.last(), Some(&MotionEvent::GroupFinished(GroupId(7))));
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn unregister_cancels_silently() {
        let (mut engine, feed) = MotionEngine::new(MotionOptions::default());
        let t0 = Instant::now();
        engine
            .register(NodeId(1), NodeDecl::new().marker("fade-in"), t0)
            .unwrap();
        let _ = feed.visibility(NodeId(1), 1.0);
        let _ = engine.frame(t0);
        assert!(engine.unregister(NodeId(1)));
        assert!(!engine.unregister(NodeId(1)));
        let _ = settle(&mut engine, t0 + ms(16));
        assert!(engine.drain_events().is_empty());
        // Late inputs for the removed node are ignored
        let _ = feed.visibility(NodeId(1), 1.0);
        let _ = feed.press(NodeId(1), 1.0, 1.0);
        assert!(!engine.frame(t0 + ms(2000)));
    }

    #[test]
    fn duplicate_and_invalid_registration() {
        let (mut engine, _feed) = MotionEngine::new(MotionOptions::default());
        let t0 = Instant::now();
        engine.register(NodeId(1), NodeDecl::new(), t0).unwrap();
        assert!(matches!(
            engine.register(NodeId(1), NodeDecl::new(), t0),
            Err(MotionError::DuplicateNode(NodeId(1)))
        ));
        assert!(matches!(
            engine.register(NodeId(2), NodeDecl::new().thresholds(vec![2.0]), t0),
            Err(MotionError::InvalidThreshold(_))
        ));
        assert_eq!(engine.node_count(), 1);
    }

    #[test]
    fn unavailable_driver_degrades_to_instant() {
        let factory = || -> Result<SharedDriver, MotionError> {
            Err(MotionError::DriverUnavailable("offline".to_owned()))
        };
        let (mut engine, _feed) =
            MotionEngine::with_driver(MotionOptions::default(), &factory);
        let t0 = Instant::now();
        assert_eq!(engine.driver_name(), "instant");
        engine
            .register(NodeId(1), NodeDecl::new().marker("reveal"), t0)
            .unwrap();
        let _ = engine.dispatch(NodeId(1), t0);
        assert_eq!(engine.state(NodeId(1)), Some(NodeState::Done));

        let ok = || -> Result<SharedDriver, MotionError> {
            Ok(Arc::new(crate::animation::BuiltinDriver))
        };
        let (engine, _feed) = MotionEngine::with_driver(MotionOptions::default(), &ok);
        assert_eq!(engine.driver_name(), "builtin");
    }

    #[test]
    fn announcements_are_rate_limited() {
        let (mut engine, _feed) = MotionEngine::new(MotionOptions::default());
        engine.announce("first");
        engine.announce("second");
        let t0 = Instant::now();
        let _ = engine.frame(t0);
        let _ = engine.frame(t0 + ms(500));
        assert_eq!(
            engine.drain_events(),
            vec![MotionEvent::Announcement("first".to_owned())]
        );
        let _ = engine.frame(t0 + ms(1000));
        assert_eq!(
            engine.drain_events(),
            vec![MotionEvent::Announcement("second".to_owned())]
        );
    }

    #[test]
    fn press_spawns_ripple_and_marks_dirty() {
        let (mut engine, feed) = MotionEngine::new(MotionOptions::default());
        let t0 = Instant::now();
        engine
            .register(
                NodeId(1),
                NodeDecl::new().bounds(Bounds::new(10.0, 10.0, 40.0, 30.0)),
                t0,
            )
            .unwrap();
        let _ = engine.take_dirty();
        let _ = feed.press(NodeId(1), 20.0, 15.0);
        assert!(engine.frame(t0));
        assert_eq!(engine.take_dirty(), vec![NodeId(1)]);
        let ripple = engine.visual(NodeId(1)).unwrap().ripple.unwrap();
        assert_eq!(ripple.center, Vec2::new(20.0, 15.0));
        // Nothing changes on a second identical frame
        let _ = engine.frame(t0);
        assert!(engine.take_dirty().is_empty());
    }
}
