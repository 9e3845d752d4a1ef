//! Input handling for MotionEngine.

use glam::Vec2;
use web_time::Instant;

use super::MotionEngine;
use crate::animation::GateChange;
use crate::input::MotionInput;
use crate::scroll::ScrollMetrics;

impl MotionEngine {
    /// Apply one input immediately.
    ///
    /// Visibility enters are queued and dispatched on the next frame;
    /// everything else updates state the next frame reads.
    pub fn handle_input(&mut self, input: MotionInput, now: Instant) {
        let reduced = self.gate.is_reduced();
        match input {
            MotionInput::Visibility { node, ratio } => {
                let _ = self.visibility.observe(node, ratio);
            }
            MotionInput::PointerMove { x, y } => {
                self.pointer.pointer_move(Vec2::new(x, y));
            }
            MotionInput::PointerLeave => self.pointer.pointer_leave(),
            MotionInput::Press { node, x, y } => {
                let Some(target) = self.store.get(node) else {
                    log::debug!("press on unknown node {node}");
                    return;
                };
                let bounds = target.bounds();
                self.feedback
                    .press(node, Vec2::new(x, y), bounds, now, reduced);
            }
            MotionInput::Release { node } => {
                if self.store.contains(node) {
                    self.feedback.release(node, now, reduced);
                }
            }
            MotionInput::Hover { node, entered } => {
                if self.store.contains(node) {
                    self.feedback.hover(node, entered, now, reduced);
                } else {
                    log::debug!("hover on unknown node {node}");
                }
            }
            MotionInput::ReducedMotion(reduced) => {
                let _ = self.set_reduced_motion(reduced, now);
            }
            MotionInput::Scroll { offset } => self.scroll.on_raw_scroll(offset),
            MotionInput::Resize {
                content_height,
                viewport_height,
            } => {
                self.scroll.set_metrics(ScrollMetrics {
                    content_height,
                    viewport_height,
                });
                self.apply_scroll_effects();
            }
            MotionInput::Layout { node, bounds } => {
                let Some(target) = self.store.get_mut(node) else {
                    log::debug!("layout for unknown node {node}");
                    return;
                };
                target.set_bounds(bounds);
                if target.is_magnetic()
                    && !self.pointer.set_center(node, bounds.center())
                {
                    self.pointer.register(node, bounds.center(), now);
                }
            }
        }
    }

    /// Apply a reduced-motion preference change.
    ///
    /// Switching to reduced snaps every in-flight run, the pointer field and
    /// all feedback to their end states within this call. Switching back
    /// never re-animates anything already finished.
    pub fn set_reduced_motion(&mut self, reduced: bool, now: Instant) -> GateChange {
        let change = self.gate.set(reduced);
        match change {
            GateChange::Reduced => {
                let snapped = self.dispatcher.finish_all(&mut self.store);
                log::debug!("snapped {snapped} running animations");
                self.pointer.reset(now);
                self.apply_pointer(now, true);
                self.feedback.settle(now);
                self.apply_feedback(now);
                self.apply_scroll_effects();
                self.collect_dispatch_events();
            }
            GateChange::Restored => self.apply_scroll_effects(),
            GateChange::Unchanged => {}
        }
        change
    }

    pub(super) fn drain_inputs(&mut self, now: Instant) {
        while let Ok(input) = self.input_rx.try_recv() {
            self.handle_input(input, now);
        }
    }
}
