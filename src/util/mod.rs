//! Shared utilities for the motion engine.
//!
//! Helpers for frame timing, easing curves and retargetable tweens.

pub mod easing;
pub mod frame_timing;
pub mod tween;
