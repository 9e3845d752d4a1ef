//! Timing drivers: the capability that turns raw progress into eased
//! progress.
//!
//! A site may inject a richer driver (e.g. one backed by a host animation
//! library). When none is available the engine degrades to
//! [`InstantDriver`], which jumps every routine to its end state, so
//! content is never left hidden.

use std::sync::Arc;

use crate::error::MotionError;
use crate::util::easing::EasingFunction;

/// Capability used by routines to evaluate easing curves.
pub trait MotionDriver: Send + Sync {
    /// Name for debugging/logging.
    fn name(&self) -> &'static str;

    /// Eased value for raw progress `t` in [0, 1].
    fn ease(&self, easing: EasingFunction, t: f32) -> f32 {
        easing.evaluate(t)
    }

    /// Whether this driver has no notion of time at all. Routines driven by
    /// an instant driver are finished at dispatch.
    fn is_instant(&self) -> bool {
        false
    }
}

/// Evaluates the crate's own easing curves.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDriver;

impl MotionDriver for BuiltinDriver {
    fn name(&self) -> &'static str {
        "builtin"
    }
}

/// Fallback that applies every end state immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantDriver;

impl MotionDriver for InstantDriver {
    fn name(&self) -> &'static str {
        "instant"
    }

    fn ease(&self, _easing: EasingFunction, _t: f32) -> f32 {
        1.0
    }

    fn is_instant(&self) -> bool {
        true
    }
}

/// Type alias for shared driver references.
pub type SharedDriver = Arc<dyn MotionDriver>;

/// Deferred construction of a driver that may be unavailable at runtime.
pub trait DriverFactory {
    /// Try to build the driver.
    fn create(&self) -> Result<SharedDriver, MotionError>;
}

impl<F> DriverFactory for F
where
    F: Fn() -> Result<SharedDriver, MotionError>,
{
    fn create(&self) -> Result<SharedDriver, MotionError> {
        self()
    }
}

/// Build a driver from `factory`, falling back to [`InstantDriver`] when it
/// fails.
#[must_use]
pub fn select_driver(factory: &dyn DriverFactory) -> SharedDriver {
    match factory.create() {
        Ok(driver) => {
            log::debug!("motion driver: {}", driver.name());
            driver
        }
        Err(e) => {
            log::warn!("{e}; falling back to instant end states");
            Arc::new(InstantDriver)
        }
    }
}
