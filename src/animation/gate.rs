//! Reduced-motion gate.

/// Transition reported by [`MotionGate::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateChange {
    /// The preference did not change.
    Unchanged,
    /// Motion is now reduced; running work must be finished.
    Reduced,
    /// Full motion is allowed again.
    Restored,
}

/// Tracks the user's reduced-motion preference.
///
/// Every animating subsystem consults the gate before starting work: when
/// reduced, routines jump straight to their end states and continuous
/// effects (pointer field, parallax, smoothing, ripples) stay off.
#[derive(Debug, Clone, Default)]
pub struct MotionGate {
    reduced: bool,
    changes: u64,
}

impl MotionGate {
    /// Gate with the given initial preference.
    #[must_use]
    pub fn new(reduced: bool) -> Self {
        Self { reduced, changes: 0 }
    }

    /// Whether motion is currently reduced.
    #[must_use]
    pub fn is_reduced(&self) -> bool {
        self.reduced
    }

    /// Apply a preference change from the host. Repeated values are no-ops.
    pub fn set(&mut self, reduced: bool) -> GateChange {
        if reduced == self.reduced {
            return GateChange::Unchanged;
        }
        self.reduced = reduced;
        self.changes += 1;
        log::info!(
            "reduced motion {}",
            if reduced { "enabled" } else { "disabled" }
        );
        if reduced {
            GateChange::Reduced
        } else {
            GateChange::Restored
        }
    }

    /// Number of effective preference flips observed.
    #[must_use]
    pub fn changes(&self) -> u64 {
        self.changes
    }
}
