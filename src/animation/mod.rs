//! Scroll-triggered animation system.
//!
//! Nodes are classified into an [`AnimationKind`](crate::node::AnimationKind)
//! at registration. When a node enters the viewport the [`Dispatcher`] looks
//! up the kind's routine in [`RoutinePreferences`], consults the
//! [`MotionGate`], and either schedules an [`ActiveRun`] or applies the end
//! state synchronously.

pub mod dispatcher;
pub mod driver;
pub mod gate;
pub mod preferences;
pub mod routines;
pub mod runner;

pub use dispatcher::{DispatchEvent, DispatchOutcome, Dispatcher, SkipReason};
pub use driver::{
    select_driver, BuiltinDriver, DriverFactory, InstantDriver, MotionDriver,
    SharedDriver,
};
pub use gate::{GateChange, MotionGate};
pub use preferences::RoutinePreferences;
pub use runner::ActiveRun;
