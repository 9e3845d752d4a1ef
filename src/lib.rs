// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Frame-driven animation orchestration for content sites.
//!
//! Forge Motion decides *when* and *how* page elements animate: reveal
//! routines fire as nodes scroll into view, magnetic elements follow the
//! pointer and nudge their neighbors, scroll-linked effects are coalesced to
//! one update per frame, and presses and hovers get tactile feedback. The
//! engine never touches a real element; it writes per-node
//! [`node::NodeVisual`] state that a host maps onto the page.
//!
//! # Key entry points
//!
//! - [`MotionEngine`] - owns every subsystem and runs frames
//! - [`InputFeed`] - cloneable sender for observer, pointer and scroll input
//! - [`MotionOptions`] - tunable timings and strengths with TOML presets
//! - [`animation::routines`] - the reveal routines and their shared trait
//!
//! # Architecture
//!
//! Hosts publish [`input::MotionInput`] values through the feed. Each call to
//! [`MotionEngine::frame`] drains them, resolves the scroll position once,
//! dispatches nodes that became visible, advances running routines and the
//! pointer field, and releases at most one screen-reader announcement. A
//! platform reduced-motion preference short-circuits every routine to its
//! end state.
//!
//! With the `web` feature, the `web` module binds the engine to DOM
//! elements.

pub mod animation;
pub mod announce;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod input;
pub mod node;
pub mod options;
pub mod pointer;
pub mod scroll;
pub mod util;
pub mod visibility;
#[cfg(feature = "web")]
pub mod web;

pub use engine::{MotionEngine, MotionEvent};
pub use error::{MotionError, RoutineError};
pub use input::{InputFeed, MotionInput};
pub use node::{NodeDecl, NodeId};
pub use options::MotionOptions;
