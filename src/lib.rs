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

//! Interactive 3D dental treatment simulation engine.
//!
//! Orthoviz models stylized dental arches for three jaw-misalignment
//! variants, a drag-and-drop clear-aligner device, and the eased
//! correction of the lower arch toward its aligned pose, together with
//! the treatment metadata (progress percentage, measurements, milestone
//! timeline) that display panels render.
//!
//! # Key entry points
//!
//! - [`session::SimSession`] - the interaction/animation state machine
//! - [`scene::Scene`] - the retained scene graph of arch and device nodes
//! - [`options::Options`] - runtime configuration (simulation, display,
//!   overlay)
//! - [`treatment`] - treatment descriptions, records, and timelines
//!
//! # Architecture
//!
//! The crate is a headless, single-threaded core. The host owns the
//! frame loop and calls [`session::SimSession::tick`] once per rendered
//! frame; pointer input arrives as scene-space rays (see
//! [`camera::TurntableCamera::screen_ray`]) and selection changes as
//! [`session::SimCommand`] values. Three independent clocks coexist:
//! the per-frame scene rebuild, the wall-clock arch-offset transform,
//! and the fixed-period treatment-progress counter. All time flows
//! through explicit `Instant` parameters, which keeps every clock
//! deterministic under test.

pub mod animation;
pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod picking;
pub mod progress;
pub mod scene;
pub mod session;
pub mod treatment;
