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
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Allowances: input math compares against exact constants
#![allow(clippy::float_cmp)]

//! On-screen virtual joystick and pointer gesture engine.
//!
//! Flickstick converts raw pointer (touch or mouse) events into a bounded
//! virtual-joystick displacement vector and classified discrete gestures —
//! tap, hold, flick. The host forwards pointer events and calls
//! [`GestureEngine::tick`](input::GestureEngine::tick) once per simulation
//! frame; the engine returns batches of [`Output`](output::Output) values
//! that a routing helper delivers to a joystick visual and a movement
//! consumer.
//!
//! # Key entry points
//!
//! - [`input::GestureEngine`] - the pointer-tracking and classification core
//! - [`options::Options`] - runtime configuration (joystick range, gesture
//!   thresholds) with TOML preset support
//! - [`output::Output`] - engine outputs and the collaborator traits they
//!   route to
//! - [`mirror`] - value-level collaborator implementations for polling hosts
//!
//! # Architecture
//!
//! The engine owns a single pointer session at a time: the first pointer
//! down wins ownership and keeps it until its matching
//! release; every other concurrent pointer is ignored. Two independent
//! sub-state-machines (tap/hold and swipe/flick) observe the session's
//! event stream, with timers advanced by the host-driven frame tick. All
//! state mutation is single-threaded and synchronous — there is no hidden
//! scheduler and no background work.

pub mod error;
pub mod geometry;
pub mod input;
pub mod joystick;
pub mod mirror;
pub mod options;
pub mod output;

pub use error::FlickstickError;
pub use geometry::ScreenToLocal;
pub use input::{Gesture, GestureEngine, PointerEvent, PointerId};
pub use options::Options;
pub use output::{JoystickVisual, MovementConsumer, Output};
