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

//! Frame-driven camera motion for a three-marker axis visualization.
//!
//! Three points oscillate along the X, Y and Z axes while the camera either
//! orbits the origin under damped user/auto-rotation control or glides to a
//! named preset viewpoint along an eased path.
//!
//! # Key entry points
//!
//! - [`engine::FrameScheduler`] - the per-frame orchestration point
//! - [`camera::controller::OrbitController`] - damped azimuth/elevation orbit
//! - [`animation::ViewTransition`] - eased preset transitions
//! - [`scene::markers`] - oscillating marker kinematics
//! - [`input::InputProcessor`] - raw pointer/key events to commands
//! - [`options::Options`] - runtime configuration (camera, markers,
//!   transitions, presets, key bindings)
//!
//! # Architecture
//!
//! Everything runs on one thread. Commands produced by the input layer are
//! queued through [`engine::FrameScheduler::execute`] and applied at the
//! start of the next [`engine::FrameScheduler::tick`]. Each tick advances the
//! simulation clock, recomputes marker positions, lets an active view
//! transition drive the camera (falling back to the orbit controller when
//! idle) and hands a [`engine::FrameSnapshot`] to the external
//! [`engine::FrameSink`].

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;

pub use engine::{FrameScheduler, FrameSink, FrameSnapshot, TriaxisCommand};
pub use error::TriaxisError;
pub use input::{InputEvent, InputProcessor, MouseButton};
pub use options::Options;
