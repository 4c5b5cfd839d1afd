//! Programmatic camera animation.
//!
//! A [`ViewTransition`] takes exclusive control of the camera position while
//! it flies to a preset, then hands control back to the orbit controller.

pub mod view_transition;

pub use view_transition::{ActiveTransition, TransitionState, ViewTransition};
