//! Scene content driven by the simulation clock.
//!
//! The static geometry (axis lines, grid, marker spheres) belongs to the
//! external renderer; this module only owns what moves.

/// Oscillating axis marker kinematics.
pub mod markers;

pub use markers::{marker_position, Axis, Marker, MarkerSet};
