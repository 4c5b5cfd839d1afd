//! Camera system for the axis view.
//!
//! Provides a damped orbital controller around the origin, the camera state
//! handed to the renderer, and the registry of named viewpoints.

/// Damped azimuth/elevation/distance orbit controller.
pub mod controller;
/// Camera state and view/projection matrices.
pub mod core;
/// Named camera viewpoints.
pub mod presets;

pub use controller::OrbitController;
pub use self::core::CameraState;
pub use presets::{PresetRegistry, ViewPreset};
