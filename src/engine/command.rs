//! The scheduler's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a pointer drag, a key
//! press, a UI button or a programmatic call, is a `TriaxisCommand`.
//! Commands are queued with
//! [`FrameScheduler::execute`](super::FrameScheduler::execute) and applied
//! at the start of the next tick.

use glam::Vec2;

/// A discrete or parameterized operation the scheduler can perform.
///
/// ```ignore
/// scheduler.execute(TriaxisCommand::ToggleAutoRotate);
/// scheduler.execute(TriaxisCommand::GoToPreset { name: "Top View".into() });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum TriaxisCommand {
    // ── Orbit ───────────────────────────────────────────────────────
    /// Orbit the camera by an angular drag.
    RotateCamera {
        /// (azimuth, elevation) change in radians.
        delta: Vec2,
    },

    /// Move the camera toward (negative) or away from (positive) the origin.
    Zoom {
        /// Distance change in world units.
        delta: f32,
    },

    // ── Auto-rotation ───────────────────────────────────────────────
    /// Flip auto-rotation on/off.
    ToggleAutoRotate,

    /// Set auto-rotation on or off.
    SetAutoRotate {
        /// New state.
        enabled: bool,
    },

    /// Set the auto-rotation speed (slider value, 0.5 to 5.0).
    SetAutoRotateSpeed {
        /// New speed.
        speed: f32,
    },

    /// Change the auto-rotation speed relative to its current value.
    NudgeAutoRotateSpeed {
        /// Amount added to the current speed.
        delta: f32,
    },

    // ── Presets ─────────────────────────────────────────────────────
    /// Fly the camera to a named preset.
    GoToPreset {
        /// Preset name, e.g. `"Top View"`.
        name: String,
    },

    // ── Viewport ────────────────────────────────────────────────────
    /// The viewport changed size.
    Resize {
        /// Width in physical pixels.
        width: u32,
        /// Height in physical pixels.
        height: u32,
    },
}
