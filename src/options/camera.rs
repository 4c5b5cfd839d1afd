use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::clamp_range;

/// Slowest auto-rotation the speed slider allows.
pub const AUTO_ROTATE_SPEED_MIN: f32 = 0.5;
/// Fastest auto-rotation the speed slider allows.
pub const AUTO_ROTATE_SPEED_MAX: f32 = 5.0;
/// Slider granularity for the auto-rotation speed.
pub const AUTO_ROTATE_SPEED_STEP: f32 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit behaviour and projection parameters.
pub struct CameraOptions {
    /// Camera position at startup.
    #[schemars(skip)]
    pub initial_position: [f32; 3],
    /// Fraction of the pending orbit velocity applied per frame.
    #[schemars(title = "Damping", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub damping_factor: f32,
    /// Whether orbit input coasts (damped) or applies immediately.
    #[schemars(title = "Inertia")]
    pub enable_damping: bool,
    /// Drag sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Whether the camera drifts around the vertical axis on its own.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
    /// Auto-rotation speed. 2.0 is one revolution every 30 seconds.
    #[schemars(title = "Rotation Speed", range(min = 0.5, max = 5.0), extend("step" = 0.5))]
    pub auto_rotate_speed: f32,
    /// Distance travelled per wheel notch.
    #[schemars(title = "Zoom Step", range(min = 0.5, max = 10.0), extend("step" = 0.5))]
    pub zoom_step: f32,
    /// Closest the camera may get to the origin.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest the camera may get from the origin.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            initial_position: [30.0, 30.0, 30.0],
            damping_factor: 0.05,
            enable_damping: true,
            rotate_speed: 0.5,
            auto_rotate: true,
            auto_rotate_speed: 2.0,
            zoom_step: 2.0,
            min_distance: 1.0,
            max_distance: 500.0,
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl CameraOptions {
    /// Clamp every field into its usable range.
    pub(crate) fn sanitize(&mut self) {
        self.damping_factor =
            clamp_range("damping_factor", self.damping_factor, 0.001, 0.999);
        self.rotate_speed =
            clamp_range("rotate_speed", self.rotate_speed, 0.01, 10.0);
        self.auto_rotate_speed = clamp_range(
            "auto_rotate_speed",
            self.auto_rotate_speed,
            AUTO_ROTATE_SPEED_MIN,
            AUTO_ROTATE_SPEED_MAX,
        );
        self.zoom_step = clamp_range("zoom_step", self.zoom_step, 0.01, 100.0);
        self.min_distance =
            clamp_range("min_distance", self.min_distance, 0.01, 1.0e4);
        self.max_distance = clamp_range(
            "max_distance",
            self.max_distance,
            self.min_distance,
            1.0e5,
        );
        self.fovy = clamp_range("fovy", self.fovy, 1.0, 179.0);
    }
}
