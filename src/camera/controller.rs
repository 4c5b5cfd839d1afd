use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Vec2, Vec3};

use crate::options::{
    clamp_range, CameraOptions, AUTO_ROTATE_SPEED_MAX, AUTO_ROTATE_SPEED_MIN,
    AUTO_ROTATE_SPEED_STEP,
};

/// Elevation is kept this far (radians) from the poles so the camera never
/// flips over the top.
const POLE_MARGIN: f32 = 1.0e-3;

/// Largest elevation magnitude the controller allows.
pub const MAX_ELEVATION: f32 = FRAC_PI_2 - POLE_MARGIN;

/// Azimuthal velocity (rad/s) produced by an auto-rotate speed of 1.0.
/// Speed 2.0 therefore completes one orbit every 30 seconds.
const AUTO_ROTATE_RAD_PER_SEC: f32 = TAU / 60.0;

/// Largest pending orbit (radians, per axis) a drag can queue up.
const MAX_PENDING: f32 = TAU;

/// Damped orbit around the origin.
///
/// Drag input accumulates into a pending angular velocity which is bled into
/// azimuth/elevation a fraction at a time, so the camera coasts to a stop
/// instead of snapping. Auto-rotation feeds the same velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitController {
    azimuth: f32,
    elevation: f32,
    distance: f32,
    /// Pending (azimuth, elevation) change not yet applied.
    velocity: Vec2,

    damping_factor: f32,
    enable_damping: bool,
    auto_rotate: bool,
    auto_rotate_speed: f32,
    min_distance: f32,
    max_distance: f32,
}

impl OrbitController {
    /// Create a controller positioned at `options.initial_position`.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let mut controller = Self {
            azimuth: 0.0,
            elevation: 0.0,
            distance: options.min_distance.max(f32::EPSILON),
            velocity: Vec2::ZERO,
            damping_factor: 0.05,
            enable_damping: options.enable_damping,
            auto_rotate: options.auto_rotate,
            auto_rotate_speed: 2.0,
            min_distance: options.min_distance.max(f32::EPSILON),
            max_distance: options.max_distance,
        };
        controller.max_distance =
            controller.max_distance.max(controller.min_distance);
        controller.set_damping_factor(options.damping_factor);
        controller.set_auto_rotate_speed(options.auto_rotate_speed);
        controller.sync_to_position(Vec3::from_array(options.initial_position));
        controller
    }

    /// Queue an orbit of the given angles (radians). Applied gradually by
    /// [`tick`](Self::tick).
    pub fn apply_drag(&mut self, delta_azimuth: f32, delta_elevation: f32) {
        if !(delta_azimuth.is_finite() && delta_elevation.is_finite()) {
            log::warn!(
                "ignoring non-finite drag ({delta_azimuth}, {delta_elevation})"
            );
            return;
        }
        let v = self.velocity + Vec2::new(delta_azimuth, delta_elevation);
        let (lo, hi) = (-MAX_PENDING, MAX_PENDING);
        self.velocity = Vec2::new(
            clamp_range("pending azimuth", v.x, lo, hi),
            clamp_range("pending elevation", v.y, lo, hi),
        );
    }

    /// Move toward (negative) or away from (positive) the origin.
    pub fn apply_zoom(&mut self, delta_distance: f32) {
        if !delta_distance.is_finite() {
            log::warn!("ignoring non-finite zoom {delta_distance}");
            return;
        }
        self.distance = (self.distance + delta_distance)
            .clamp(self.min_distance, self.max_distance);
    }

    /// Advance the orbit by one frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if self.auto_rotate {
            self.velocity.x += self.auto_rotate_speed
                * AUTO_ROTATE_RAD_PER_SEC
                * dt.max(0.0);
        }

        let step = if self.enable_damping {
            self.velocity * self.damping_factor
        } else {
            self.velocity
        };

        self.azimuth = wrap_angle(self.azimuth + step.x, self.azimuth);
        self.elevation =
            (self.elevation + step.y).clamp(-MAX_ELEVATION, MAX_ELEVATION);

        if self.enable_damping {
            self.velocity *= 1.0 - self.damping_factor;
        } else {
            self.velocity = Vec2::ZERO;
        }
    }

    /// Camera position derived from azimuth, elevation and distance.
    #[must_use]
    pub fn current_position(&self) -> Vec3 {
        let (sin_el, cos_el) = self.elevation.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        self.distance * Vec3::new(cos_el * sin_az, sin_el, cos_el * cos_az)
    }

    /// Re-derive the spherical state from an externally placed camera and
    /// drop any pending velocity.
    pub fn sync_to_position(&mut self, position: Vec3) {
        let distance = position.length();
        if !distance.is_finite() || distance <= 0.0 {
            log::warn!("cannot orbit from {position}; keeping current state");
            return;
        }
        self.distance = distance.clamp(self.min_distance, self.max_distance);
        self.elevation = (position.y / distance)
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(-MAX_ELEVATION, MAX_ELEVATION);
        self.azimuth =
            wrap_angle(position.x.atan2(position.z), self.azimuth);
        self.velocity = Vec2::ZERO;
    }

    /// Enable or disable auto-rotation.
    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    /// Flip auto-rotation and return the new state.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }

    /// Set the auto-rotation speed, clamped to the slider range and snapped
    /// to its step.
    pub fn set_auto_rotate_speed(&mut self, speed: f32) {
        let speed = clamp_range(
            "auto_rotate_speed",
            speed,
            AUTO_ROTATE_SPEED_MIN,
            AUTO_ROTATE_SPEED_MAX,
        );
        self.auto_rotate_speed =
            (speed / AUTO_ROTATE_SPEED_STEP).round() * AUTO_ROTATE_SPEED_STEP;
    }

    /// Set the damping factor, kept strictly inside (0, 1).
    pub fn set_damping_factor(&mut self, factor: f32) {
        self.damping_factor =
            clamp_range("damping_factor", factor, 0.001, 0.999);
    }

    /// Enable or disable inertial coasting.
    pub fn set_enable_damping(&mut self, enabled: bool) {
        self.enable_damping = enabled;
    }

    /// Azimuth in radians, in `[0, 2π)`.
    #[must_use]
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Elevation in radians, within `±MAX_ELEVATION`.
    #[must_use]
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Distance from the origin.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Whether auto-rotation is on.
    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Current auto-rotation speed.
    #[must_use]
    pub fn auto_rotate_speed(&self) -> f32 {
        self.auto_rotate_speed
    }

    /// Current damping factor.
    #[must_use]
    pub fn damping_factor(&self) -> f32 {
        self.damping_factor
    }

    /// Whether any queued motion is still being applied.
    #[must_use]
    pub fn is_coasting(&self) -> bool {
        self.velocity.length_squared() > 1.0e-12
    }
}

/// Wrap an angle into `[0, 2π)`. Non-finite input yields `fallback`.
fn wrap_angle(angle: f32, fallback: f32) -> f32 {
    if !angle.is_finite() {
        return fallback;
    }
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid of a tiny negative value rounds up to exactly 2π.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
