use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Beyond this |cos| between the view direction and world up, the up
/// vector is swapped so `look_at` stays well defined at the poles.
const POLE_COS: f32 = 0.999;

/// Perspective camera that always looks at a fixed point (the origin).
///
/// `position` is written by exactly one motion source per frame; `look_at`
/// and `up` are recomputed by [`orient`](Self::orient) every frame
/// regardless of which source moved the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// Look-at target position.
    pub look_at: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl CameraState {
    /// Camera at the configured initial position, oriented at the origin.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let mut camera = Self {
            position: Vec3::from_array(options.initial_position),
            look_at: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        camera.orient();
        camera
    }

    /// Re-aim at the origin and pick an up vector that is never parallel to
    /// the view direction.
    pub fn orient(&mut self) {
        self.look_at = Vec3::ZERO;
        let cos = self.forward().dot(Vec3::Y);
        self.up = if cos <= -POLE_COS {
            // Looking straight down: screen-up points away from the viewer.
            Vec3::NEG_Z
        } else if cos >= POLE_COS {
            Vec3::Z
        } else {
            Vec3::Y
        };
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Direction from the eye toward the look-at point.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.look_at - self.position).normalize_or_zero()
    }

    /// Right-handed view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, self.up)
    }

    /// Perspective projection with a [0, 1] depth range.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_looks_at_origin_from_isometric() {
        let camera = CameraState::default();
        assert_eq!(camera.position, Vec3::new(30.0, 30.0, 30.0));
        assert_eq!(camera.look_at, Vec3::ZERO);
        assert_eq!(camera.up, Vec3::Y);
    }

    #[test]
    fn top_down_view_has_usable_up_vector() {
        let mut camera = CameraState {
            position: Vec3::new(0.0, 50.0, 0.0),
            ..CameraState::default()
        };
        camera.orient();
        assert_eq!(camera.up, Vec3::NEG_Z);
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn origin_maps_to_view_center() {
        let camera = CameraState::default();
        let clip = camera.view_projection().project_point3(Vec3::ZERO);
        assert!(clip.x.abs() < 1e-5 && clip.y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&clip.z));
    }

    #[test]
    fn resize_ignores_zero_height() {
        let mut camera = CameraState::default();
        camera.resize(800, 400);
        assert_eq!(camera.aspect, 2.0);
        camera.resize(800, 0);
        assert_eq!(camera.aspect, 2.0);
    }
}
