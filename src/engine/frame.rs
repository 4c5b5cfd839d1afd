//! What each tick hands to the renderer.

use glam::Vec3;

use crate::camera::CameraState;

/// Which motion source positioned the camera this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAuthority {
    /// The damped orbit controller.
    Orbit,
    /// An active view transition.
    Transition,
}

/// Complete per-frame state for the external renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    /// Frame counter, starting at 1 for the first tick.
    pub frame: u64,
    /// Driver timestamp (ms) this frame was ticked at.
    pub time_ms: f64,
    /// Simulation time after this frame's clock advance.
    pub elapsed: f64,
    /// X, Y and Z marker positions.
    pub markers: [Vec3; 3],
    /// Camera for this frame (position, look-at, up, projection).
    pub camera: CameraState,
    /// Which source wrote the camera position.
    pub authority: CameraAuthority,
}

/// Receiver for rendered frames (the opaque draw call).
///
/// Closures taking `&FrameSnapshot` implement this directly.
pub trait FrameSink {
    /// Draw one frame. Assumed synchronous and infallible.
    fn render_frame(&mut self, frame: &FrameSnapshot);
}

impl<F> FrameSink for F
where
    F: FnMut(&FrameSnapshot),
{
    fn render_frame(&mut self, frame: &FrameSnapshot) {
        self(frame);
    }
}
