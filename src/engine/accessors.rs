//! Read-only views into scheduler state.

use super::{FrameScheduler, SimulationClock};
use crate::animation::ViewTransition;
use crate::camera::{CameraState, OrbitController, PresetRegistry};
use crate::options::Options;
use crate::scene::MarkerSet;

impl FrameScheduler {
    /// Camera as of the last tick.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// The orbit controller.
    #[must_use]
    pub fn orbit(&self) -> &OrbitController {
        &self.orbit
    }

    /// The view transition engine.
    #[must_use]
    pub fn transition(&self) -> &ViewTransition {
        &self.transition
    }

    /// Registered presets.
    #[must_use]
    pub fn presets(&self) -> &PresetRegistry {
        &self.presets
    }

    /// The axis markers.
    #[must_use]
    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// The simulation clock.
    #[must_use]
    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Options the scheduler was built with (after sanitizing).
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Number of commands waiting for the next tick.
    #[must_use]
    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }
}
