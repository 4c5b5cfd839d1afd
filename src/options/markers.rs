use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::clamp_range;
use crate::scene::MarkerSet;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Markers", inline)]
#[serde(default)]
/// Oscillation parameters for the three axis markers.
pub struct MarkerOptions {
    /// Peak displacement of each marker from the origin.
    #[schemars(title = "Amplitude", range(min = 1.0, max = 30.0), extend("step" = 1.0))]
    pub amplitude: f32,
    /// Phase offsets (radians) for the X, Y and Z markers.
    #[schemars(skip)]
    pub phase_offsets: [f64; 3],
    /// Simulation time added per frame.
    #[schemars(title = "Time Step", range(min = 0.005, max = 0.1), extend("step" = 0.005))]
    pub time_step: f64,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            amplitude: MarkerSet::DEFAULT_AMPLITUDE,
            phase_offsets: MarkerSet::DEFAULT_PHASES,
            time_step: 0.02,
        }
    }
}

impl MarkerOptions {
    pub(crate) fn sanitize(&mut self) {
        self.amplitude = clamp_range("amplitude", self.amplitude, 0.0, 1.0e4);
        // Negative steps would run the clock backwards.
        if !(self.time_step.is_finite() && self.time_step >= 0.0) {
            log::warn!("time_step = {} is invalid; using 0.02", self.time_step);
            self.time_step = 0.02;
        }
        for phase in &mut self.phase_offsets {
            if !phase.is_finite() {
                log::warn!("non-finite marker phase offset; using 0");
                *phase = 0.0;
            }
        }
    }
}
