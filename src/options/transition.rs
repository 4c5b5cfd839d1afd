use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::clamp_range;
use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "View Transitions", inline)]
#[serde(default)]
/// Timing of animated jumps between preset viewpoints.
pub struct TransitionOptions {
    /// Length of a preset transition in milliseconds.
    #[schemars(title = "Duration (ms)", range(min = 100.0, max = 5000.0), extend("step" = 100.0))]
    pub duration_ms: f32,
    /// Progress curve applied to each transition.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration_ms: 1000.0,
            easing: EasingFunction::DEFAULT,
        }
    }
}

impl TransitionOptions {
    pub(crate) fn sanitize(&mut self) {
        self.duration_ms =
            clamp_range("duration_ms", self.duration_ms, 1.0, 60_000.0);
    }
}
