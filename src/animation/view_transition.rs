//! Eased camera flight to a named preset.

use glam::Vec3;

use crate::camera::presets::PresetRegistry;
use crate::error::TriaxisError;
use crate::options::TransitionOptions;
use crate::util::easing::EasingFunction;

/// An in-flight transition.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTransition {
    /// Name of the preset being flown to.
    pub preset: String,
    /// Camera position when the transition was armed.
    pub start: Vec3,
    /// Preset position.
    pub target: Vec3,
    /// Timestamp (ms) the transition was armed at.
    pub start_time: f64,
}

/// Transition state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TransitionState {
    /// No transition; the orbit controller owns the camera.
    #[default]
    Idle,
    /// A transition owns the camera position.
    Transitioning(ActiveTransition),
}

/// Animates the camera from wherever it is to a preset over a fixed
/// duration.
///
/// Arming while a transition is running replaces it, starting from the
/// camera's current (possibly mid-flight) position, so the hand-off is
/// continuous. Progress is computed from absolute timestamps, so dropped
/// frames shorten the visible motion but never delay the end.
#[derive(Debug, Clone)]
pub struct ViewTransition {
    state: TransitionState,
    duration_ms: f64,
    easing: EasingFunction,
}

impl ViewTransition {
    /// Create an idle transition engine.
    #[must_use]
    pub fn new(duration_ms: f64, easing: EasingFunction) -> Self {
        Self {
            state: TransitionState::Idle,
            duration_ms: duration_ms.max(0.0),
            easing,
        }
    }

    /// Create from options.
    #[must_use]
    pub fn from_options(options: &TransitionOptions) -> Self {
        Self::new(f64::from(options.duration_ms), options.easing)
    }

    /// Start flying from `current_position` to the preset named `preset`.
    ///
    /// On an unknown name the state is left untouched.
    pub fn arm(
        &mut self,
        preset: &str,
        registry: &PresetRegistry,
        current_position: Vec3,
        current_time: f64,
    ) -> Result<(), TriaxisError> {
        let target = registry.get(preset)?;
        if let TransitionState::Transitioning(prev) = &self.state {
            log::debug!(
                "transition to {:?} superseded by {preset:?}",
                prev.preset
            );
        }
        self.state = TransitionState::Transitioning(ActiveTransition {
            preset: preset.to_owned(),
            start: current_position,
            target,
            start_time: current_time,
        });
        log::info!("view transition to {preset:?} armed");
        Ok(())
    }

    /// Camera position for `current_time`, or `None` when idle.
    ///
    /// The frame on which progress reaches 1 returns the exact preset
    /// position and then returns the engine to idle.
    pub fn tick(&mut self, current_time: f64) -> Option<Vec3> {
        let t = self.progress(current_time)?;
        let TransitionState::Transitioning(active) = &self.state else {
            return None;
        };

        if t >= 1.0 {
            let target = active.target;
            log::info!("view transition to {:?} finished", active.preset);
            self.state = TransitionState::Idle;
            return Some(target);
        }

        let eased = self.easing.evaluate(t);
        Some(active.start.lerp(active.target, eased))
    }

    /// Normalized progress in `[0, 1]`, or `None` when idle.
    #[must_use]
    pub fn progress(&self, current_time: f64) -> Option<f32> {
        let TransitionState::Transitioning(active) = &self.state else {
            return None;
        };
        if self.duration_ms <= 0.0 {
            return Some(1.0);
        }
        let t = (current_time - active.start_time) / self.duration_ms;
        if t.is_nan() {
            // Unusable timestamps finish the flight rather than stall it.
            return Some(1.0);
        }
        Some(t.clamp(0.0, 1.0) as f32)
    }

    /// Whether a transition currently owns the camera.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, TransitionState::Transitioning(_))
    }

    /// Name of the preset being flown to, if any.
    #[must_use]
    pub fn target_preset(&self) -> Option<&str> {
        match &self.state {
            TransitionState::Transitioning(active) => Some(&active.preset),
            TransitionState::Idle => None,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    /// Transition length in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Easing curve in use.
    #[must_use]
    pub fn easing(&self) -> EasingFunction {
        self.easing
    }
}

impl Default for ViewTransition {
    fn default() -> Self {
        Self::from_options(&TransitionOptions::default())
    }
}
