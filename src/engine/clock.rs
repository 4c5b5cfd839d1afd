//! Fixed-step simulation clock.

/// Simulation time advanced by a constant step once per frame.
///
/// The step is independent of wall-clock time, so marker motion is the same
/// sequence of positions at any frame rate (and slows down when frames are
/// dropped).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    elapsed: f64,
    step: f64,
    frames: u64,
}

impl SimulationClock {
    /// Create a clock at zero advancing by `step` per frame.
    ///
    /// Negative or non-finite steps are treated as zero so time never runs
    /// backwards.
    #[must_use]
    pub fn new(step: f64) -> Self {
        let step = if step.is_finite() { step.max(0.0) } else { 0.0 };
        Self {
            elapsed: 0.0,
            step,
            frames: 0,
        }
    }

    /// Advance one frame and return the new elapsed time.
    pub fn advance(&mut self) -> f64 {
        self.elapsed += self.step;
        self.frames += 1;
        self.elapsed
    }

    /// Simulation time so far.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of frames advanced.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Per-frame increment.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}
