//! Frame pacing for drivers of the scheduler.

use web_time::{Duration, Instant};

/// Paces an external frame loop and reports a smoothed frame rate.
///
/// The scheduler itself is clock-agnostic; this is what a driver uses to
/// decide when the next tick is due and to produce the millisecond
/// timestamps passed to [`FrameScheduler::tick`](crate::FrameScheduler::tick).
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Time origin for `now_ms`
    started: Instant,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        let now = Instant::now();
        Self {
            target_fps,
            min_frame_duration,
            started: now,
            last_frame: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Milliseconds since this timer was created.
    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// How long the driver should wait before the next frame is due.
    #[must_use]
    pub fn time_until_next_frame(&self) -> Duration {
        if self.target_fps == 0 {
            return Duration::ZERO;
        }
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }

    /// Call after ticking to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_never_waits() {
        let timing = FrameTiming::new(0);
        assert_eq!(timing.time_until_next_frame(), Duration::ZERO);
    }

    #[test]
    fn limited_wait_is_bounded_by_frame_budget() {
        let timing = FrameTiming::new(60);
        let budget = Duration::from_secs_f64(1.0 / 60.0);
        assert!(timing.time_until_next_frame() <= budget);
    }

    #[test]
    fn clock_is_monotonic() {
        let timing = FrameTiming::new(60);
        let a = timing.now_ms();
        let b = timing.now_ms();
        assert!(b >= a);
    }
}
