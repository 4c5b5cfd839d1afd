//! Per-frame orchestration.
//!
//! [`FrameScheduler`] is the single place where state evolves over time.
//! The external driver calls [`tick`](FrameScheduler::tick) once per display
//! refresh; everything else only queues work for the next tick.

mod accessors;
pub mod clock;
pub mod command;
pub mod frame;

pub use clock::SimulationClock;
pub use command::TriaxisCommand;
pub use frame::{CameraAuthority, FrameSink, FrameSnapshot};

use crate::animation::ViewTransition;
use crate::camera::{CameraState, OrbitController, PresetRegistry};
use crate::options::Options;
use crate::scene::MarkerSet;

/// Longest frame interval (seconds) the orbit controller integrates in one
/// tick. Longer gaps (a backgrounded tab, a debugger pause) are treated as
/// this long so auto-rotation does not lurch.
const MAX_FRAME_DT: f64 = 0.1;

/// Drives one tick per display refresh.
///
/// # Frame loop
///
/// Each [`tick`](Self::tick), in order:
///
/// 1. applies commands queued by [`execute`](Self::execute) since the last
///    tick;
/// 2. advances the [`SimulationClock`];
/// 3. recomputes the three marker positions;
/// 4. positions the camera: an active [`ViewTransition`] wins, otherwise the
///    [`OrbitController`] ticks and supplies the position. The camera is
///    re-aimed at the origin either way;
/// 5. hands a [`FrameSnapshot`] to the [`FrameSink`].
///
/// Marker motion never pauses for camera transitions.
pub struct FrameScheduler {
    clock: SimulationClock,
    markers: MarkerSet,
    orbit: OrbitController,
    transition: ViewTransition,
    presets: PresetRegistry,
    camera: CameraState,
    /// Commands waiting for the next tick.
    pending: Vec<TriaxisCommand>,
    /// Timestamp of the previous tick, for orbit `dt`.
    last_time_ms: Option<f64>,
    options: Options,
}

impl FrameScheduler {
    /// Build a scheduler from (sanitized) options.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let options = options.sanitized();
        let presets = PresetRegistry::new(&options.presets);
        for (key, name) in options.keybindings.preset_targets() {
            if !presets.contains(name) {
                log::warn!("key {key} is bound to unknown preset {name:?}");
            }
        }
        let orbit = OrbitController::new(&options.camera);
        let mut camera = CameraState::from_options(&options.camera);
        camera.position = orbit.current_position();
        camera.orient();

        log::info!(
            "scheduler ready: {} presets, auto-rotate {}",
            options.presets.len(),
            if orbit.auto_rotate() { "on" } else { "off" }
        );

        Self {
            clock: SimulationClock::new(options.markers.time_step),
            markers: MarkerSet::from_options(&options.markers),
            orbit,
            transition: ViewTransition::from_options(&options.transition),
            presets,
            camera,
            pending: Vec::new(),
            last_time_ms: None,
            options,
        }
    }

    /// Queue a command for the start of the next tick.
    pub fn execute(&mut self, command: TriaxisCommand) {
        self.pending.push(command);
    }

    /// Run one frame at driver time `current_time_ms` and render it.
    pub fn tick(
        &mut self,
        current_time_ms: f64,
        sink: &mut impl FrameSink,
    ) -> FrameSnapshot {
        let current_time_ms = self.usable_time(current_time_ms);
        for command in std::mem::take(&mut self.pending) {
            self.apply(command, current_time_ms);
        }

        let elapsed = self.clock.advance();
        let markers = self.markers.positions(elapsed);

        let authority = if let Some(position) =
            self.transition.tick(current_time_ms)
        {
            self.camera.position = position;
            if !self.transition.is_active() {
                // Landed: orbit resumes from here.
                self.orbit.sync_to_position(position);
            }
            CameraAuthority::Transition
        } else {
            self.orbit.tick(self.frame_dt(current_time_ms));
            self.camera.position = self.orbit.current_position();
            CameraAuthority::Orbit
        };
        self.camera.orient();
        self.last_time_ms = Some(current_time_ms);

        let snapshot = FrameSnapshot {
            frame: self.clock.frames(),
            time_ms: current_time_ms,
            elapsed,
            markers,
            camera: self.camera,
            authority,
        };
        sink.render_frame(&snapshot);
        snapshot
    }

    /// `current_time_ms`, or the previous tick's time when it is not finite.
    fn usable_time(&self, current_time_ms: f64) -> f64 {
        if current_time_ms.is_finite() {
            return current_time_ms;
        }
        let fallback = self.last_time_ms.unwrap_or(0.0);
        log::warn!(
            "frame time {current_time_ms} is not finite; using {fallback}"
        );
        fallback
    }

    /// Seconds since the previous tick, clamped to `[0, MAX_FRAME_DT]`.
    fn frame_dt(&self, current_time_ms: f64) -> f32 {
        self.last_time_ms.map_or(0.0, |last| {
            let dt = (current_time_ms - last) / 1000.0;
            if dt.is_finite() {
                dt.clamp(0.0, MAX_FRAME_DT) as f32
            } else {
                0.0
            }
        })
    }

    fn apply(&mut self, command: TriaxisCommand, current_time_ms: f64) {
        match command {
            TriaxisCommand::RotateCamera { delta } => {
                self.orbit.apply_drag(delta.x, delta.y);
            }
            TriaxisCommand::Zoom { delta } => self.orbit.apply_zoom(delta),
            TriaxisCommand::ToggleAutoRotate => {
                let on = self.orbit.toggle_auto_rotate();
                log::info!("auto-rotate {}", if on { "on" } else { "off" });
            }
            TriaxisCommand::SetAutoRotate { enabled } => {
                self.orbit.set_auto_rotate(enabled);
            }
            TriaxisCommand::SetAutoRotateSpeed { speed } => {
                self.orbit.set_auto_rotate_speed(speed);
                log::info!(
                    "auto-rotate speed {:.1}",
                    self.orbit.auto_rotate_speed()
                );
            }
            TriaxisCommand::NudgeAutoRotateSpeed { delta } => {
                let speed = self.orbit.auto_rotate_speed() + delta;
                self.orbit.set_auto_rotate_speed(speed);
                log::info!(
                    "auto-rotate speed {:.1}",
                    self.orbit.auto_rotate_speed()
                );
            }
            TriaxisCommand::GoToPreset { name } => {
                if let Err(e) = self.transition.arm(
                    &name,
                    &self.presets,
                    self.camera.position,
                    current_time_ms,
                ) {
                    log::warn!("{e}; staying in orbit mode");
                }
            }
            TriaxisCommand::Resize { width, height } => {
                self.camera.resize(width, height);
            }
        }
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
