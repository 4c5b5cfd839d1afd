//! Converts raw platform events into scheduler commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! button state, viewport size) and the key-binding map. It is the only
//! thing that sits between raw window events and
//! [`FrameScheduler::execute`](crate::FrameScheduler::execute).

use std::collections::HashMap;
use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use crate::engine::command::TriaxisCommand;
use crate::options::{Options, AUTO_ROTATE_SPEED_STEP};

/// Maps physical key strings to [`TriaxisCommand`] variants.
///
/// Key strings use the `KeyboardEvent.code` / winit `KeyCode` debug format:
/// `"KeyR"`, `"Digit1"`, `"Minus"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
    /// Key string → preset name.
    presets: HashMap<String, String>,
}

/// Serializable tag for the parameterless subset of [`TriaxisCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Toggle auto-rotation.
    ToggleAutoRotate,
    /// Raise the auto-rotation speed by one slider step.
    SpeedUp,
    /// Lower the auto-rotation speed by one slider step.
    SlowDown,
}

impl KeyCommandTag {
    fn to_command(self) -> TriaxisCommand {
        match self {
            Self::ToggleAutoRotate => TriaxisCommand::ToggleAutoRotate,
            Self::SpeedUp => TriaxisCommand::NudgeAutoRotateSpeed {
                delta: AUTO_ROTATE_SPEED_STEP,
            },
            Self::SlowDown => TriaxisCommand::NudgeAutoRotateSpeed {
                delta: -AUTO_ROTATE_SPEED_STEP,
            },
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyR".into(), KeyCommandTag::ToggleAutoRotate),
            ("Equal".into(), KeyCommandTag::SpeedUp),
            ("Minus".into(), KeyCommandTag::SlowDown),
        ]);
        let presets = HashMap::from([
            ("Digit1".into(), "Top View".into()),
            ("Digit2".into(), "Front View".into()),
            ("Digit3".into(), "Side View".into()),
            ("Digit4".into(), "Isometric".into()),
        ]);
        Self { bindings, presets }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<TriaxisCommand> {
        if let Some(tag) = self.bindings.get(key) {
            return Some(tag.to_command());
        }
        self.presets
            .get(key)
            .map(|name| TriaxisCommand::GoToPreset { name: name.clone() })
    }

    /// `(key, preset name)` pairs for every key bound to a preset jump.
    pub fn preset_targets(&self) -> impl Iterator<Item = (&str, &str)> {
        self.presets
            .iter()
            .map(|(key, name)| (key.as_str(), name.as_str()))
    }

    /// Bind `key` to a parameterless command, replacing any previous
    /// binding for that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let key = key.into();
        let _ = self.presets.remove(&key);
        let _ = self.bindings.insert(key, tag);
    }

    /// Bind `key` to a preset jump, replacing any previous binding for that
    /// key.
    pub fn bind_preset(
        &mut self,
        key: impl Into<String>,
        preset: impl Into<String>,
    ) {
        let key = key.into();
        let _ = self.bindings.remove(&key);
        let _ = self.presets.insert(key, preset.into());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`TriaxisCommand`]s.
///
/// Pointer drags become angular orbit deltas: a drag across the full
/// viewport height turns the camera by `2π · rotate_speed` radians.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     scheduler.execute(cmd);
/// }
///
/// let key = InputEvent::Key { code: "Digit1".into() };
/// if let Some(cmd) = input_processor.handle_event(key) {
///     scheduler.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Last cursor position, if any has been seen.
    last_cursor: Option<Vec2>,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Viewport height in physical pixels.
    viewport_height: f32,
    /// Drag sensitivity multiplier.
    rotate_speed: f32,
    /// Distance per wheel notch.
    zoom_step: f32,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default bindings and sensitivities.
    #[must_use]
    pub fn new() -> Self {
        Self::from_options(&Options::default())
    }

    /// Create a processor using the camera sensitivities and key bindings
    /// from `options`.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            last_cursor: None,
            mouse_pressed: false,
            viewport_height: 720.0,
            rotate_speed: options.camera.rotate_speed,
            zoom_step: options.camera.zoom_step,
            key_bindings: options.keybindings.clone(),
        }
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<TriaxisCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Option<TriaxisCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = pressed;
                }
                None
            }
            InputEvent::Scroll { delta } => Some(TriaxisCommand::Zoom {
                delta: -delta * self.zoom_step,
            }),
            InputEvent::Key { code } => self.handle_key_press(&code),
            InputEvent::Resized { width, height } => {
                if height > 0 {
                    self.viewport_height = height as f32;
                }
                Some(TriaxisCommand::Resize { width, height })
            }
        }
    }

    /// Cursor moved: compute delta, produce an orbit command while dragging.
    fn handle_cursor_moved(
        &mut self,
        x: f32,
        y: f32,
    ) -> Option<TriaxisCommand> {
        let pos = Vec2::new(x, y);
        let delta = self.last_cursor.map_or(Vec2::ZERO, |last| pos - last);
        self.last_cursor = Some(pos);

        if !self.mouse_pressed || delta == Vec2::ZERO {
            return None;
        }

        let radians_per_pixel = TAU / self.viewport_height * self.rotate_speed;
        // Dragging right swings the camera left; dragging down raises it.
        Some(TriaxisCommand::RotateCamera {
            delta: Vec2::new(-delta.x, delta.y) * radians_per_pixel,
        })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    fn press(processor: &mut InputProcessor) {
        let _ = processor.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
    }

    #[test]
    fn hover_without_button_does_nothing() {
        let mut processor = InputProcessor::new();
        assert_eq!(
            processor.handle_event(cursor(0.0, 0.0)),
            None
        );
        assert_eq!(
            processor.handle_event(cursor(50.0, 0.0)),
            None
        );
    }

    #[test]
    fn drag_converts_pixels_to_radians() {
        let mut processor = InputProcessor::new();
        let _ = processor.handle_event(InputEvent::Resized {
            width: 1280,
            height: 720,
        });
        let _ = processor.handle_event(cursor(100.0, 100.0));
        press(&mut processor);

        let cmd = processor.handle_event(cursor(172.0, 100.0));
        let Some(TriaxisCommand::RotateCamera { delta }) = cmd else {
            unreachable!("expected rotate, got {cmd:?}");
        };
        // 72 px of 720 at rotate_speed 0.5 → 2π · 0.1 · 0.5
        assert!((delta.x + TAU * 0.05).abs() < 1e-5, "{delta}");
        assert_eq!(delta.y, 0.0);
    }

    #[test]
    fn release_stops_rotation() {
        let mut processor = InputProcessor::new();
        let _ = processor.handle_event(cursor(0.0, 0.0));
        press(&mut processor);
        assert!(processor.mouse_pressed());
        let _ = processor.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        assert_eq!(
            processor.handle_event(cursor(10.0, 10.0)),
            None
        );
    }

    #[test]
    fn right_button_does_not_orbit() {
        let mut processor = InputProcessor::new();
        let _ = processor.handle_event(cursor(0.0, 0.0));
        let _ = processor.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert_eq!(
            processor.handle_event(cursor(10.0, 10.0)),
            None
        );
    }

    #[test]
    fn scroll_up_moves_closer() {
        let mut processor = InputProcessor::new();
        let cmd = processor.handle_event(InputEvent::Scroll { delta: 1.0 });
        assert_eq!(cmd, Some(TriaxisCommand::Zoom { delta: -2.0 }));
    }

    #[test]
    fn default_keys_cover_presets_and_rotation() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor.handle_key_press("KeyR"),
            Some(TriaxisCommand::ToggleAutoRotate)
        );
        assert_eq!(
            processor.handle_key_press("Digit1"),
            Some(TriaxisCommand::GoToPreset {
                name: "Top View".into()
            })
        );
        assert_eq!(
            processor.handle_key_press("Minus"),
            Some(TriaxisCommand::NudgeAutoRotateSpeed { delta: -0.5 })
        );
        assert_eq!(processor.handle_key_press("KeyZ"), None);
    }

    #[test]
    fn key_events_go_through_bindings() {
        let mut processor = InputProcessor::new();
        let cmd = processor.handle_event(InputEvent::Key {
            code: "Digit3".into(),
        });
        assert_eq!(
            cmd,
            Some(TriaxisCommand::GoToPreset {
                name: "Side View".into()
            })
        );
        assert_eq!(
            processor.handle_event(InputEvent::Key {
                code: "Escape".into()
            }),
            None
        );
    }

    #[test]
    fn rebinding_replaces_previous_meaning() {
        let mut processor = InputProcessor::new();
        processor
            .key_bindings_mut()
            .bind("Digit1", KeyCommandTag::ToggleAutoRotate);
        assert_eq!(
            processor.handle_key_press("Digit1"),
            Some(TriaxisCommand::ToggleAutoRotate)
        );
        processor.key_bindings_mut().bind_preset("KeyR", "Side View");
        assert_eq!(
            processor.handle_key_press("KeyR"),
            Some(TriaxisCommand::GoToPreset {
                name: "Side View".into()
            })
        );
    }

    #[test]
    fn preset_targets_follow_rebinding() {
        let mut bindings = KeyBindings::default();
        let mut targets: Vec<_> = bindings.preset_targets().collect();
        targets.sort_unstable();
        assert_eq!(targets[0], ("Digit1", "Top View"));
        assert_eq!(targets.len(), 4);

        bindings.bind("Digit1", KeyCommandTag::SpeedUp);
        assert!(bindings.preset_targets().all(|(key, _)| key != "Digit1"));
    }

    #[test]
    fn bindings_round_trip_through_toml() {
        let bindings = KeyBindings::default();
        let text = toml::to_string(&bindings).unwrap();
        let parsed: KeyBindings = toml::from_str(&text).unwrap();
        assert_eq!(bindings, parsed);
    }
}
