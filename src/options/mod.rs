//! Centralized runtime options with TOML file support.
//!
//! Camera behaviour, marker oscillation, transition timing, the preset
//! registry and key bindings are consolidated here. Every section uses
//! `#[serde(default)]` so partial TOML files (e.g. only overriding
//! `[camera]`) work correctly.

mod camera;
mod markers;
mod transition;

use std::path::Path;

pub use camera::{
    CameraOptions, AUTO_ROTATE_SPEED_MAX, AUTO_ROTATE_SPEED_MIN,
    AUTO_ROTATE_SPEED_STEP,
};
pub use markers::MarkerOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::camera::presets::{default_presets, ViewPreset};
use crate::error::TriaxisError;
use crate::input::KeyBindings;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Orbit behaviour and projection parameters.
    pub camera: CameraOptions,
    /// Axis marker oscillation parameters.
    pub markers: MarkerOptions,
    /// Preset transition timing.
    pub transition: TransitionOptions,
    /// Named camera viewpoints, in button order.
    #[schemars(skip)]
    pub presets: Vec<ViewPreset>,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            camera: CameraOptions::default(),
            markers: MarkerOptions::default(),
            transition: TransitionOptions::default(),
            presets: default_presets(),
            keybindings: KeyBindings::default(),
        }
    }
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TriaxisError> {
        let content = std::fs::read_to_string(path).map_err(TriaxisError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, TriaxisError> {
        toml::from_str(content)
            .map_err(|e| TriaxisError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TriaxisError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TriaxisError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TriaxisError::Io)?;
        }
        std::fs::write(path, content).map_err(TriaxisError::Io)
    }

    /// Return a copy with every numeric field clamped into range.
    ///
    /// Out-of-range values are never rejected; each one is logged and
    /// replaced by the nearest valid value.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.camera.sanitize();
        self.markers.sanitize();
        self.transition.sanitize();
        self.presets.retain(|preset| {
            let ok = preset.position.iter().all(|c| c.is_finite());
            if !ok {
                log::warn!(
                    "dropping preset {:?}: non-finite position",
                    preset.name
                );
            }
            ok
        });
        self
    }
}

/// Check that `value` lies in `[min, max]`.
pub fn check_range(
    name: &'static str,
    value: f32,
    min: f32,
    max: f32,
) -> Result<f32, TriaxisError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(TriaxisError::InvalidRange {
            name,
            value,
            min,
            max,
        })
    }
}

/// Clamp `value` into `[min, max]`, logging when it was out of range.
///
/// NaN maps to `min`.
#[must_use]
pub fn clamp_range(name: &'static str, value: f32, min: f32, max: f32) -> f32 {
    check_range(name, value, min, max).unwrap_or_else(|e| {
        log::warn!("{e}; clamping");
        if value.is_nan() {
            min
        } else {
            value.clamp(min, max)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
auto_rotate_speed = 3.5

[transition]
easing = "linear"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.auto_rotate_speed, 3.5);
        assert_eq!(opts.transition.easing, EasingFunction::Linear);
        // Everything else should be default
        assert_eq!(opts.camera.damping_factor, 0.05);
        assert_eq!(opts.transition.duration_ms, 1000.0);
        assert_eq!(opts.markers.amplitude, 15.0);
        assert_eq!(opts.presets.len(), 4);
    }

    #[test]
    fn custom_presets_replace_defaults() {
        let toml_str = r#"
[[presets]]
name = "Below"
position = [0.0, -40.0, 0.0]
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.presets.len(), 1);
        assert_eq!(opts.presets[0].name, "Below");
        assert_eq!(opts.presets[0].position, [0.0, -40.0, 0.0]);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[camera\nfovy = ").unwrap_err();
        assert!(matches!(err, TriaxisError::OptionsParse(_)));
    }

    #[test]
    fn sanitized_clamps_out_of_range_values() {
        let mut opts = Options::default();
        opts.camera.auto_rotate_speed = 12.0;
        opts.camera.damping_factor = 0.0;
        opts.transition.duration_ms = -5.0;
        opts.markers.time_step = f64::NAN;
        opts.presets.push(ViewPreset::new("Broken", [f32::NAN, 0.0, 0.0]));

        let opts = opts.sanitized();
        assert_eq!(opts.camera.auto_rotate_speed, AUTO_ROTATE_SPEED_MAX);
        assert!(opts.camera.damping_factor > 0.0);
        assert_eq!(opts.transition.duration_ms, 1.0);
        assert_eq!(opts.markers.time_step, 0.02);
        assert_eq!(opts.presets.len(), 4);
    }

    #[test]
    fn check_range_reports_bounds() {
        assert_eq!(check_range("x", 1.0, 0.0, 2.0).unwrap(), 1.0);
        let err = check_range("x", 3.0, 0.0, 2.0).unwrap_err();
        assert!(matches!(
            err,
            TriaxisError::InvalidRange { name: "x", max, .. } if max == 2.0
        ));
        assert_eq!(clamp_range("x", f32::NAN, 0.5, 2.0), 0.5);
        assert_eq!(clamp_range("x", -1.0, 0.5, 2.0), 0.5);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = std::env::temp_dir().join(format!(
            "triaxis-options-{}",
            std::process::id()
        ));
        let path = dir.join("view.toml");
        let mut opts = Options::default();
        opts.camera.auto_rotate = false;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(opts, loaded);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("markers"));
        assert!(props.contains_key("transition"));

        // Skipped sections should be absent
        assert!(!props.contains_key("presets"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("auto_rotate_speed").is_some());
        assert!(camera.get("auto_rotate").is_some());
        assert!(camera.get("initial_position").is_none());
        assert_eq!(camera["auto_rotate_speed"]["minimum"], 0.5);
        assert_eq!(camera["auto_rotate_speed"]["maximum"], 5.0);
        assert_eq!(camera["auto_rotate_speed"]["step"], 0.5);
    }
}
