//! Named camera viewpoints.

use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::TriaxisError;

/// A named camera position the user can jump to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewPreset {
    /// Display name (also the lookup key).
    pub name: String,
    /// Camera position in world space.
    pub position: [f32; 3],
}

impl ViewPreset {
    /// Create a preset.
    pub fn new(name: impl Into<String>, position: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// The four built-in viewpoints, in button order.
#[must_use]
pub fn default_presets() -> Vec<ViewPreset> {
    vec![
        ViewPreset::new("Top View", [0.0, 50.0, 0.0]),
        ViewPreset::new("Front View", [0.0, 0.0, 50.0]),
        ViewPreset::new("Side View", [50.0, 0.0, 0.0]),
        ViewPreset::new("Isometric", [30.0, 30.0, 30.0]),
    ]
}

/// Closed name → position mapping consulted when arming a transition.
#[derive(Debug, Clone, Default)]
pub struct PresetRegistry {
    order: Vec<String>,
    positions: FxHashMap<String, Vec3>,
}

impl PresetRegistry {
    /// Build a registry. A later preset with a duplicate name replaces the
    /// earlier one's position but keeps its original slot.
    #[must_use]
    pub fn new(presets: &[ViewPreset]) -> Self {
        let mut registry = Self::default();
        for preset in presets {
            let position = Vec3::from_array(preset.position);
            if registry
                .positions
                .insert(preset.name.clone(), position)
                .is_some()
            {
                log::warn!("duplicate view preset {:?}", preset.name);
            } else {
                registry.order.push(preset.name.clone());
            }
        }
        registry
    }

    /// Position for `name`.
    pub fn get(&self, name: &str) -> Result<Vec3, TriaxisError> {
        self.positions
            .get(name)
            .copied()
            .ok_or_else(|| TriaxisError::UnknownPreset(name.to_owned()))
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Preset names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_four_presets() {
        let registry = PresetRegistry::new(&default_presets());
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(
            names,
            ["Top View", "Front View", "Side View", "Isometric"]
        );
        assert_eq!(
            registry.get("Top View").unwrap(),
            Vec3::new(0.0, 50.0, 0.0)
        );
        assert_eq!(
            registry.get("Isometric").unwrap(),
            Vec3::new(30.0, 30.0, 30.0)
        );
    }

    #[test]
    fn unknown_name_is_an_error() {
        let registry = PresetRegistry::new(&default_presets());
        let err = registry.get("Bottom View").unwrap_err();
        assert!(matches!(
            err,
            TriaxisError::UnknownPreset(n) if n == "Bottom View"
        ));
        assert!(!registry.contains("top view"));
    }

    #[test]
    fn duplicate_keeps_slot_and_takes_new_position() {
        let registry = PresetRegistry::new(&[
            ViewPreset::new("A", [1.0, 0.0, 0.0]),
            ViewPreset::new("B", [0.0, 1.0, 0.0]),
            ViewPreset::new("A", [2.0, 0.0, 0.0]),
        ]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names().next(), Some("A"));
        assert_eq!(registry.get("A").unwrap(), Vec3::new(2.0, 0.0, 0.0));
    }
}
