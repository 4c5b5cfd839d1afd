//! Oscillating axis markers.
//!
//! Each marker slides along one coordinate axis following
//! `amplitude * sin(elapsed + phase_offset)`. Positions are derived from the
//! simulation time on every tick and never stored.

use std::f64::consts::PI;

use glam::Vec3;
use crate::options::MarkerOptions;

/// Coordinate axis a marker is confined to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// All axes in marker order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Vector with `value` on this axis and exact zeros elsewhere.
    #[must_use]
    pub const fn along(self, value: f32) -> Vec3 {
        match self {
            Self::X => Vec3::new(value, 0.0, 0.0),
            Self::Y => Vec3::new(0.0, value, 0.0),
            Self::Z => Vec3::new(0.0, 0.0, value),
        }
    }
}

/// One oscillating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Axis the marker moves along.
    pub axis: Axis,
    /// Phase offset in radians.
    pub phase_offset: f64,
    /// Peak displacement from the origin.
    pub amplitude: f32,
}

impl Marker {
    /// Position of this marker at the given simulation time.
    #[must_use]
    pub fn position(&self, elapsed: f64) -> Vec3 {
        marker_position(elapsed, self)
    }
}

/// Position of `marker` at simulation time `elapsed`.
///
/// The axis component is `amplitude * sin(elapsed + phase_offset)`; the other
/// two components are exactly zero.
#[must_use]
pub fn marker_position(elapsed: f64, marker: &Marker) -> Vec3 {
    let s = (elapsed + marker.phase_offset).sin() as f32;
    marker.axis.along(marker.amplitude * s)
}

/// The three axis markers, in X, Y, Z order.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSet {
    markers: [Marker; 3],
}

impl MarkerSet {
    /// Default amplitude for every marker.
    pub const DEFAULT_AMPLITUDE: f32 = 15.0;
    /// Default phase offsets: evenly spaced thirds of a cycle.
    pub const DEFAULT_PHASES: [f64; 3] = [0.0, 2.0 * PI / 3.0, 4.0 * PI / 3.0];

    /// Build the marker set from options.
    #[must_use]
    pub fn from_options(options: &MarkerOptions) -> Self {
        let markers = [0, 1, 2].map(|i| Marker {
            axis: Axis::ALL[i],
            phase_offset: options.phase_offsets[i],
            amplitude: options.amplitude,
        });
        Self { markers }
    }

    /// The individual markers.
    #[must_use]
    pub fn markers(&self) -> &[Marker; 3] {
        &self.markers
    }

    /// All three positions at simulation time `elapsed`.
    #[must_use]
    pub fn positions(&self, elapsed: f64) -> [Vec3; 3] {
        self.markers.map(|m| marker_position(elapsed, &m))
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::from_options(&MarkerOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, TAU};

    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn off_axis_components_are_exactly_zero() {
        let set = MarkerSet::default();
        for step in 0..2000 {
            let elapsed = step as f64 * 0.037;
            let [x, y, z] = set.positions(elapsed);
            assert_eq!((x.y, x.z), (0.0, 0.0), "x marker at {elapsed}");
            assert_eq!((y.x, y.z), (0.0, 0.0), "y marker at {elapsed}");
            assert_eq!((z.x, z.y), (0.0, 0.0), "z marker at {elapsed}");
        }
    }

    #[test]
    fn positions_are_periodic_in_two_pi() {
        let set = MarkerSet::default();
        for step in 0..500 {
            let elapsed = step as f64 * 0.113;
            let a = set.positions(elapsed);
            let b = set.positions(elapsed + TAU);
            for (p, q) in a.iter().zip(b.iter()) {
                assert!((*p - *q).length() < EPSILON, "{p} vs {q}");
            }
        }
    }

    #[test]
    fn x_marker_peaks_at_quarter_cycle() {
        let marker = Marker {
            axis: Axis::X,
            phase_offset: 0.0,
            amplitude: 15.0,
        };
        let p = marker.position(FRAC_PI_2);
        assert!((p - Vec3::new(15.0, 0.0, 0.0)).length() < EPSILON);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn positions_stay_within_amplitude() {
        let set = MarkerSet::default();
        for step in 0..1000 {
            for p in set.positions(step as f64 * 0.05) {
                assert!(p.length() <= MarkerSet::DEFAULT_AMPLITUDE + EPSILON);
            }
        }
    }

    #[test]
    fn default_phases_are_thirds_of_a_cycle() {
        let set = MarkerSet::default();
        let phases: Vec<f64> =
            set.markers().iter().map(|m| m.phase_offset).collect();
        assert_eq!(phases, MarkerSet::DEFAULT_PHASES.to_vec());
        assert_eq!(
            set.markers().map(|m| m.axis),
            [Axis::X, Axis::Y, Axis::Z]
        );
    }

    #[test]
    fn along_fills_only_its_own_component() {
        assert_eq!(Axis::X.along(-2.5), Vec3::new(-2.5, 0.0, 0.0));
        assert_eq!(Axis::Y.along(-2.5), Vec3::new(0.0, -2.5, 0.0));
        assert_eq!(Axis::Z.along(-2.5), Vec3::new(0.0, 0.0, -2.5));
    }
}
