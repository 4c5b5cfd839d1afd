//! Easing functions for view transition interpolation.
//!
//! Every curve maps normalized progress in [0, 1] onto [0, 1] with
//! `ease(0) = 0` and `ease(1) = 1`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in-out.
    QuadraticInOut,
    /// Cubic ease-in (slow start, fast end).
    CubicIn,
    /// Cubic ease-out (fast start, slow end).
    CubicOut,
    /// Symmetric cubic ease-in-out. Zero slope at both endpoints.
    CubicInOut,
}

impl EasingFunction {
    /// Default easing for preset transitions.
    pub const DEFAULT: Self = Self::CubicInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 5] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticInOut,
        EasingFunction::CubicIn,
        EasingFunction::CubicOut,
        EasingFunction::CubicInOut,
    ];

    #[test]
    fn endpoints_are_exact() {
        for f in ALL {
            assert_eq!(f.evaluate(0.0), 0.0, "{f:?} at 0");
            assert_eq!(f.evaluate(1.0), 1.0, "{f:?} at 1");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for f in ALL {
            let mut prev = f.evaluate(0.0);
            for i in 1..=200 {
                let v = f.evaluate(i as f32 / 200.0);
                assert!(v >= prev, "{f:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn cubic_in_out_is_symmetric() {
        let f = EasingFunction::CubicInOut;
        assert!((f.evaluate(0.5) - 0.5).abs() < 1e-6);
        for t in [0.1, 0.2, 0.3, 0.4] {
            let sum = f.evaluate(t) + f.evaluate(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-5, "asymmetric at {t}");
        }
    }

    #[test]
    fn cubic_in_out_is_flat_at_endpoints() {
        let f = EasingFunction::CubicInOut;
        let h = 1e-3;
        let start_slope = f.evaluate(h) / h;
        let end_slope = (1.0 - f.evaluate(1.0 - h)) / h;
        assert!(start_slope < 1e-4, "start slope {start_slope}");
        assert!(end_slope < 1e-4, "end slope {end_slope}");
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let cubic = EasingFunction::CubicInOut;
        assert_eq!(cubic.evaluate(-3.0), 0.0);
        assert_eq!(cubic.evaluate(7.0), 1.0);
    }

    #[test]
    fn test_default_is_cubic_in_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::CubicInOut);
    }
}
