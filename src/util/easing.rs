//! Easing functions for animation interpolation.
//!
//! Provides the timing curves used by reveal routines, counters, the pointer
//! field release and interaction feedback. All functions are designed for
//! <100ns evaluation time.

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic ease-out: `1 - (1-t)³`. Used by counters and neighbor resets.
    CubicOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control value.
        c1: f32,
        /// Second control value.
        c2: f32,
    },
    /// Overshooting ease-out that settles like a spring.
    /// Formula: 1 + (s+1)(t-1)³ + s(t-1)²
    BackOut {
        /// Overshoot amount; 1.70158 gives roughly 10% overshoot.
        overshoot: f32,
    },
}

impl EasingFunction {
    /// Default easing function: CubicHermite with c1=0.33, c2=1.0 for natural ease-out feel.
    pub const DEFAULT: EasingFunction =
        EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };

    /// Spring-like release curve with the conventional overshoot.
    pub const SPRING: EasingFunction =
        EasingFunction::BackOut { overshoot: 1.701_58 };

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]. Returns 0.0 at t=0 and 1.0 at t=1;
    /// [`BackOut`](Self::BackOut) may exceed 1.0 in between.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
            EasingFunction::BackOut { overshoot } => {
                let s = *overshoot;
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
        }
    }

    /// Whether the curve can leave the [0, 1] range mid-flight.
    #[must_use]
    pub fn overshoots(&self) -> bool {
        matches!(self, EasingFunction::BackOut { overshoot } if *overshoot > 0.0)
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

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_cubic_out_matches_formula() {
        let cubic = EasingFunction::CubicOut;
        assert_eq!(cubic.evaluate(0.0), 0.0);
        assert_eq!(cubic.evaluate(1.0), 1.0);
        // 1 - 0.5³ = 0.875
        assert!((cubic.evaluate(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_hermite_ease_out_shape() {
        let hermite = EasingFunction::DEFAULT;
        let result_at_quarter = hermite.evaluate(0.25);
        assert!(
            result_at_quarter > 0.25,
            "Ease-out should have value > 0.25 at t=0.25, got {result_at_quarter}"
        );
        assert!((hermite.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_back_out_overshoots_then_settles() {
        let spring = EasingFunction::SPRING;
        assert!(spring.overshoots());
        assert!(spring.evaluate(0.0).abs() < 1e-6);
        assert!((spring.evaluate(1.0) - 1.0).abs() < 1e-6);
        let peak = (1..100_u8)
            .map(|i| spring.evaluate(f32::from(i) / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0, "spring curve should overshoot, peak {peak}");
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let quad = EasingFunction::QuadraticOut;
        assert_eq!(quad.evaluate(-0.5), 0.0);
        assert_eq!(quad.evaluate(1.5), 1.0);
        assert_eq!(quad.evaluate(0.5), 0.75);
    }

    #[test]
    fn test_default_is_cubic_hermite() {
        assert_eq!(EasingFunction::default(), EasingFunction::DEFAULT);
        assert!(!EasingFunction::DEFAULT.overshoots());
    }
}
