//! Easing curves for card entrances and tier cross-fades.

/// Easing curve mapping linear progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Slow start, fast end.
    QuadraticIn,
    /// Fast start, slow end.
    QuadraticOut,
    /// Cubic Hermite with configurable inner control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First inner control value.
        c1: f32,
        /// Second inner control value.
        c2: f32,
    },
    /// Overshoots past 1 before settling, approximating a soft spring.
    BackOut {
        /// Overshoot amount; 1.70158 gives the classic ~10% overshoot.
        overshoot: f32,
    },
}

impl Easing {
    /// Natural ease-out used for fades.
    pub const DEFAULT: Easing = Easing::CubicHermite { c1: 0.33, c2: 1.0 };

    /// Soft spring used when desktop cards pop in.
    pub const SPRING: Easing = Easing::BackOut { overshoot: 1.70158 };

    /// Evaluate the curve at `t`, clamped to [0, 1].
    ///
    /// Endpoints map to exactly 0 and 1 (up to float rounding); `BackOut`
    /// may exceed 1 in between.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            Easing::Linear => t,
            Easing::QuadraticIn => t * t,
            Easing::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Easing::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
            Easing::BackOut { overshoot } => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u * u * u + overshoot * u * u
            }
        }
    }
}

impl Default for Easing {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for easing in [
            Easing::Linear,
            Easing::QuadraticIn,
            Easing::QuadraticOut,
            Easing::DEFAULT,
            Easing::SPRING,
        ] {
            assert!(easing.evaluate(0.0).abs() < 1e-6, "{easing:?}");
            assert!((easing.evaluate(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::Linear.evaluate(-0.5), 0.0);
        assert_eq!(Easing::Linear.evaluate(1.5), 1.0);
        assert!((Easing::SPRING.evaluate(3.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn quadratic_midpoints() {
        assert_eq!(Easing::QuadraticIn.evaluate(0.5), 0.25);
        assert_eq!(Easing::QuadraticOut.evaluate(0.5), 0.75);
    }

    #[test]
    fn spring_overshoots_then_settles() {
        let peak = (1..100)
            .map(|i| Easing::SPRING.evaluate(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.05, "expected overshoot, peak was {peak}");
        assert!(peak < 1.2);
    }

    #[test]
    fn default_eases_out() {
        assert!(Easing::default().evaluate(0.25) > 0.25);
    }
}
