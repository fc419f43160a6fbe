//! Easing functions for the alignment transition.
//!
//! The correction must feel like a settling spring without ever
//! visibly overshooting, so every curve here is monotonic on [0, 1]
//! and pinned to the endpoints exactly.

/// Easing curve applied to the transform clock's raw fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Quadratic ease-out (fast start, gentle landing).
    QuadraticOut,
    /// Cubic ease-out; the default settling feel of the correction.
    #[default]
    CubicOut,
    /// Hermite smoothstep (slow start and end).
    Smoothstep,
}

impl Easing {
    /// Evaluate the curve at time `t`.
    ///
    /// Input is clamped to [0.0, 1.0]; output is also in [0.0, 1.0],
    /// monotonic, with `evaluate(0) == 0` and `evaluate(1) == 1`.
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadraticOut => {
                let u = 1.0 - t;
                1.0 - u * u
            }
            Self::CubicOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::Smoothstep => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::QuadraticOut,
        Easing::CubicOut,
        Easing::Smoothstep,
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.evaluate(0.0), 0.0, "{easing:?} at t=0");
            assert_eq!(easing.evaluate(1.0), 1.0, "{easing:?} at t=1");
        }
    }

    #[test]
    fn input_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.evaluate(-0.5), 0.0);
            assert_eq!(easing.evaluate(1.5), 1.0);
        }
    }

    #[test]
    fn curves_are_monotonic_and_never_overshoot() {
        for easing in ALL {
            let mut prev = 0.0f32;
            for i in 0..=100 {
                let t = i as f32 / 100.0;
                let v = easing.evaluate(t);
                assert!(v >= prev, "{easing:?} decreased at t={t}");
                assert!(v <= 1.0, "{easing:?} overshot at t={t}");
                prev = v;
            }
        }
    }

    #[test]
    fn cubic_out_leads_linear_early() {
        // Ease-out covers most of the distance early, like a spring
        // releasing tension
        let v = Easing::CubicOut.evaluate(0.25);
        assert!(v > 0.25, "expected early lead, got {v}");
    }

    #[test]
    fn default_is_cubic_out() {
        assert_eq!(Easing::default(), Easing::CubicOut);
    }
}
