use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

/// How one simulated estimate is compared against the actual value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMetric {
    /// `|actual - simulated|`
    #[default]
    Linear,
    /// Both angles reduced into `[0, 2π)` before taking the absolute difference.
    /// No shortest-arc correction: 0.01 against 6.27 reports ~6.26.
    Angular,
    /// Angular difference folded onto the shorter arc, in `[0, π]`.
    ShortestArc,
}

impl ErrorMetric {
    /// Maps the plain `angular` switch onto a metric.
    pub fn from_angular_flag(use_angular: bool) -> Self {
        if use_angular {
            ErrorMetric::Angular
        } else {
            ErrorMetric::Linear
        }
    }

    #[inline]
    pub fn error(self, actual: f64, simulated: f64) -> f64 {
        match self {
            ErrorMetric::Linear => linear_error(actual, simulated),
            ErrorMetric::Angular => angular_error(actual, simulated),
            ErrorMetric::ShortestArc => shortest_arc_error(actual, simulated),
        }
    }
}

#[inline]
pub fn linear_error(actual: f64, simulated: f64) -> f64 {
    (actual - simulated).abs()
}

/// `rem_euclid` keeps the sign of the divisor, so -0.1 lands at 2π - 0.1.
#[inline]
pub fn angular_error(actual: f64, simulated: f64) -> f64 {
    (actual.rem_euclid(TAU) - simulated.rem_euclid(TAU)).abs()
}

#[inline]
pub fn shortest_arc_error(actual: f64, simulated: f64) -> f64 {
    let d = angular_error(actual, simulated);
    d.min(TAU - d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_linear_error_basics() {
        assert_eq!(linear_error(3.0, 3.0), 0.0);
        assert_eq!(linear_error(1.0, 3.0), 2.0);
        assert_eq!(linear_error(-2.5, 1.5), 4.0);
    }

    #[test]
    fn test_linear_error_non_negative_across_random_pairs() {
        let mut rng = Pcg64::seed_from_u64(7);
        for _ in 0..400 {
            let a = rng.gen_range(-1e6..1e6);
            let s = rng.gen_range(-1e6..1e6);
            assert!(linear_error(a, s) >= 0.0);
            assert_eq!(linear_error(a, a), 0.0);
        }
    }

    #[test]
    fn test_angular_error_reduces_negative_angles() {
        let reduced = (-0.1_f64).rem_euclid(TAU);
        assert!((reduced - (TAU - 0.1)).abs() < TOL);
        assert!(angular_error(-0.1, TAU - 0.1) < TOL);
        assert!(angular_error(-0.1, 6.1832) < 1e-4);
    }

    #[test]
    fn test_angular_error_is_periodic() {
        let mut rng = Pcg64::seed_from_u64(11);
        for case_idx in 0..400 {
            let a = rng.gen_range(-20.0..20.0);
            let s = rng.gen_range(-20.0..20.0);
            let base = angular_error(a, s);
            assert!(
                (base - angular_error(a + TAU, s)).abs() < 1e-9,
                "actual shift, case {case_idx}"
            );
            assert!(
                (base - angular_error(a, s + TAU)).abs() < 1e-9,
                "simulated shift, case {case_idx}"
            );
            assert!((0.0..TAU).contains(&base), "range, case {case_idx}: {base}");
        }
    }

    #[test]
    fn test_angular_error_keeps_long_arc() {
        let err = angular_error(0.01, 6.27);
        assert!((err - 6.26).abs() < TOL, "got {err}");
    }

    #[test]
    fn test_shortest_arc_folds_wraparound() {
        let err = shortest_arc_error(0.01, 6.27);
        assert!((err - (TAU - 6.26)).abs() < TOL, "got {err}");
        assert!((shortest_arc_error(0.0, std::f64::consts::PI) - std::f64::consts::PI).abs() < TOL);
    }

    #[test]
    fn test_shortest_arc_never_exceeds_half_turn() {
        let mut rng = Pcg64::seed_from_u64(13);
        for _ in 0..400 {
            let a = rng.gen_range(-20.0..20.0);
            let s = rng.gen_range(-20.0..20.0);
            let err = shortest_arc_error(a, s);
            assert!(err >= 0.0 && err <= std::f64::consts::PI + TOL);
            assert!(err <= angular_error(a, s) + TOL);
        }
    }

    #[test]
    fn test_from_angular_flag() {
        assert_eq!(ErrorMetric::from_angular_flag(false), ErrorMetric::Linear);
        assert_eq!(ErrorMetric::from_angular_flag(true), ErrorMetric::Angular);
    }
}
