//! Scalar helpers for the angular error metric.

/// Returns the Euclidean norm of a 2D vector in single precision.
#[inline]
pub(crate) fn norm2(u: f32, v: f32) -> f32 {
    (u * u + v * v).sqrt()
}

/// Clamps a cosine to [-1, 1] and returns its arc cosine in radians.
///
/// NaN passes through both comparisons unchanged, so `acos` yields NaN.
#[inline]
pub(crate) fn clamped_acos(cos: f32) -> f32 {
    let mut c = cos;
    if c > 1.0 {
        c = 1.0;
    }
    if c < -1.0 {
        c = -1.0;
    }
    c.acos()
}

/// Adds pi to a single-precision accumulator.
///
/// The sum is formed in double precision and narrowed once, so results stay
/// bit-compatible with reports produced by existing tooling.
#[inline]
pub(crate) fn add_pi(acc: f32) -> f32 {
    (acc as f64 + std::f64::consts::PI) as f32
}

#[cfg(test)]
mod tests {
    use super::{add_pi, clamped_acos, norm2};
    use std::f32::consts::PI;

    #[test]
    fn clamped_acos_saturates_overshoot() {
        assert_eq!(clamped_acos(1.000_001), 0.0);
        assert!((clamped_acos(-1.000_001) - PI).abs() < 1e-6);
        assert!((clamped_acos(0.0) - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn clamped_acos_propagates_nan() {
        assert!(clamped_acos(f32::NAN).is_nan());
    }

    #[test]
    fn add_pi_rounds_once() {
        assert_eq!(add_pi(0.0), PI);
        let expected = (1.5f64 + std::f64::consts::PI) as f32;
        assert_eq!(add_pi(1.5), expected);
    }

    #[test]
    fn norm2_matches_pythagoras() {
        assert_eq!(norm2(3.0, 4.0), 5.0);
        assert_eq!(norm2(0.0, 0.0), 0.0);
    }
}
