//! Per-pixel angular error between two motion fields.
//!
//! Each pixel is classified into a [`PixelError`]; the sentinel encoding used
//! by the report format is only produced when the map is serialized.
//! Arithmetic is single precision throughout, and NaN or infinite components
//! are not screened: they flow through the norms and `acos` unchanged.

use crate::field::MotionField;
use crate::report::ErrorMap;
use crate::trace::{trace_event, trace_span};
use crate::util::math::{add_pi, clamped_acos, norm2};
use crate::util::{FlowCmpError, FlowCmpResult};

#[cfg(feature = "rayon")]
pub mod rayon;

/// Sentinel stored where the left vector is zero and the right is not.
pub const LEFT_ZERO_SENTINEL: f32 = -1e9;
/// Sentinel stored where the right vector is zero and the left is not.
pub const RIGHT_ZERO_SENTINEL: f32 = 1e9;

/// Classification of a single pixel comparison.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PixelError {
    /// Both vectors have non-zero norm; angle between them in radians.
    Angle(f32),
    /// Left vector is zero, right is not.
    LeftZero,
    /// Right vector is zero, left is not.
    RightZero,
    /// Neither side defines a direction.
    BothZero,
}

impl PixelError {
    /// Returns the value written to the report for this pixel.
    pub fn value(self) -> f32 {
        match self {
            PixelError::Angle(angle) => angle,
            PixelError::LeftZero => LEFT_ZERO_SENTINEL,
            PixelError::RightZero => RIGHT_ZERO_SENTINEL,
            PixelError::BothZero => 0.0,
        }
    }

    /// Folds this pixel's contribution into the mean accumulator.
    ///
    /// One-sided zero vectors count as the maximum angle, pi.
    pub(crate) fn accumulate(self, acc: f32) -> f32 {
        match self {
            PixelError::Angle(angle) => acc + angle,
            PixelError::LeftZero | PixelError::RightZero => add_pi(acc),
            PixelError::BothZero => acc,
        }
    }
}

/// Classifies one pair of vectors.
pub fn classify_pixel(lu: f32, lv: f32, ru: f32, rv: f32) -> PixelError {
    let norm_l = norm2(lu, lv);
    let norm_r = norm2(ru, rv);

    if norm_l == 0.0 && norm_r == 0.0 {
        PixelError::BothZero
    } else if norm_l == 0.0 {
        PixelError::LeftZero
    } else if norm_r == 0.0 {
        PixelError::RightZero
    } else {
        let cos = (lu * ru + lv * rv) / (norm_l * norm_r);
        PixelError::Angle(clamped_acos(cos))
    }
}

/// Configuration for [`compare_with_config`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompareConfig {
    /// Classify rows on the rayon thread pool (requires the `rayon` feature;
    /// ignored otherwise). Output is identical either way.
    pub parallel: bool,
}

/// Compares two fields sequentially.
pub fn compare(left: &MotionField, right: &MotionField) -> FlowCmpResult<ErrorMap> {
    compare_with_config(left, right, CompareConfig::default())
}

/// Compares two fields of equal size and returns the error map.
pub fn compare_with_config(
    left: &MotionField,
    right: &MotionField,
    cfg: CompareConfig,
) -> FlowCmpResult<ErrorMap> {
    let width = left.width();
    let height = left.height();
    let _span = trace_span!(
        "compare",
        width = width,
        height = height,
        parallel = cfg.parallel
    )
    .entered();

    if width != right.width() || height != right.height() {
        return Err(FlowCmpError::DimensionMismatch {
            left: (width, height),
            right: (right.width(), right.height()),
        });
    }

    #[cfg(feature = "rayon")]
    let pixels = if cfg.parallel {
        self::rayon::classify_rows_par(left, right)
    } else {
        classify_rows(left, right)
    };
    #[cfg(not(feature = "rayon"))]
    let pixels = classify_rows(left, right);

    let map = ErrorMap::from_pixels(width, height, pixels)?;
    trace_event!(
        "compare_done",
        count = map.count(),
        mean = map.mean_value(),
        one_sided = map.one_sided_count()
    );
    Ok(map)
}

/// Classifies every pixel in row-major order on the calling thread.
pub(crate) fn classify_rows(left: &MotionField, right: &MotionField) -> Vec<PixelError> {
    let width = left.width();
    let lc = left.format().channels();
    let rc = right.format().channels();
    let mut pixels = vec![PixelError::BothZero; left.len()];
    for ((out, l), r) in pixels
        .chunks_mut(width)
        .zip(left.samples().chunks(width * lc))
        .zip(right.samples().chunks(width * rc))
    {
        classify_row(l, lc, r, rc, out);
    }
    pixels
}

/// Classifies one row; `lc`/`rc` are the channel strides of each side.
#[inline]
pub(crate) fn classify_row(
    left: &[f32],
    lc: usize,
    right: &[f32],
    rc: usize,
    out: &mut [PixelError],
) {
    for ((l, r), px) in left
        .chunks_exact(lc)
        .zip(right.chunks_exact(rc))
        .zip(out.iter_mut())
    {
        *px = classify_pixel(l[0], l[1], r[0], r[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_pixel, PixelError, LEFT_ZERO_SENTINEL, RIGHT_ZERO_SENTINEL};
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn zero_vectors_follow_case_order() {
        assert_eq!(classify_pixel(0.0, 0.0, 0.0, 0.0), PixelError::BothZero);
        assert_eq!(classify_pixel(0.0, 0.0, 1.0, 0.0), PixelError::LeftZero);
        assert_eq!(classify_pixel(1.0, 0.0, 0.0, 0.0), PixelError::RightZero);
        assert_eq!(classify_pixel(-0.0, 0.0, 0.0, -0.0), PixelError::BothZero);
    }

    #[test]
    fn sentinels_materialize_on_value() {
        assert_eq!(PixelError::LeftZero.value(), LEFT_ZERO_SENTINEL);
        assert_eq!(PixelError::RightZero.value(), RIGHT_ZERO_SENTINEL);
        assert_eq!(PixelError::BothZero.value(), 0.0);
        assert_eq!(PixelError::Angle(0.5).value(), 0.5);
    }

    #[test]
    fn angles_cover_quadrants() {
        assert_eq!(classify_pixel(2.0, 0.0, 5.0, 0.0), PixelError::Angle(0.0));
        match classify_pixel(1.0, 0.0, 0.0, 3.0) {
            PixelError::Angle(a) => assert!((a - FRAC_PI_2).abs() < 1e-6),
            other => panic!("unexpected {other:?}"),
        }
        match classify_pixel(1.0, 1.0, -1.0, -1.0) {
            PixelError::Angle(a) => assert!((a - PI).abs() < 1e-6),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn nan_component_is_not_screened() {
        match classify_pixel(f32::NAN, 1.0, 1.0, 0.0) {
            PixelError::Angle(a) => assert!(a.is_nan()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn one_sided_zero_adds_pi() {
        let acc = PixelError::RightZero.accumulate(0.0);
        assert_eq!(acc, PI);
        assert_eq!(PixelError::BothZero.accumulate(acc), acc);
    }
}
