//! Rayon-parallel pixel classification (feature-gated).
//!
//! Rows are classified independently on the thread pool and written straight
//! into their slot of the output buffer. The mean is still folded
//! sequentially by [`ErrorMap::from_pixels`](crate::report::ErrorMap::from_pixels),
//! so the report is bit-identical to the sequential path.

use super::{classify_row, PixelError};
use crate::field::MotionField;
use rayon::prelude::*;

/// Row-parallel counterpart of the sequential classifier.
pub fn classify_rows_par(left: &MotionField, right: &MotionField) -> Vec<PixelError> {
    let width = left.width();
    let lc = left.format().channels();
    let rc = right.format().channels();
    let mut pixels = vec![PixelError::BothZero; left.len()];
    pixels
        .par_chunks_mut(width)
        .zip(left.samples().par_chunks(width * lc))
        .zip(right.samples().par_chunks(width * rc))
        .for_each(|((out, l), r)| classify_row(l, lc, r, rc, out));
    pixels
}
