//! Angular error maps and the `FERR` report format.
//!
//! `ErrorMap` keeps per-pixel results as [`PixelError`] values. The report
//! format's sentinels (`±1e9` for one-sided zero vectors, `+inf` for an
//! undefined mean) are produced by [`ErrorMap::values`] and
//! [`ErrorMap::mean_value`] at the serialization boundary.

use crate::engine::PixelError;
use crate::util::{FlowCmpError, FlowCmpResult};

pub mod decode;
pub mod encode;

/// Per-pixel angular errors plus the aggregate mean.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorMap {
    width: usize,
    height: usize,
    pixels: Vec<PixelError>,
    count: usize,
    mean: Option<f32>,
}

impl ErrorMap {
    /// Builds a map from row-major pixel results and folds the mean.
    ///
    /// Every pixel counts toward the denominator. The accumulator is single
    /// precision and is folded in row-major order.
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: Vec<PixelError>,
    ) -> FlowCmpResult<Self> {
        let invalid = FlowCmpError::InvalidDimensions {
            width: width as i64,
            height: height as i64,
        };
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(invalid);
        }
        let needed = width.checked_mul(height).ok_or(invalid)?;
        if pixels.len() != needed {
            return Err(FlowCmpError::BufferLength {
                needed,
                got: pixels.len(),
            });
        }
        if needed > i32::MAX as usize {
            return Err(FlowCmpError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            });
        }

        let count = pixels.len();
        let sum = pixels
            .iter()
            .fold(0.0f32, |acc, px| px.accumulate(acc));
        let mean = if count != 0 {
            Some(sum / count as f32)
        } else {
            None
        };

        Ok(Self {
            width,
            height,
            pixels,
            count,
            mean,
        })
    }

    /// Returns the grid width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the classified pixels in row-major order.
    pub fn pixels(&self) -> &[PixelError] {
        &self.pixels
    }

    /// Returns the classification at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Option<PixelError> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Number of pixels that contributed to the mean.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean angular error in radians, `None` when no pixel contributed.
    pub fn mean(&self) -> Option<f32> {
        self.mean
    }

    /// Mean as written to the report: `+inf` when undefined.
    pub fn mean_value(&self) -> f32 {
        self.mean.unwrap_or(f32::INFINITY)
    }

    /// Per-pixel values as written to the report, sentinels included.
    pub fn values(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
        self.pixels.iter().map(|px| px.value())
    }

    /// Number of pixels where exactly one side had a zero vector.
    pub fn one_sided_count(&self) -> usize {
        self.pixels
            .iter()
            .filter(|px| matches!(px, PixelError::LeftZero | PixelError::RightZero))
            .count()
    }

    /// Tallies pixels by classification.
    pub fn tally(&self) -> PixelTally {
        let mut tally = PixelTally::default();
        for px in &self.pixels {
            match px {
                PixelError::Angle(_) => tally.angle += 1,
                PixelError::LeftZero => tally.left_zero += 1,
                PixelError::RightZero => tally.right_zero += 1,
                PixelError::BothZero => tally.both_zero += 1,
            }
        }
        tally
    }
}

/// Pixel counts per [`PixelError`] kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelTally {
    pub angle: usize,
    pub left_zero: usize,
    pub right_zero: usize,
    pub both_zero: usize,
}
