//! Dense motion fields and their binary format.
//!
//! A `MotionField` owns a flat, row-major, channel-interleaved `f32` buffer:
//! for each row, for each column, channel 0 (u), channel 1 (v) and, for
//! `FieldFormat::FloWithAux`, an auxiliary channel 2. The auxiliary channel
//! is carried through decoding untouched and never read by the error metric.

use crate::util::{FlowCmpError, FlowCmpResult};

pub mod decode;
pub mod encode;

/// Size of the fixed header: tag, width, height.
pub const FIELD_HEADER_LEN: usize = 12;

/// Recognized motion-field encodings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldFormat {
    /// Two channels per pixel (u, v), tagged `PIEH`.
    Flo,
    /// Three channels per pixel (u, v, aux), tagged `PIEI`.
    FloWithAux,
}

impl FieldFormat {
    /// Every supported format, in tag lookup order.
    pub const ALL: [FieldFormat; 2] = [FieldFormat::Flo, FieldFormat::FloWithAux];

    /// Returns the 4-byte ASCII tag that opens a file of this format.
    pub const fn tag(self) -> &'static [u8; 4] {
        match self {
            FieldFormat::Flo => b"PIEH",
            FieldFormat::FloWithAux => b"PIEI",
        }
    }

    /// Returns the number of `f32` values stored per pixel.
    pub const fn channels(self) -> usize {
        match self {
            FieldFormat::Flo => 2,
            FieldFormat::FloWithAux => 3,
        }
    }

    /// Looks up the format for a 4-byte tag.
    pub fn from_tag(tag: &[u8]) -> Option<Self> {
        Self::ALL.into_iter().find(|fmt| fmt.tag().as_slice() == tag)
    }
}

/// Owned, immutable motion field.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionField {
    format: FieldFormat,
    width: usize,
    height: usize,
    samples: Vec<f32>,
}

impl MotionField {
    /// Creates a field, checking that `samples` covers exactly the grid.
    pub fn new(
        format: FieldFormat,
        width: usize,
        height: usize,
        samples: Vec<f32>,
    ) -> FlowCmpResult<Self> {
        let needed = sample_count(format, width, height)?;
        if samples.len() != needed {
            return Err(FlowCmpError::BufferLength {
                needed,
                got: samples.len(),
            });
        }
        Ok(Self {
            format,
            width,
            height,
            samples,
        })
    }

    /// Returns the encoding this field was built with.
    pub fn format(&self) -> FieldFormat {
        self.format
    }

    /// Returns the grid width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of pixels in the grid.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always false; a field has at least one pixel.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the raw interleaved samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Consumes the field and returns its sample buffer.
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Returns the samples of row `y`, all channels interleaved.
    pub fn row(&self, y: usize) -> Option<&[f32]> {
        if y >= self.height {
            return None;
        }
        let stride = self.width * self.format.channels();
        self.samples.get(y * stride..(y + 1) * stride)
    }

    /// Returns the `(u, v)` vector at `(x, y)`.
    pub fn vector(&self, x: usize, y: usize) -> Option<(f32, f32)> {
        let base = self.pixel_base(x, y)?;
        Some((self.samples[base], self.samples[base + 1]))
    }

    /// Returns the auxiliary channel at `(x, y)`, if the format carries one.
    pub fn aux(&self, x: usize, y: usize) -> Option<f32> {
        if self.format.channels() < 3 {
            return None;
        }
        let base = self.pixel_base(x, y)?;
        Some(self.samples[base + 2])
    }

    /// Iterates `(u, v)` vectors in row-major order.
    pub fn vectors(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.samples
            .chunks_exact(self.format.channels())
            .map(|px| (px[0], px[1]))
    }

    fn pixel_base(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) * self.format.channels())
    }
}

/// Computes `width * height * channels`, rejecting grids that are empty,
/// wider or taller than an `i32` header allows, or too large to address.
pub(crate) fn sample_count(
    format: FieldFormat,
    width: usize,
    height: usize,
) -> FlowCmpResult<usize> {
    let invalid = FlowCmpError::InvalidDimensions {
        width: width as i64,
        height: height as i64,
    };
    if width == 0 || height == 0 || width > i32::MAX as usize || height > i32::MAX as usize {
        return Err(invalid);
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(format.channels()))
        .filter(|n| n.checked_mul(4).is_some())
        .ok_or(invalid)
}
