//! `FERR` report reader, used to inspect or verify written reports.

use crate::report::encode::REPORT_TAG;
use crate::report::ErrorMap;
use crate::util::bytes::{positive_dims, read_f32, read_f32_payload, read_i32, read_tag};
use crate::util::{FlowCmpError, FlowCmpResult};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A decoded report, sentinels left as stored.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorReport {
    pub width: usize,
    pub height: usize,
    pub mean: f32,
    pub count: i32,
    pub values: Vec<f32>,
}

impl ErrorReport {
    /// Returns the stored value at `(x, y)`.
    pub fn value(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.values.get(y * self.width + x).copied()
    }
}

impl From<&ErrorMap> for ErrorReport {
    fn from(map: &ErrorMap) -> Self {
        Self {
            width: map.width(),
            height: map.height(),
            mean: map.mean_value(),
            count: map.count() as i32,
            values: map.values().collect(),
        }
    }
}

/// Decodes a report from a byte stream.
pub fn decode_report<R: Read>(mut reader: R) -> FlowCmpResult<ErrorReport> {
    let tag = read_tag(&mut reader)?;
    if tag.as_slice() != REPORT_TAG {
        return Err(FlowCmpError::InvalidFormat { tag });
    }
    let width = read_i32(&mut reader, "width")?;
    let height = read_i32(&mut reader, "height")?;
    let mean = read_f32(&mut reader, "mean")?;
    let count = read_i32(&mut reader, "count")?;
    let (width, height) = positive_dims(width, height)?;
    let len = width
        .checked_mul(height)
        .ok_or(FlowCmpError::InvalidDimensions {
            width: width as i64,
            height: height as i64,
        })?;
    let values = read_f32_payload(reader, len)?;
    Ok(ErrorReport {
        width,
        height,
        mean,
        count,
        values,
    })
}

/// Decodes a report held entirely in memory.
pub fn decode_report_bytes(bytes: &[u8]) -> FlowCmpResult<ErrorReport> {
    decode_report(bytes)
}

/// Opens and decodes a report file; errors name the file.
pub fn read_report_file<P: AsRef<Path>>(path: P) -> FlowCmpResult<ErrorReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| FlowCmpError::from(err).in_file(path))?;
    decode_report(BufReader::new(file)).map_err(|err| err.in_file(path))
}
