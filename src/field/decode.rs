//! Motion-field decoder.
//!
//! Layout (little-endian):
//! tag[4]      `PIEH` (2 channels) or `PIEI` (3 channels)
//! width:i32
//! height:i32
//! samples:f32 * width * height * channels, row-major, channel-interleaved
//!
//! Bytes after the declared payload are ignored.

use crate::field::{sample_count, FieldFormat, MotionField};
use crate::trace::{trace_event, trace_span};
use crate::util::bytes::{positive_dims, read_f32_payload, read_i32, read_tag};
use crate::util::{FlowCmpError, FlowCmpResult};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Decodes a motion field from a byte stream.
///
/// A header that declares more samples than the stream holds fails with
/// `TruncatedData` without allocating the declared size up front; nothing
/// decoded so far is returned.
pub fn decode_field<R: Read>(mut reader: R) -> FlowCmpResult<MotionField> {
    let _span = trace_span!("decode_field").entered();

    let tag = read_tag(&mut reader)?;
    let format = FieldFormat::from_tag(&tag).ok_or(FlowCmpError::InvalidFormat { tag })?;

    let width = read_i32(&mut reader, "width")?;
    let height = read_i32(&mut reader, "height")?;
    let (width, height) = positive_dims(width, height)?;

    let count = sample_count(format, width, height)?;
    let samples = read_f32_payload(reader, count)?;

    trace_event!(
        "field_decoded",
        width = width,
        height = height,
        channels = format.channels()
    );
    MotionField::new(format, width, height, samples)
}

/// Decodes a motion field held entirely in memory.
pub fn decode_field_bytes(bytes: &[u8]) -> FlowCmpResult<MotionField> {
    decode_field(bytes)
}

/// Opens and decodes a motion-field file; errors name the file.
pub fn read_field_file<P: AsRef<Path>>(path: P) -> FlowCmpResult<MotionField> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| FlowCmpError::from(err).in_file(path))?;
    decode_field(BufReader::new(file)).map_err(|err| err.in_file(path))
}
