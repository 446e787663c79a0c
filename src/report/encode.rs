//! `FERR` report encoder.
//!
//! Layout (little-endian):
//! tag[4]      `FERR`
//! width:i32
//! height:i32
//! mean:f32    `+inf` when no pixel contributed
//! count:i32   pixels contributing to the mean
//! values:f32 * width * height, row-major
//!
//! No trailing metadata follows the values.

use crate::report::ErrorMap;
use crate::trace::{trace_event, trace_span};
use crate::util::{FlowCmpError, FlowCmpResult};
use std::io::Write;
use std::path::Path;

/// Tag opening every report.
pub const REPORT_TAG: &[u8; 4] = b"FERR";
/// Size of the fixed header: tag, width, height, mean, count.
pub const REPORT_HEADER_LEN: usize = 20;

/// Serializes an error map into a new buffer.
pub fn encode_report(map: &ErrorMap) -> Vec<u8> {
    let _span = trace_span!("encode_report", width = map.width(), height = map.height()).entered();

    // ErrorMap guarantees width, height and count fit in i32.
    let mut b = Vec::with_capacity(REPORT_HEADER_LEN + map.pixels().len() * 4);
    b.extend_from_slice(REPORT_TAG);
    b.extend_from_slice(&(map.width() as i32).to_le_bytes());
    b.extend_from_slice(&(map.height() as i32).to_le_bytes());
    b.extend_from_slice(&map.mean_value().to_le_bytes());
    b.extend_from_slice(&(map.count() as i32).to_le_bytes());
    for value in map.values() {
        b.extend_from_slice(&value.to_le_bytes());
    }

    trace_event!("report_encoded", bytes = b.len());
    b
}

/// Writes an encoded report to `writer`.
pub fn write_report<W: Write>(mut writer: W, map: &ErrorMap) -> FlowCmpResult<()> {
    writer.write_all(&encode_report(map))?;
    writer.flush()?;
    Ok(())
}

/// Writes an encoded report to a file; errors name the file.
///
/// The report is fully encoded before the file is created.
pub fn write_report_file<P: AsRef<Path>>(path: P, map: &ErrorMap) -> FlowCmpResult<()> {
    let path = path.as_ref();
    let bytes = encode_report(map);
    std::fs::write(path, bytes).map_err(|err| FlowCmpError::from(err).in_file(path))
}
