//! Little-endian readers shared by the field and report decoders.

use crate::util::{FlowCmpError, FlowCmpResult};
use std::io::{ErrorKind, Read};

/// Reads up to four bytes; a short read yields a shorter tag.
pub(crate) fn read_tag<R: Read>(reader: &mut R) -> FlowCmpResult<Vec<u8>> {
    let mut tag = Vec::with_capacity(4);
    reader.take(4).read_to_end(&mut tag)?;
    Ok(tag)
}

/// Reads a header word, mapping EOF to `TruncatedHeader { field }`.
fn read_word<R: Read>(reader: &mut R, field: &'static str) -> FlowCmpResult<[u8; 4]> {
    let mut buf = [0u8; 4];
    match reader.read_exact(&mut buf) {
        Ok(()) => Ok(buf),
        Err(err) if err.kind() == ErrorKind::UnexpectedEof => {
            Err(FlowCmpError::TruncatedHeader { field })
        }
        Err(err) => Err(err.into()),
    }
}

pub(crate) fn read_i32<R: Read>(reader: &mut R, field: &'static str) -> FlowCmpResult<i32> {
    read_word(reader, field).map(i32::from_le_bytes)
}

pub(crate) fn read_f32<R: Read>(reader: &mut R, field: &'static str) -> FlowCmpResult<f32> {
    read_word(reader, field).map(f32::from_le_bytes)
}

/// Reads exactly `count` floats.
///
/// Bytes are pulled through `Read::take`, so the buffer only grows as data
/// arrives and a header that overstates the payload cannot force a large
/// allocation.
pub(crate) fn read_f32_payload<R: Read>(reader: R, count: usize) -> FlowCmpResult<Vec<f32>> {
    let expected = count * 4;
    let mut bytes = Vec::new();
    reader.take(expected as u64).read_to_end(&mut bytes)?;
    if bytes.len() < expected {
        return Err(FlowCmpError::TruncatedData {
            expected,
            got: bytes.len(),
        });
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

/// Converts header dimensions, rejecting non-positive values.
pub(crate) fn positive_dims(width: i32, height: i32) -> FlowCmpResult<(usize, usize)> {
    if width <= 0 || height <= 0 {
        return Err(FlowCmpError::InvalidDimensions {
            width: width as i64,
            height: height as i64,
        });
    }
    Ok((width as usize, height as usize))
}
