//! Motion-field writer, the inverse of [`decode_field`](super::decode::decode_field).

use crate::field::{MotionField, FIELD_HEADER_LEN};
use crate::util::{FlowCmpError, FlowCmpResult};
use std::io::Write;
use std::path::Path;

/// Serializes a motion field into a new buffer.
pub fn encode_field(field: &MotionField) -> Vec<u8> {
    let mut b = Vec::with_capacity(FIELD_HEADER_LEN + field.samples().len() * 4);
    b.extend_from_slice(field.format().tag());
    // MotionField keeps both dimensions within i32.
    b.extend_from_slice(&(field.width() as i32).to_le_bytes());
    b.extend_from_slice(&(field.height() as i32).to_le_bytes());
    for s in field.samples() {
        b.extend_from_slice(&s.to_le_bytes());
    }
    b
}

/// Writes an encoded motion field to `writer`.
pub fn write_field<W: Write>(mut writer: W, field: &MotionField) -> FlowCmpResult<()> {
    writer.write_all(&encode_field(field))?;
    writer.flush()?;
    Ok(())
}

/// Writes an encoded motion field to a file; errors name the file.
pub fn write_field_file<P: AsRef<Path>>(path: P, field: &MotionField) -> FlowCmpResult<()> {
    let path = path.as_ref();
    std::fs::write(path, encode_field(field)).map_err(|err| FlowCmpError::from(err).in_file(path))
}

#[cfg(test)]
mod tests {
    use super::{encode_field, write_field, write_field_file};
    use crate::field::decode::read_field_file;
    use crate::field::{FieldFormat, MotionField};

    #[test]
    fn header_precedes_samples() {
        let field = MotionField::new(FieldFormat::Flo, 1, 1, vec![1.0, -2.0]).unwrap();
        let bytes = encode_field(&field);
        assert_eq!(&bytes[0..4], b"PIEH");
        assert_eq!(&bytes[4..8], &1i32.to_le_bytes());
        assert_eq!(&bytes[8..12], &1i32.to_le_bytes());
        assert_eq!(&bytes[12..16], &1.0f32.to_le_bytes());
        assert_eq!(&bytes[16..20], &(-2.0f32).to_le_bytes());
        assert_eq!(bytes.len(), 20);
    }

    #[test]
    fn writers_emit_encoded_bytes() {
        let field = MotionField::new(FieldFormat::FloWithAux, 1, 1, vec![0.5, 1.5, 2.5]).unwrap();

        let mut sink = Vec::new();
        write_field(&mut sink, &field).unwrap();
        assert_eq!(sink, encode_field(&field));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("field.flo");
        write_field_file(&path, &field).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), sink);
        assert_eq!(read_field_file(&path).unwrap(), field);
    }
}
