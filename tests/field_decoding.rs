use flowcmp::{
    decode_field_bytes, encode_field, read_field_file, FieldFormat, FlowCmpError, MotionField,
};

fn field_bytes(tag: &[u8; 4], width: i32, height: i32, samples: &[f32]) -> Vec<u8> {
    let mut bytes = tag.to_vec();
    bytes.extend_from_slice(&width.to_le_bytes());
    bytes.extend_from_slice(&height.to_le_bytes());
    for s in samples {
        bytes.extend_from_slice(&s.to_le_bytes());
    }
    bytes
}

#[test]
fn decodes_two_channel_field() {
    let samples = [1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0];
    let field = decode_field_bytes(&field_bytes(b"PIEH", 2, 2, &samples)).unwrap();
    assert_eq!(field.format(), FieldFormat::Flo);
    assert_eq!((field.width(), field.height()), (2, 2));
    assert_eq!(field.samples(), &samples);
    assert_eq!(field.vector(0, 1), Some((1.0, 1.0)));
    assert_eq!(field.vector(1, 1), Some((0.0, 0.0)));
}

#[test]
fn aux_channel_survives_decoding() {
    let samples = [0.5, -0.5, 7.0, 2.0, 3.0, f32::NAN];
    let field = decode_field_bytes(&field_bytes(b"PIEI", 1, 2, &samples)).unwrap();
    assert_eq!(field.format(), FieldFormat::FloWithAux);
    assert_eq!(field.vector(0, 0), Some((0.5, -0.5)));
    assert_eq!(field.aux(0, 0), Some(7.0));
    assert_eq!(field.vector(0, 1), Some((2.0, 3.0)));
    assert!(field.aux(0, 1).unwrap().is_nan());

    let bytes = encode_field(&field);
    assert_eq!(bytes, field_bytes(b"PIEI", 1, 2, &samples));
}

#[test]
fn unknown_tag_is_invalid_format() {
    let err = decode_field_bytes(&field_bytes(b"FERR", 1, 1, &[0.0, 0.0])).unwrap_err();
    assert_eq!(
        err,
        FlowCmpError::InvalidFormat {
            tag: b"FERR".to_vec()
        }
    );
}

#[test]
fn empty_stream_is_invalid_format() {
    let err = decode_field_bytes(&[]).unwrap_err();
    assert_eq!(err, FlowCmpError::InvalidFormat { tag: Vec::new() });
}

#[test]
fn missing_width_is_truncated_header() {
    let err = decode_field_bytes(b"PIEH\x02").unwrap_err();
    assert_eq!(err, FlowCmpError::TruncatedHeader { field: "width" });
}

#[test]
fn non_positive_dimensions_are_rejected() {
    let err = decode_field_bytes(&field_bytes(b"PIEH", 0, 4, &[])).unwrap_err();
    assert_eq!(
        err,
        FlowCmpError::InvalidDimensions {
            width: 0,
            height: 4
        }
    );

    let err = decode_field_bytes(&field_bytes(b"PIEI", 3, -2, &[])).unwrap_err();
    assert_eq!(
        err,
        FlowCmpError::InvalidDimensions {
            width: 3,
            height: -2
        }
    );
}

#[test]
fn short_payload_is_truncated_data() {
    let err = decode_field_bytes(&field_bytes(b"PIEI", 2, 1, &[1.0, 2.0, 3.0, 4.0])).unwrap_err();
    assert_eq!(
        err,
        FlowCmpError::TruncatedData {
            expected: 24,
            got: 16
        }
    );
}

#[test]
fn file_errors_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.flo");
    std::fs::write(&path, field_bytes(b"XXXX", 1, 1, &[0.0, 0.0])).unwrap();

    let err = read_field_file(&path).unwrap_err();
    match &err {
        FlowCmpError::InFile { path: p, .. } => assert_eq!(p, &path),
        other => panic!("expected file context, got {other:?}"),
    }
    assert_eq!(
        err.root(),
        &FlowCmpError::InvalidFormat {
            tag: b"XXXX".to_vec()
        }
    );
    assert!(err.to_string().contains("bad.flo"));
}

#[test]
fn missing_file_is_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_field_file(dir.path().join("absent.flo")).unwrap_err();
    assert!(matches!(err.root(), FlowCmpError::Io { .. }));
}

#[test]
fn file_round_trip_preserves_samples() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field.flo");
    let field = MotionField::new(
        FieldFormat::FloWithAux,
        2,
        1,
        vec![1.5, -2.5, 0.0, 1e-30, 4.0, 9.0],
    )
    .unwrap();
    flowcmp::write_field_file(&path, &field).unwrap();
    assert_eq!(read_field_file(&path).unwrap(), field);
}
