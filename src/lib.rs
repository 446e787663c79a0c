//! flowcmp compares dense 2D motion fields by angular error.
//!
//! Two fields in the `PIEH`/`PIEI` format are decoded, compared pixel by
//! pixel, and the per-pixel angles plus their mean are written as an `FERR`
//! report. Row classification can run on the rayon thread pool via the
//! `rayon` feature without changing the output.

pub mod engine;
pub mod field;
pub mod pipeline;
pub mod report;
mod trace;
pub mod util;

pub use engine::{classify_pixel, compare, compare_with_config, CompareConfig, PixelError};
pub use field::decode::{decode_field, decode_field_bytes, read_field_file};
pub use field::encode::{encode_field, write_field, write_field_file};
pub use field::{FieldFormat, MotionField};
pub use pipeline::compare_files;
pub use report::decode::{decode_report, decode_report_bytes, read_report_file, ErrorReport};
pub use report::encode::{encode_report, write_report, write_report_file, REPORT_TAG};
pub use report::{ErrorMap, PixelTally};
pub use util::{FlowCmpError, FlowCmpResult};
