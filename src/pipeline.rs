//! File-to-file comparison: decode both fields, compare, write the report.

use crate::engine::{compare_with_config, CompareConfig};
use crate::field::decode::read_field_file;
use crate::report::encode::write_report_file;
use crate::report::ErrorMap;
use crate::trace::{trace_event, trace_span};
use crate::util::FlowCmpResult;
use std::path::Path;

/// Compares two motion-field files and writes an `FERR` report to `out`.
///
/// Nothing is written unless both inputs decode, their grids match and the
/// report has been fully encoded. Errors carry the path of the file they
/// concern; a dimension mismatch names the right-hand file.
pub fn compare_files<L, R, O>(
    left: L,
    right: R,
    out: O,
    cfg: CompareConfig,
) -> FlowCmpResult<ErrorMap>
where
    L: AsRef<Path>,
    R: AsRef<Path>,
    O: AsRef<Path>,
{
    let (left, right, out) = (left.as_ref(), right.as_ref(), out.as_ref());
    let _span = trace_span!("compare_files").entered();

    let left_field = read_field_file(left)?;
    let right_field = read_field_file(right)?;
    let map =
        compare_with_config(&left_field, &right_field, cfg).map_err(|err| err.in_file(right))?;
    drop(left_field);
    drop(right_field);

    write_report_file(out, &map)?;

    trace_event!("report_written", count = map.count(), mean = map.mean_value());
    Ok(map)
}
