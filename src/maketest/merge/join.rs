use tracing::debug;

use crate::maketest::merge::error::Result;
use crate::maketest::merge::model::{MergeReport, Table};
use crate::maketest::merge::resolve::{JoinColumns, row_index};

/// Copies source values into the destination table through the mapping table.
///
/// For every data row of `source`, the source key is looked up in the mapping
/// table, the mapped destination key is looked up in `dest`, and the source
/// value overwrites the destination value cell of that row. A mapped key that
/// is empty means the student has no destination account and the row is
/// skipped. Any other lookup miss aborts the merge; `dest` may then hold the
/// updates made before the failing row and should be discarded.
pub fn merge(
    source: &Table,
    mapping: &Table,
    dest: &mut Table,
    columns: &JoinColumns,
) -> Result<MergeReport> {
    let mut report = MergeReport::default();

    for source_row in 1..source.len() {
        let source_key = source.cell(source_row, columns.source_key)?;
        let map_row = row_index(mapping, columns.map_source, source_key)?;
        let dest_key = mapping.cell(map_row, columns.map_dest)?;

        if dest_key.is_empty() {
            debug!(source_row, source_key, "no destination key mapped; skipping");
            report.skipped += 1;
            continue;
        }

        let dest_row = row_index(dest, columns.dest_key, dest_key)?;
        let value = source.cell(source_row, columns.source_value)?;
        dest.set_cell(dest_row, columns.dest_value, value)?;
        report.updated += 1;
    }

    Ok(report)
}
