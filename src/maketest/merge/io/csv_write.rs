use std::path::Path;

use csv::WriterBuilder;

use crate::maketest::merge::error::{Result, ToolError};
use crate::maketest::merge::model::Table;

/// Writes the table to `path`, creating the file or truncating an existing one.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let csv_error = |source: csv::Error| ToolError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    for row in table.rows() {
        writer.write_record(row).map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}
