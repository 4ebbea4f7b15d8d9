//! Locating columns by header fragment and rows by exact cell value.
//!
//! Both lookups are linear, left-to-right / top-to-bottom scans where the
//! first match wins. Duplicate headers or keys therefore resolve to the
//! earliest occurrence.

use tracing::debug;

use crate::maketest::merge::config::ColumnConventions;
use crate::maketest::merge::error::{Result, ToolError};
use crate::maketest::merge::model::Table;

/// Returns the index of the first header cell containing `fragment`.
///
/// Matching is a case-sensitive substring test so that exported headers with
/// a generated suffix, e.g. `Project01-Automated (12345)`, still resolve from
/// their human-chosen prefix.
pub fn column_index<S: AsRef<str>>(header: &[S], fragment: &str) -> Result<usize> {
    header
        .iter()
        .position(|cell| cell.as_ref().contains(fragment))
        .ok_or_else(|| ToolError::ColumnNotFound {
            fragment: fragment.to_string(),
        })
}

/// Returns the index of the first row, header included, whose cell at
/// `column` equals `value`.
pub fn row_index(table: &Table, column: usize, value: &str) -> Result<usize> {
    row_index_from(table, 0, column, value)
}

/// Like [`row_index`] but starts scanning at row `start`.
pub fn row_index_from(table: &Table, start: usize, column: usize, value: &str) -> Result<usize> {
    for row in start..table.len() {
        if table.cell(row, column)? == value {
            return Ok(row);
        }
    }
    Err(ToolError::RowNotFound {
        value: value.to_string(),
    })
}

/// The six column indices a merge run needs, resolved once up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinColumns {
    pub source_key: usize,
    pub source_value: usize,
    pub map_source: usize,
    pub map_dest: usize,
    pub dest_key: usize,
    pub dest_value: usize,
}

impl JoinColumns {
    /// Resolves the key and value columns of all three tables from the
    /// configured fragments. The destination value column is passed in as an
    /// index because it is either looked up by fragment or picked by the user.
    pub fn resolve(
        source: &Table,
        mapping: &Table,
        dest: &Table,
        conventions: &ColumnConventions,
        dest_value: usize,
    ) -> Result<Self> {
        let source_header = source.header()?;
        let mapping_header = mapping.header()?;
        let dest_header = dest.header()?;

        let columns = Self {
            source_key: column_index(source_header, &conventions.source_key)?,
            source_value: column_index(source_header, &conventions.source_value)?,
            map_dest: column_index(mapping_header, &conventions.map_dest)?,
            map_source: column_index(mapping_header, &conventions.map_source)?,
            dest_key: column_index(dest_header, &conventions.dest_key)?,
            dest_value,
        };
        debug!(?columns, "resolved join columns");
        Ok(columns)
    }

    /// Resolves every column by fragment, including the destination value
    /// column.
    pub fn resolve_named(
        source: &Table,
        mapping: &Table,
        dest: &Table,
        conventions: &ColumnConventions,
        dest_value: &str,
    ) -> Result<Self> {
        let dest_value = column_index(dest.header()?, dest_value)?;
        Self::resolve(source, mapping, dest, conventions, dest_value)
    }
}
