use crate::maketest::merge::error::{Result, ToolError};

/// A row of string cells, in file order.
pub type Row = Vec<String>;

/// An in-memory delimited table. Row 0 is the header; every following row is
/// data. Row widths are not checked here, so a ragged table surfaces as a
/// [`ToolError::CellOutOfRange`] when a short row is read or written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    name: String,
    rows: Vec<Row>,
}

impl Table {
    /// Builds a table from raw rows. `name` is used in diagnostics only.
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// All rows, header included.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows, header included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The header row.
    pub fn header(&self) -> Result<&[String]> {
        self.rows
            .first()
            .map(Vec::as_slice)
            .ok_or_else(|| ToolError::EmptyTable(self.name.clone()))
    }

    /// Reads the cell at `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> Result<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .ok_or(ToolError::CellOutOfRange { row, column })
    }

    /// Overwrites the cell at `(row, column)`.
    pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<String>) -> Result<()> {
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|cells| cells.get_mut(column))
            .ok_or(ToolError::CellOutOfRange { row, column })?;
        *cell = value.into();
        Ok(())
    }
}

/// Outcome of a successful merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Destination cells overwritten with a source value.
    pub updated: usize,
    /// Source rows whose mapped destination key was empty.
    pub skipped: usize,
}
