use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering every way a merge run can fail. None of these are
/// recovered from; the first one ends the run.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when a CSV file cannot be opened, parsed, or written.
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Raised when quotes in a CSV file do not pair up.
    #[error("malformed CSV in {path} at line {line}: {reason}")]
    MalformedCsv {
        path: PathBuf,
        line: usize,
        reason: &'static str,
    },

    /// Raised when the column conventions file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when a table has no header row to resolve columns against.
    #[error("table {0} has no header row")]
    EmptyTable(String),

    /// Raised when no header cell contains the requested fragment.
    #[error("can't find column named: {fragment}")]
    ColumnNotFound { fragment: String },

    /// Raised when no row holds the requested key.
    #[error("can't find matching row for {value}")]
    RowNotFound { value: String },

    /// Raised when a row is too short for a resolved column.
    #[error("row {row} has no cell at column {column}")]
    CellOutOfRange { row: usize, column: usize },

    /// Raised when the working directory holds no CSV files to choose from.
    #[error("no CSV files found in {0}")]
    NoCsvFiles(PathBuf),

    /// Raised when a menu would have to be shown without any options.
    #[error("nothing left to choose for: {0}")]
    NoChoices(String),

    /// Raised when standard input closes before a choice is made.
    #[error("input closed before a choice was made")]
    InputClosed,

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
