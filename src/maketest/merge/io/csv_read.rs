use std::fs;
use std::path::Path;

use csv::ReaderBuilder;

use crate::maketest::merge::error::{Result, ToolError};
use crate::maketest::merge::model::Table;

/// Reads the whole comma-delimited file at `path` into a [`Table`]. The first
/// record becomes the header row. Records whose width differs from the first
/// one are rejected by the reader, and so are stray or unterminated quotes.
pub fn read_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(ToolError::MissingInput(path.to_path_buf()));
    }

    let data = fs::read_to_string(path)?;
    check_quoting(&data).map_err(|(line, reason)| ToolError::MalformedCsv {
        path: path.to_path_buf(),
        line,
        reason,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_reader(data.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| ToolError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    Ok(Table::new(path.display().to_string(), rows))
}

#[derive(Clone, Copy)]
enum Quoting {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
    Closed,
}

/// Walks the raw text and rejects quoting the csv reader would accept
/// leniently: a quote inside an unquoted field, anything but a delimiter or
/// line end after a closing quote, and a quoted field still open at the end.
/// Errors carry the 1-based line number.
fn check_quoting(data: &str) -> std::result::Result<(), (usize, &'static str)> {
    let mut state = Quoting::FieldStart;
    let mut line = 1;
    let mut opened_at = 1;

    for ch in data.chars() {
        state = match (state, ch) {
            (Quoting::FieldStart, '"') => {
                opened_at = line;
                Quoting::Quoted
            }
            (Quoting::FieldStart | Quoting::Unquoted | Quoting::Closed, ',') => Quoting::FieldStart,
            (Quoting::FieldStart | Quoting::Unquoted | Quoting::Closed, '\n') => {
                line += 1;
                Quoting::FieldStart
            }
            (Quoting::Unquoted, '"') => {
                return Err((line, "bare \" in non-quoted field"));
            }
            (Quoting::FieldStart | Quoting::Unquoted, _) => Quoting::Unquoted,
            (Quoting::Quoted, '"') => Quoting::QuoteInQuoted,
            (Quoting::Quoted, '\n') => {
                line += 1;
                Quoting::Quoted
            }
            (Quoting::Quoted, _) => Quoting::Quoted,
            (Quoting::QuoteInQuoted, '"') => Quoting::Quoted,
            (Quoting::QuoteInQuoted, ',') => Quoting::FieldStart,
            (Quoting::QuoteInQuoted, '\n') => {
                line += 1;
                Quoting::FieldStart
            }
            (Quoting::QuoteInQuoted, '\r') => Quoting::Closed,
            (Quoting::QuoteInQuoted | Quoting::Closed, _) => {
                return Err((line, "extraneous \" in quoted field"));
            }
        };
    }

    match state {
        Quoting::Quoted => Err((opened_at, "quoted field is never closed")),
        _ => Ok(()),
    }
}
