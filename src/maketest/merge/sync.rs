use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::maketest::merge::config::ColumnConventions;
use crate::maketest::merge::error::Result;
use crate::maketest::merge::io::{csv_read, csv_write};
use crate::maketest::merge::join;
use crate::maketest::merge::menu::{self, ChoiceProvider};
use crate::maketest::merge::model::{MergeReport, Table};
use crate::maketest::merge::resolve::JoinColumns;

/// Paths of the three tables taking part in a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeInputs {
    /// Table to update, e.g. a gradebook export.
    pub dest: PathBuf,
    /// Table holding the values to copy, e.g. test scores.
    pub source: PathBuf,
    /// Table translating source keys into destination keys.
    pub mapping: PathBuf,
}

struct LoadedTables {
    dest: Table,
    source: Table,
    mapping: Table,
}

impl MergeInputs {
    fn load(&self) -> Result<LoadedTables> {
        let dest = csv_read::read_table(&self.dest)?;
        let source = csv_read::read_table(&self.source)?;
        let mapping = csv_read::read_table(&self.mapping)?;
        info!(
            dest_rows = dest.len(),
            source_rows = source.len(),
            mapping_rows = mapping.len(),
            "loaded tables"
        );
        Ok(LoadedTables {
            dest,
            source,
            mapping,
        })
    }
}

/// Merges the source values into the destination column matching
/// `dest_column` and writes the updated destination table to `output`.
/// Nothing is written unless every source row resolves.
#[instrument(
    level = "info",
    skip_all,
    fields(
        dest = %inputs.dest.display(),
        output = %output.display(),
        dest_column = %dest_column
    )
)]
pub fn merge_files(
    inputs: &MergeInputs,
    output: &Path,
    conventions: &ColumnConventions,
    dest_column: &str,
) -> Result<MergeReport> {
    let LoadedTables {
        mut dest,
        source,
        mapping,
    } = inputs.load()?;
    let columns = JoinColumns::resolve_named(&source, &mapping, &dest, conventions, dest_column)?;
    run_and_write(&source, &mapping, &mut dest, &columns, output)
}

/// Walks the user through picking the destination, source and mapping files
/// from `dir` and the destination column, then writes
/// `<destination stem>-updated.csv` next to the destination file.
#[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
pub fn interactive_merge(
    dir: &Path,
    conventions: &ColumnConventions,
    chooser: &mut dyn ChoiceProvider,
) -> Result<(PathBuf, MergeReport)> {
    let files = menu::list_csv_files(dir)?;

    let dest = menu::choose_file(chooser, "Choose a DESTINATION CSV file", &files, &[])?;
    let source = menu::choose_file(
        chooser,
        "Choose a SOURCE CSV file",
        &files,
        &[dest.as_path()],
    )?;
    let mapping = menu::choose_file(
        chooser,
        "Choose a MAPPING CSV file",
        &files,
        &[dest.as_path(), source.as_path()],
    )?;
    let inputs = MergeInputs {
        dest,
        source,
        mapping,
    };

    let LoadedTables {
        mut dest,
        source,
        mapping,
    } = inputs.load()?;
    let header = dest.header()?.to_vec();
    let dest_value = chooser.choose("Choose the DESTINATION column", &header)?;
    let columns = JoinColumns::resolve(&source, &mapping, &dest, conventions, dest_value)?;

    let output = updated_output_path(&inputs.dest);
    let report = run_and_write(&source, &mapping, &mut dest, &columns, &output)?;
    Ok((output, report))
}

/// Output path for the interactive flow: the destination path with its
/// extension replaced by `-updated.csv`.
pub fn updated_output_path(dest: &Path) -> PathBuf {
    let stem = dest
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    dest.with_file_name(format!("{stem}-updated.csv"))
}

fn run_and_write(
    source: &Table,
    mapping: &Table,
    dest: &mut Table,
    columns: &JoinColumns,
    output: &Path,
) -> Result<MergeReport> {
    let report = join::merge(source, mapping, dest, columns)?;
    csv_write::write_table(output, dest)?;
    info!(
        updated = report.updated,
        skipped = report.skipped,
        output = %output.display(),
        "wrote merged table"
    );
    Ok(report)
}
