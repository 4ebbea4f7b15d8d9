//! Numbered menus for picking input files and the destination column.
//!
//! The merge flow asks for choices through [`ChoiceProvider`], so it can be
//! driven by a terminal ([`MenuPrompt`]) or by a fixed script
//! ([`ScriptedChoices`]).

use std::collections::VecDeque;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::maketest::merge::error::{Result, ToolError};

/// Source of menu selections.
pub trait ChoiceProvider {
    /// Picks one of `options` and returns its 0-based index.
    fn choose(&mut self, prompt: &str, options: &[String]) -> Result<usize>;
}

/// Lists the files in `dir` with a `.csv` extension (any case), sorted by path.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(ToolError::NoCsvFiles(dir.to_path_buf()));
    }
    Ok(files)
}

/// Asks `chooser` to pick one of `files`, leaving out any path in `exclude`.
pub fn choose_file(
    chooser: &mut dyn ChoiceProvider,
    prompt: &str,
    files: &[PathBuf],
    exclude: &[&Path],
) -> Result<PathBuf> {
    let candidates: Vec<&PathBuf> = files
        .iter()
        .filter(|file| !exclude.contains(&file.as_path()))
        .collect();
    let labels: Vec<String> = candidates.iter().map(|file| file_label(file)).collect();

    let index = chooser.choose(prompt, &labels)?;
    candidates
        .get(index)
        .map(|file| file.to_path_buf())
        .ok_or_else(|| ToolError::NoChoices(prompt.to_string()))
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parses a 1-based menu entry into a 0-based index.
pub fn parse_choice(line: &str, count: usize) -> Option<usize> {
    let choice: usize = line.trim().parse().ok()?;
    (1..=count).contains(&choice).then(|| choice - 1)
}

/// Interactive menu reading selections line by line.
pub struct MenuPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MenuPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ChoiceProvider for MenuPrompt<R, W> {
    fn choose(&mut self, prompt: &str, options: &[String]) -> Result<usize> {
        if options.is_empty() {
            return Err(ToolError::NoChoices(prompt.to_string()));
        }

        loop {
            writeln!(self.output, "{prompt}")?;
            for (index, option) in options.iter().enumerate() {
                writeln!(self.output, "{}. {option}", index + 1)?;
            }
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ToolError::InputClosed);
            }
            match parse_choice(&line, options.len()) {
                Some(index) => return Ok(index),
                None => writeln!(
                    self.output,
                    "Please enter a number from 1 to {}",
                    options.len()
                )?,
            }
        }
    }
}

/// Replays a fixed list of 0-based selections.
#[derive(Debug, Default, Clone)]
pub struct ScriptedChoices {
    choices: VecDeque<usize>,
}

impl ScriptedChoices {
    pub fn new(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }
}

impl ChoiceProvider for ScriptedChoices {
    fn choose(&mut self, prompt: &str, options: &[String]) -> Result<usize> {
        if options.is_empty() {
            return Err(ToolError::NoChoices(prompt.to_string()));
        }
        let choice = self.choices.pop_front().ok_or(ToolError::InputClosed)?;
        if choice < options.len() {
            Ok(choice)
        } else {
            Err(ToolError::NoChoices(prompt.to_string()))
        }
    }
}
