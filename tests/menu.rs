use maketest_merge::ToolError;
use maketest_merge::config::ColumnConventions;
use maketest_merge::io::csv_read;
use maketest_merge::menu::{
    self, ChoiceProvider, MenuPrompt, ScriptedChoices, list_csv_files, parse_choice,
};
use maketest_merge::model::MergeReport;
use maketest_merge::sync;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

fn options(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

#[test]
fn parse_choice_accepts_one_based_entries() {
    assert_eq!(parse_choice("1\n", 3), Some(0));
    assert_eq!(parse_choice("  3 ", 3), Some(2));
    assert_eq!(parse_choice("0", 3), None);
    assert_eq!(parse_choice("4", 3), None);
    assert_eq!(parse_choice("two", 3), None);
    assert_eq!(parse_choice("", 3), None);
}

#[test]
fn menu_prompt_reprompts_until_valid() {
    let mut output = Vec::new();
    let choice = {
        let mut prompt = MenuPrompt::new(Cursor::new("abc\n5\n2\n"), &mut output);
        prompt
            .choose("Pick one", &options(&["first", "second", "third"]))
            .expect("choice made")
    };

    assert_eq!(choice, 1);
    let transcript = String::from_utf8(output).expect("utf-8 transcript");
    assert!(transcript.starts_with("Pick one\n1. first\n2. second\n3. third\n> "));
    assert_eq!(
        transcript
            .matches("Please enter a number from 1 to 3")
            .count(),
        2
    );
}

#[test]
fn menu_prompt_fails_when_input_closes() {
    let mut prompt = MenuPrompt::new(Cursor::new("9\n"), Vec::new());

    let error = prompt
        .choose("Pick one", &options(&["only"]))
        .expect_err("input closed");
    assert!(matches!(error, ToolError::InputClosed));
}

#[test]
fn menu_prompt_rejects_empty_option_lists() {
    let mut prompt = MenuPrompt::new(Cursor::new("1\n"), Vec::new());

    let error = prompt.choose("Pick one", &[]).expect_err("no options");
    assert!(matches!(error, ToolError::NoChoices(ref prompt) if prompt == "Pick one"));
}

#[test]
fn scripted_choices_replay_in_order() {
    let mut chooser = ScriptedChoices::new([1, 0, 7]);
    let labels = options(&["a", "b"]);

    assert_eq!(chooser.choose("first", &labels).expect("choice"), 1);
    assert_eq!(chooser.choose("second", &labels).expect("choice"), 0);
    assert!(matches!(
        chooser.choose("third", &labels),
        Err(ToolError::NoChoices(_))
    ));
    assert!(matches!(
        chooser.choose("fourth", &labels),
        Err(ToolError::InputClosed)
    ));
}

#[test]
fn list_csv_files_filters_and_sorts() {
    let temp_dir = tempdir().expect("temporary directory");
    for name in ["b.csv", "A.CSV", "notes.txt", "c.csv.bak"] {
        fs::write(temp_dir.path().join(name), "x\n").expect("file written");
    }
    fs::create_dir(temp_dir.path().join("dir.csv")).expect("directory created");

    let files = list_csv_files(temp_dir.path()).expect("files listed");
    let names: Vec<_> = files
        .iter()
        .map(|path| path.file_name().expect("file name").to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["A.CSV", "b.csv"]);
}

#[test]
fn list_csv_files_fails_on_empty_directory() {
    let temp_dir = tempdir().expect("temporary directory");

    let error = list_csv_files(temp_dir.path()).expect_err("nothing to list");
    assert!(matches!(error, ToolError::NoCsvFiles(_)));
}

#[test]
fn choose_file_hides_excluded_files() {
    let files = vec![
        Path::new("dir/a.csv").to_path_buf(),
        Path::new("dir/b.csv").to_path_buf(),
        Path::new("dir/c.csv").to_path_buf(),
    ];
    let mut chooser = ScriptedChoices::new([1]);

    let chosen = menu::choose_file(&mut chooser, "Pick", &files, &[files[1].as_path()])
        .expect("file chosen");
    assert_eq!(chosen, Path::new("dir/c.csv"));
}

#[test]
fn updated_output_path_replaces_extension() {
    assert_eq!(
        sync::updated_output_path(Path::new("exports/grades.csv")),
        Path::new("exports/grades-updated.csv")
    );
    assert_eq!(
        sync::updated_output_path(Path::new("grades")),
        Path::new("grades-updated.csv")
    );
}

#[test]
fn interactive_merge_uses_menu_selections() {
    let temp_dir = tempdir().expect("temporary directory");
    let dir = temp_dir.path();
    fs::write(
        dir.join("dest.csv"),
        "SIS Login ID,Project01-Automated (999),Project02-Automated (1000)\nalice@sis,,\n",
    )
    .expect("destination written");
    fs::write(
        dir.join("map.csv"),
        "GitHub ID,SIS Login ID\nalice123,alice@sis\n",
    )
    .expect("mapping written");
    fs::write(dir.join("scores.csv"), "GitHub ID,Score\nalice123,95\n").expect("source written");

    // dest.csv, then scores.csv from [map, scores], then map.csv, then column 3.
    let mut chooser = ScriptedChoices::new([0, 1, 0, 2]);
    let (output, report) =
        sync::interactive_merge(dir, &ColumnConventions::default(), &mut chooser)
            .expect("interactive merge");

    assert_eq!(output, dir.join("dest-updated.csv"));
    assert_eq!(report, MergeReport { updated: 1, skipped: 0 });
    let merged = csv_read::read_table(&output).expect("output read");
    assert_eq!(merged.cell(1, 1).expect("cell"), "");
    assert_eq!(merged.cell(1, 2).expect("cell"), "95");
}
