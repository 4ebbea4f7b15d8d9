use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use maketest_merge::config::{ColumnConventions, DEFAULT_DEST_VALUE};
use maketest_merge::menu::MenuPrompt;
use maketest_merge::sync::{self, MergeInputs};
use maketest_merge::{Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging().and_then(|()| run(cli)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| ToolError::Logging(err.to_string()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Merge(args) => execute_merge(args),
        Command::Interactive(args) => execute_interactive(args),
    }
}

fn execute_merge(args: MergeArgs) -> Result<()> {
    let conventions = ColumnConventions::load(args.columns.as_deref())?;
    let inputs = MergeInputs {
        dest: args.dst,
        source: args.src,
        mapping: args.map,
    };
    sync::merge_files(&inputs, &args.output, &conventions, &args.column)?;
    Ok(())
}

fn execute_interactive(args: InteractiveArgs) -> Result<()> {
    let conventions = ColumnConventions::load(args.columns.as_deref())?;
    let mut prompt = MenuPrompt::new(io::stdin().lock(), io::stdout());
    let (output, report) = sync::interactive_merge(&args.dir, &conventions, &mut prompt)?;
    println!("Updated {} cells in {}", report.updated, output.display());
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Copy automated test scores into a gradebook export via an ID mapping table."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge the given files and write the updated gradebook.
    Merge(MergeArgs),
    /// Pick files and the destination column from numbered menus.
    Interactive(InteractiveArgs),
}

#[derive(clap::Args)]
struct MergeArgs {
    /// CSV file exported from the gradebook.
    #[arg(long, visible_alias = "canvas")]
    dst: PathBuf,

    /// CSV file containing scores.
    #[arg(long, visible_alias = "maketest")]
    src: PathBuf,

    /// CSV file mapping GitHub IDs to SIS Login IDs.
    #[arg(long)]
    map: PathBuf,

    /// Fragment of the gradebook column to fill in.
    #[arg(long, default_value = DEFAULT_DEST_VALUE)]
    column: String,

    /// Output file path.
    #[arg(long, default_value = "out.csv")]
    output: PathBuf,

    /// Optional JSON file overriding the key and value column names.
    #[arg(long)]
    columns: Option<PathBuf>,
}

#[derive(clap::Args)]
struct InteractiveArgs {
    /// Directory holding the CSV files.
    #[arg(short = 'C', default_value = ".")]
    dir: PathBuf,

    /// Optional JSON file overriding the key and value column names.
    #[arg(long)]
    columns: Option<PathBuf>,
}
