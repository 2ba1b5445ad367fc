#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};

use omni_chronicle::{ChronicleConfig, FsProject, parse_tags, search_project, tags_for_project};

#[derive(Parser, Debug)]
#[command(
    name = "chronicle",
    about = "Tag catalog and document search for session logs and project notes",
    arg_required_else_help = true
)]
struct Cli {
    /// Project root directory (contains `sessions/` and `notes.md`).
    #[arg(
        long,
        short = 'r',
        value_name = "DIR",
        default_value = ".",
        global = true
    )]
    root: PathBuf,

    /// Explicit config file path.
    ///
    /// Defaults to `<root>/chronicle.yaml` when present, else built-in defaults.
    #[arg(long = "conf", short = 'c', value_name = "FILE", global = true)]
    config_file: Option<PathBuf>,

    /// Output format.
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Json, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the tags found in one file.
    Parse { file: PathBuf },
    /// Show the project tag catalog (config, active, notes).
    Tags,
    /// List sessions and notes containing a term.
    Search { term: String },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn emit<T: Serialize>(value: &T, output: OutputFormat) -> Result<()> {
    let rendered = match output {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    }
    .context("failed to serialize CLI output as JSON")?;
    println!("{rendered}");
    Ok(())
}

fn load_config(cli: &Cli) -> Result<ChronicleConfig> {
    if let Some(path) = &cli.config_file {
        return ChronicleConfig::load(path)
            .with_context(|| format!("failed to load config '{}'", path.display()));
    }
    Ok(ChronicleConfig::discover(&cli.root)
        .map(|path| ChronicleConfig::load_or_default(&path))
        .unwrap_or_default())
}

fn open_project(root: &Path) -> Result<FsProject> {
    FsProject::open(root).with_context(|| format!("failed to open project '{}'", root.display()))
}

fn execute(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Parse { file } => {
            let content = std::fs::read_to_string(file)
                .with_context(|| format!("failed to read '{}'", file.display()))?;
            emit(&parse_tags(&content), cli.output)
        }
        Command::Tags => {
            let config = load_config(cli)?;
            let project = open_project(&cli.root)?;
            let tags = tags_for_project(&project, &config);
            log::info!(
                "{} active and {} notes tags in {}",
                tags.active.len(),
                tags.notes.len(),
                project.root().display()
            );
            emit(&tags, cli.output)
        }
        Command::Search { term } => {
            let project = open_project(&cli.root)?;
            let matches = search_project(term, &project);
            emit(
                &json!({
                    "term": term,
                    "count": matches.len(),
                    "matches": matches,
                }),
                cli.output,
            )
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    execute(&cli)
}
