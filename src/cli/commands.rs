use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::model::{Filter, ThemeMode, TodoId};

#[derive(Parser)]
#[command(name = "tl", about = concat!("[x] tally v", env!("CARGO_PKG_VERSION"), " - a small local task list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding storage.json (overrides config)
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Less log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task to the top of the list
    Add(AddArgs),
    /// List tasks
    List(ListArgs),
    /// Mark a task done, or not done again
    Toggle(IdArgs),
    /// Delete a task
    Delete(IdArgs),
    /// Remove all completed tasks
    ClearCompleted,
    /// Show how many tasks remain
    Stats,
    /// Show or change the colour theme
    Theme(ThemeArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Which tasks to show: all, active, completed
    #[arg(short, long, default_value = "all")]
    pub filter: Filter,
}

#[derive(Args)]
pub struct IdArgs {
    /// Task ID as shown by `tl list`
    pub id: TodoId,
}

#[derive(Args)]
pub struct ThemeArgs {
    /// Theme to switch to
    #[arg(value_parser = parse_theme, conflicts_with = "toggle")]
    pub theme: Option<ThemeMode>,
    /// Switch to the other theme
    #[arg(long)]
    pub toggle: bool,
}

fn parse_theme(s: &str) -> Result<ThemeMode, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "dark" => Ok(ThemeMode::Dark),
        "light" => Ok(ThemeMode::Light),
        _ => Err(format!("unknown theme '{s}' (expected dark or light)")),
    }
}
