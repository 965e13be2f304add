use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// File-backed Kanban board CLI.
/// Storage defaults to ~/.workboard or a directory passed via --data-dir.
#[derive(Parser)]
#[command(name = "wb", version, about = "Kanban-style work item board")]
pub struct Cli {
    /// Directory holding the board's JSON data files.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
