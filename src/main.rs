//! # WB - Work Item Board
//!
//! A kanban-style board for tracking work items in the terminal, with a
//! full CLI for scripting and an interactive TUI for visual management.
//!
//! ## Key Features
//!
//! - **Four-Column Board**: To Do, In Progress, Done, and Rejected, fed by
//!   two card sources (your own work items plus read-only external requests)
//! - **Drag Semantics**: Moving a card is a grab-and-drop gesture, in the
//!   TUI and as a scripted `wb move` command
//! - **Inline Metadata**: `#labels` and `[YYYY-MM-DD]` upcoming dates are
//!   read straight out of card descriptions
//! - **Simple Task Board**: A second, lighter three-column board for
//!   free-text task cards
//! - **Local File Storage**: Flat JSON files, trivially inspectable and
//!   source-controllable
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the interactive board
//! wb board
//!
//! # Add a work item via CLI
//! wb add "Fix login flow" --desc "see #auth [2026-09-15]" --priority high
//!
//! # List the board
//! wb list
//!
//! # Move card 3 to Done
//! wb move 3 done
//! ```
//!
//! Data is stored locally in `~/.workboard/` (override with `--data-dir`
//! or the `WORKBOARD_DIR` environment variable).

use clap::Parser;

pub mod board;
pub mod cli;
pub mod cmd;
pub mod extract;
pub mod fields;
pub mod item;
pub mod reconcile;
pub mod store;
pub mod view;
pub mod tui {
    pub mod board;
    pub mod colors;
    pub mod input;
    pub mod item_form;
    pub mod run;
}

use board::{resolve_data_dir, ItemBoard, TaskBoard};
use cli::Cli;
use cmd::*;
use store::Store;

fn main() {
    let cli = Cli::parse();

    // Completions write to stdout and never touch the data directory.
    if let Commands::Completions { shell } = &cli.command {
        cmd_completions(*shell);
        return;
    }

    let data_dir = resolve_data_dir(cli.data_dir.as_deref());
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        eprintln!("Failed to create data directory {}: {}", data_dir.display(), e);
        std::process::exit(1);
    }
    let store = Store::new(&data_dir);

    match cli.command {
        Commands::Completions { .. } => unreachable!("completions handled above"),
        Commands::Board => cmd_board(&store),
        Commands::Task { action } => {
            let mut board = TaskBoard::hydrate(&store);
            cmd_task(&mut board, &store, action);
        }
        Commands::Add {
            title,
            desc,
            priority,
            kind,
            status,
        } => {
            let mut board = ItemBoard::hydrate(&store);
            cmd_add(&mut board, &store, title, desc, priority, kind, status);
        }
        Commands::List { bucket, search, all } => {
            let board = ItemBoard::hydrate(&store);
            cmd_list(&board, bucket, search, all);
        }
        Commands::View { id } => {
            let board = ItemBoard::hydrate(&store);
            cmd_view(&board, id);
        }
        Commands::Update {
            id,
            title,
            desc,
            priority,
            kind,
            status,
        } => {
            let mut board = ItemBoard::hydrate(&store);
            cmd_update(&mut board, &store, id, title, desc, priority, kind, status);
        }
        Commands::Delete { id } => {
            let mut board = ItemBoard::hydrate(&store);
            cmd_delete(&mut board, &store, id);
        }
        Commands::Move { id, bucket, onto } => {
            let mut board = ItemBoard::hydrate(&store);
            cmd_move(&mut board, &store, id, bucket, onto);
        }
    }
}
