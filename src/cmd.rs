//! Command implementations for the CLI interface.
//!
//! This module contains the subcommand definitions and the handlers behind
//! them, from work item CRUD through scripted drag gestures to the TUI
//! launcher. Handlers print their results directly and exit non-zero on
//! fatal errors, matching ordinary CLI expectations.

use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::board::{ItemBoard, TaskBoard};
use crate::extract;
use crate::fields::*;
use crate::item::WorkItem;
use crate::reconcile::{DropOutcome, DropTarget, Reconciler};
use crate::store::Store;
use crate::tui::run::run_board_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive board interface.
    Board,

    /// Add a new work item.
    Add {
        /// Short title for the work item.
        title: String,
        /// Description. Use #word for labels and [YYYY-MM-DD] for an
        /// upcoming date.
        #[arg(long, default_value = "")]
        desc: String,
        /// Priority: high | normal.
        #[arg(long, value_enum, default_value_t = Priority::Normal)]
        priority: Priority,
        /// Item type: task | bug | feature.
        #[arg(long = "type", value_enum, default_value_t = ItemKind::Task)]
        kind: ItemKind,
        /// Status: backlog | todo | in-progress | done.
        #[arg(long, value_enum, default_value_t = WorkStatus::Todo)]
        status: WorkStatus,
    },

    /// List cards with optional filters.
    List {
        /// Only show one display bucket.
        #[arg(long, value_enum)]
        bucket: Option<DisplayBucket>,
        /// Case-insensitive search over title and description.
        #[arg(long)]
        search: Option<String>,
        /// Include backlogged items that belong to no bucket.
        #[arg(long)]
        all: bool,
    },

    /// View a single card by id.
    View {
        /// Card id to view.
        id: u64,
    },

    /// Update fields on a work item.
    Update {
        /// Work item id to update.
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        desc: Option<String>,
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        #[arg(long = "type", value_enum)]
        kind: Option<ItemKind>,
        #[arg(long, value_enum)]
        status: Option<WorkStatus>,
    },

    /// Delete a work item by id.
    Delete {
        /// Work item id to delete.
        id: u64,
    },

    /// Move a work item to a bucket, as one scripted drag gesture.
    Move {
        /// Work item id to move.
        id: u64,
        /// Destination bucket: todo | in-progress | done | rejected.
        #[arg(value_enum)]
        bucket: DisplayBucket,
        /// Card to drop onto, for same-bucket reordering.
        #[arg(long)]
        onto: Option<u64>,
    },

    /// Manage the simple three-column task board.
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a card to a column.
    Add {
        /// Column: todo | in-progress | done.
        #[arg(value_enum)]
        column: TaskColumn,
        /// Card content.
        content: String,
    },
    /// List all columns.
    List,
    /// Rewrite a card's content.
    Update {
        /// Card id to update.
        id: u64,
        /// New content.
        content: String,
    },
    /// Delete a card.
    Delete {
        /// Card id to delete.
        id: u64,
    },
    /// Move a card to a column, as one scripted drag gesture.
    Move {
        /// Card id to move.
        id: u64,
        /// Destination column.
        #[arg(value_enum)]
        column: TaskColumn,
        /// Card to drop onto, for same-column reordering.
        #[arg(long)]
        onto: Option<u64>,
    },
}

/// Launch the terminal user interface.
pub fn cmd_board(store: &Store) {
    if let Err(e) = run_board_tui(store) {
        eprintln!("Board UI error: {e}");
        std::process::exit(1);
    }
}

/// Add a new work item.
pub fn cmd_add(
    board: &mut ItemBoard,
    store: &Store,
    title: String,
    desc: String,
    priority: Priority,
    kind: ItemKind,
    status: WorkStatus,
) {
    let mut draft = WorkItem::draft(title, desc);
    draft.priority = priority;
    draft.kind = kind;
    draft.status = ItemStatus::Work(status);
    draft.upcoming_date = extract::upcoming_date(&draft.description);

    match board.add(store, draft) {
        Ok(id) => println!("Added work item {id}"),
        Err(e) => {
            eprintln!("Error saving work items: {e}");
            std::process::exit(1);
        }
    }
}

/// List cards, sorted by upcoming date, optionally filtered.
pub fn cmd_list(board: &ItemBoard, bucket: Option<DisplayBucket>, search: Option<String>, all: bool) {
    let mut view = crate::view::BoardView::new();
    if let Some(term) = search {
        view.set_search(term, std::time::Instant::now());
        view.flush_search();
    }

    let rows: Vec<&WorkItem> = view
        .filtered(board.items())
        .into_iter()
        .filter(|i| match (bucket, i.status.bucket()) {
            (Some(wanted), Some(b)) => b == wanted,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => all,
        })
        .collect();

    if rows.is_empty() {
        println!("No cards match.");
        return;
    }
    print_item_table(&rows);
}

/// Show one card in full.
pub fn cmd_view(board: &ItemBoard, id: u64) {
    let Some(item) = board.get(id) else {
        eprintln!("No card with id {id}");
        std::process::exit(1);
    };

    println!("Card #{}: {}", item.id, item.title);
    println!(
        "  Bucket:    {}",
        item.status.bucket().map(format_bucket).unwrap_or("-")
    );
    println!("  Status:    {}", item.status.as_str());
    println!("  Priority:  {}", format_priority(item.priority));
    println!("  Type:      {}", format_kind(item.kind));
    println!(
        "  Upcoming:  {}",
        item.upcoming_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".into())
    );
    let labels = extract::tags(&item.description);
    println!(
        "  Labels:    {}",
        if labels.is_empty() {
            "-".to_string()
        } else {
            labels.join(" ")
        }
    );
    if let Some(ref request_id) = item.request_id {
        println!("  Request:   {request_id} (read-only)");
    }
    if !item.description.is_empty() {
        println!("  Description:");
        println!("    {}", item.description);
    }
}

/// Patch fields on a work item. The upcoming date is re-derived from the
/// effective description, as the form does on every save.
pub fn cmd_update(
    board: &mut ItemBoard,
    store: &Store,
    id: u64,
    title: Option<String>,
    desc: Option<String>,
    priority: Option<Priority>,
    kind: Option<ItemKind>,
    status: Option<WorkStatus>,
) {
    let Some(existing) = board.get(id) else {
        eprintln!("No card with id {id}");
        std::process::exit(1);
    };
    if existing.origin == Origin::Request {
        eprintln!("Card {id} is a request and is read-only");
        std::process::exit(1);
    }

    let mut updated = existing.clone();
    if let Some(title) = title {
        updated.title = title;
    }
    if let Some(desc) = desc {
        updated.description = desc;
    }
    if let Some(priority) = priority {
        updated.priority = priority;
    }
    if let Some(kind) = kind {
        updated.kind = kind;
    }
    if let Some(status) = status {
        updated.status = ItemStatus::Work(status);
    }
    updated.upcoming_date = extract::upcoming_date(&updated.description);

    match board.update(store, updated) {
        Ok(true) => println!("Updated work item {id}"),
        Ok(false) => {
            eprintln!("No card with id {id}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error saving work items: {e}");
            std::process::exit(1);
        }
    }
}

/// Delete a work item.
pub fn cmd_delete(board: &mut ItemBoard, store: &Store, id: u64) {
    match board.get(id) {
        None => {
            eprintln!("No card with id {id}");
            std::process::exit(1);
        }
        Some(item) if item.origin == Origin::Request => {
            eprintln!("Card {id} is a request and is read-only");
            std::process::exit(1);
        }
        Some(_) => {}
    }

    match board.remove(store, id) {
        Ok(_) => println!("Deleted work item {id}"),
        Err(e) => {
            eprintln!("Error saving work items: {e}");
            std::process::exit(1);
        }
    }
}

/// Run one drag gesture against the work item board.
pub fn cmd_move(
    board: &mut ItemBoard,
    store: &Store,
    id: u64,
    bucket: DisplayBucket,
    onto: Option<u64>,
) {
    let mut gesture = Reconciler::new();
    gesture.drag_start(board, id);
    let outcome = gesture.drop_on(board, Some(DropTarget { bucket, over: onto }));

    match outcome {
        DropOutcome::Ignored => println!("Move ignored: card {id} cannot move there"),
        DropOutcome::Moved { to, .. } => {
            persist_or_die(board.persist(store));
            println!("Moved card {id} to {}", format_bucket(to));
        }
        DropOutcome::Reordered { index, .. } => {
            persist_or_die(board.persist(store));
            println!(
                "Reordered card {id} to position {} in {}",
                index + 1,
                format_bucket(bucket)
            );
        }
    }
}

/// Dispatch a simple task board action.
pub fn cmd_task(board: &mut TaskBoard, store: &Store, action: TaskAction) {
    match action {
        TaskAction::Add { column, content } => match board.add_card(store, column, content) {
            Ok(id) => println!("Added task {id} to {}", format_task_column(column)),
            Err(e) => {
                eprintln!("Error saving tasks: {e}");
                std::process::exit(1);
            }
        },
        TaskAction::List => {
            for column in TaskColumn::ALL {
                println!("{}:", format_task_column(column));
                for card in board.column(column) {
                    println!("  {:<5} {}", card.id, card.content);
                }
            }
        }
        TaskAction::Update { id, content } => match board.update_card(store, id, content) {
            Ok(true) => println!("Updated task {id}"),
            Ok(false) => {
                eprintln!("No task with id {id}");
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error saving tasks: {e}");
                std::process::exit(1);
            }
        },
        TaskAction::Delete { id } => match board.delete_card(store, id) {
            Ok(true) => println!("Deleted task {id}"),
            Ok(false) => {
                eprintln!("No task with id {id}");
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error saving tasks: {e}");
                std::process::exit(1);
            }
        },
        TaskAction::Move { id, column, onto } => {
            let mut gesture = Reconciler::new();
            gesture.drag_start(board, id);
            let outcome = gesture.drop_on(
                board,
                Some(DropTarget {
                    bucket: column,
                    over: onto,
                }),
            );
            match outcome {
                DropOutcome::Ignored => println!("Move ignored: task {id} cannot move there"),
                DropOutcome::Moved { to, .. } => {
                    persist_or_die(board.persist(store));
                    println!("Moved task {id} to {}", format_task_column(to));
                }
                DropOutcome::Reordered { index, .. } => {
                    persist_or_die(board.persist(store));
                    println!(
                        "Reordered task {id} to position {} in {}",
                        index + 1,
                        format_task_column(column)
                    );
                }
            }
        }
    }
}

/// Generate shell completions on stdout.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}

fn persist_or_die(result: std::io::Result<()>) {
    if let Err(e) = result {
        eprintln!("Error saving board: {e}");
        std::process::exit(1);
    }
}

/// Print cards in a formatted table.
fn print_item_table(items: &[&WorkItem]) {
    println!(
        "{:<5} {:<12} {:<7} {:<8} {:<11} {:<24} {}",
        "ID", "Bucket", "Pri", "Type", "Upcoming", "Title", "Labels"
    );
    for item in items {
        let bucket = item.status.bucket().map(format_bucket).unwrap_or("-");
        let upcoming = item
            .upcoming_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".into());
        let labels = extract::tags(&item.description).join(" ");
        println!(
            "{:<5} {:<12} {:<7} {:<8} {:<11} {:<24} {}",
            item.id,
            bucket,
            format_priority(item.priority),
            format_kind(item.kind),
            upcoming,
            truncate(&item.title, 24),
            labels
        );
    }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}
