//! Enumerations and field types for board cards.
//!
//! This module defines the two status vocabularies (work items and requests),
//! the display bucket mapping that groups both into four visual columns, and
//! the remaining categorisation fields carried by every card.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Card priority.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
pub enum Priority {
    High,
    Normal,
}

/// Card type: what kind of work the card tracks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
pub enum ItemKind {
    Task,
    Bug,
    Feature,
}

/// Status vocabulary for user-created work items.
///
/// `Backlog` is accepted by the form and stored, but belongs to no display
/// bucket, so backlogged items never appear on the board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum WorkStatus {
    Backlog,
    Todo,
    InProgress,
    Done,
}

/// Status vocabulary for externally-sourced request cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RequestStatus {
    Pending,
    RequestPendingApproval,
    Approved,
    Rejected,
}

/// Tagged union over the two status vocabularies.
///
/// Serialized untagged so both vocabularies share the flat camelCase token
/// space the data files already use ("todo", "pending", "approved", ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ItemStatus {
    Work(WorkStatus),
    Request(RequestStatus),
}

impl ItemStatus {
    /// The display bucket this status belongs to, if any.
    pub fn bucket(self) -> Option<DisplayBucket> {
        match self {
            ItemStatus::Work(WorkStatus::Backlog) => None,
            ItemStatus::Work(WorkStatus::Todo) | ItemStatus::Request(RequestStatus::Pending) => {
                Some(DisplayBucket::Todo)
            }
            ItemStatus::Work(WorkStatus::InProgress)
            | ItemStatus::Request(RequestStatus::RequestPendingApproval) => {
                Some(DisplayBucket::InProgress)
            }
            ItemStatus::Work(WorkStatus::Done) | ItemStatus::Request(RequestStatus::Approved) => {
                Some(DisplayBucket::Done)
            }
            ItemStatus::Request(RequestStatus::Rejected) => Some(DisplayBucket::Rejected),
        }
    }

    /// The raw storage token, as shown on cards.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemStatus::Work(WorkStatus::Backlog) => "backlog",
            ItemStatus::Work(WorkStatus::Todo) => "todo",
            ItemStatus::Work(WorkStatus::InProgress) => "inProgress",
            ItemStatus::Work(WorkStatus::Done) => "done",
            ItemStatus::Request(RequestStatus::Pending) => "pending",
            ItemStatus::Request(RequestStatus::RequestPendingApproval) => "requestPendingApproval",
            ItemStatus::Request(RequestStatus::Approved) => "approved",
            ItemStatus::Request(RequestStatus::Rejected) => "rejected",
        }
    }
}

/// The four visual columns of the board.
///
/// Each bucket aggregates one status from each vocabulary, except Rejected
/// which only requests reach organically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DisplayBucket {
    Todo,
    InProgress,
    Done,
    Rejected,
}

impl DisplayBucket {
    /// All buckets in board order, left to right.
    pub const ALL: [DisplayBucket; 4] = [
        DisplayBucket::Todo,
        DisplayBucket::InProgress,
        DisplayBucket::Done,
        DisplayBucket::Rejected,
    ];

    /// The status written onto a card dropped into this bucket.
    ///
    /// Rejected retags with the request vocabulary's `rejected`; the work
    /// vocabulary has no equivalent and the stored files use that token.
    pub fn canonical_status(self) -> ItemStatus {
        match self {
            DisplayBucket::Todo => ItemStatus::Work(WorkStatus::Todo),
            DisplayBucket::InProgress => ItemStatus::Work(WorkStatus::InProgress),
            DisplayBucket::Done => ItemStatus::Work(WorkStatus::Done),
            DisplayBucket::Rejected => ItemStatus::Request(RequestStatus::Rejected),
        }
    }
}

/// Card provenance: user-created work items are mutable and draggable,
/// requests are read-only mirrors of an external system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Origin {
    WorkItem,
    Request,
}

/// Column identifiers for the simple three-column task board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TaskColumn {
    Todo,
    InProgress,
    Done,
}

impl TaskColumn {
    /// All columns in board order, left to right.
    pub const ALL: [TaskColumn; 3] =
        [TaskColumn::Todo, TaskColumn::InProgress, TaskColumn::Done];
}

/// Format a priority for table display.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::High => "High",
        Priority::Normal => "Normal",
    }
}

/// Format an item kind for table display.
pub fn format_kind(k: ItemKind) -> &'static str {
    match k {
        ItemKind::Task => "Task",
        ItemKind::Bug => "Bug",
        ItemKind::Feature => "Feature",
    }
}

/// Format a display bucket as its column heading.
pub fn format_bucket(b: DisplayBucket) -> &'static str {
    match b {
        DisplayBucket::Todo => "To Do",
        DisplayBucket::InProgress => "In Progress",
        DisplayBucket::Done => "Done",
        DisplayBucket::Rejected => "Rejected",
    }
}

/// Format a task board column heading.
pub fn format_task_column(c: TaskColumn) -> &'static str {
    match c {
        TaskColumn::Todo => "To Do",
        TaskColumn::InProgress => "In Progress",
        TaskColumn::Done => "Done",
    }
}
