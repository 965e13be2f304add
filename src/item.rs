//! Card data structures.
//!
//! This module defines the `WorkItem` record used by the four-bucket board
//! and the `TaskCard` record used by the simple three-column task board.
//! Serde attributes pin the exact field names and status tokens of the
//! persisted JSON documents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::*;

/// A card on the work item board.
///
/// Work items (`origin: WorkItem`) are created and edited through the form;
/// requests (`origin: Request`) are mirrored from an external collection and
/// are read-only: they carry a `request_id` and are never dragged or saved
/// back to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub status: ItemStatus,
    #[serde(rename = "case")]
    pub origin: Origin,
    #[serde(rename = "upcomingDate", default, skip_serializing_if = "Option::is_none")]
    pub upcoming_date: Option<NaiveDate>,
    #[serde(rename = "requestId", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl WorkItem {
    /// A new unsaved work item with the form's defaults. The id is assigned
    /// by the board on insertion.
    pub fn draft(title: String, description: String) -> Self {
        WorkItem {
            id: 0,
            title,
            description,
            priority: Priority::Normal,
            kind: ItemKind::Task,
            status: ItemStatus::Work(WorkStatus::Todo),
            origin: Origin::WorkItem,
            upcoming_date: None,
            request_id: None,
        }
    }

    /// Whether a drag gesture may move this card.
    pub fn draggable(&self) -> bool {
        self.origin == Origin::WorkItem
    }
}

/// A card on the simple three-column task board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCard {
    pub id: u64,
    pub content: String,
    pub status: TaskColumn,
}
