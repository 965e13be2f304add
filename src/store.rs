//! Flat-file persistence gateway.
//!
//! Each named resource is one JSON document on disk, read and written whole.
//! A missing or unparseable file loads as the empty collection so a fresh
//! data directory needs no setup step. Writes go through a temp file and
//! rename; there is no locking, so overlapping writers race and the last
//! write wins at file granularity.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::item::{TaskCard, WorkItem};

/// Named persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Tasks,
    WorkItems,
    Requests,
}

impl Resource {
    /// File name of the resource inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Resource::Tasks => "tasks.json",
            Resource::WorkItems => "work-items.json",
            Resource::Requests => "requests.json",
        }
    }
}

/// The three-column document persisted for the simple task board.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBoardDoc {
    pub todo: Vec<TaskCard>,
    pub in_progress: Vec<TaskCard>,
    pub done: Vec<TaskCard>,
}

/// Repository over the data directory.
///
/// Requests have no save path: that collection is read-only from this
/// system's perspective and is never written back.
#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    pub fn new(data_dir: &Path) -> Self {
        Store {
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// On-disk path of a resource.
    pub fn path(&self, resource: Resource) -> PathBuf {
        self.data_dir.join(resource.file_name())
    }

    /// Load the work item collection, empty on read failure.
    pub fn load_work_items(&self) -> Vec<WorkItem> {
        self.load_or_default(Resource::WorkItems)
    }

    /// Load the request collection, empty on read failure.
    pub fn load_requests(&self) -> Vec<WorkItem> {
        self.load_or_default(Resource::Requests)
    }

    /// Load the simple task board document, empty on read failure.
    pub fn load_task_board(&self) -> TaskBoardDoc {
        self.load_or_default(Resource::Tasks)
    }

    /// Overwrite the work item collection.
    pub fn save_work_items(&self, items: &[WorkItem]) -> std::io::Result<()> {
        self.save(Resource::WorkItems, &items)
    }

    /// Overwrite the simple task board document.
    pub fn save_task_board(&self, board: &TaskBoardDoc) -> std::io::Result<()> {
        self.save(Resource::Tasks, board)
    }

    /// Read and parse a whole resource document. Any failure is reported on
    /// stderr and degrades to the default value; callers never see it.
    fn load_or_default<T: DeserializeOwned + Default>(&self, resource: Resource) -> T {
        let path = self.path(resource);
        if !path.exists() {
            return T::default();
        }
        let mut buf = String::new();
        match File::open(&path).and_then(|mut f| f.read_to_string(&mut buf)) {
            Ok(_) => match serde_json::from_str(&buf) {
                Ok(value) => value,
                Err(e) => {
                    eprintln!("Error parsing {}, treating as empty: {e}", resource.file_name());
                    T::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading {}, treating as empty: {e}", resource.file_name());
                T::default()
            }
        }
    }

    /// Serialize and overwrite a whole resource document.
    fn save<T: Serialize>(&self, resource: Resource, value: &T) -> std::io::Result<()> {
        let path = self.path(resource);
        // Atomic-ish write via temp + rename.
        let tmp = path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        let data = serde_json::to_string_pretty(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{ItemStatus, Origin, RequestStatus};

    #[test]
    fn missing_files_load_as_empty_collections() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        assert!(store.load_work_items().is_empty());
        assert!(store.load_requests().is_empty());
        assert!(store.load_task_board().todo.is_empty());
    }

    #[test]
    fn corrupt_file_loads_as_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        fs::write(store.path(Resource::WorkItems), "{not json").unwrap();
        assert!(store.load_work_items().is_empty());
    }

    #[test]
    fn save_replaces_the_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());

        let mut first = WorkItem::draft("one".into(), String::new());
        first.id = 1;
        store.save_work_items(&[first]).unwrap();

        let mut second = WorkItem::draft("two".into(), String::new());
        second.id = 2;
        store.save_work_items(&[second]).unwrap();

        let loaded = store.load_work_items();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "two");
    }

    #[test]
    fn request_fields_survive_loading() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        fs::write(
            store.path(Resource::Requests),
            r#"[{
                "id": 9,
                "title": "Access request",
                "description": "grant #infra access",
                "priority": "High",
                "type": "Task",
                "status": "requestPendingApproval",
                "case": "Request",
                "requestId": "REQ-104"
            }]"#,
        )
        .unwrap();

        let requests = store.load_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].origin, Origin::Request);
        assert_eq!(
            requests[0].status,
            ItemStatus::Request(RequestStatus::RequestPendingApproval)
        );
        assert_eq!(requests[0].request_id.as_deref(), Some("REQ-104"));
    }
}
