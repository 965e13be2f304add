//! In-memory board state over the persistence gateway.
//!
//! `ItemBoard` owns the merged work-item/request collection for a session;
//! `TaskBoard` owns the simple three-column task document. Every mutation
//! writes straight back through the store; there is no batching and no
//! rollback, so a failed write leaves memory ahead of disk until the next
//! successful save or reload.

use std::path::Path;

use crate::fields::*;
use crate::item::{TaskCard, WorkItem};
use crate::reconcile::BoardColumns;
use crate::store::{Store, TaskBoardDoc};

/// The merged card collection behind the four-bucket board.
///
/// Work items come first, requests after, both in load order. Requests are
/// read-only passengers: they render and filter like any card but are never
/// written back to disk.
#[derive(Debug, Default)]
pub struct ItemBoard {
    items: Vec<WorkItem>,
}

impl ItemBoard {
    /// Load both source collections and merge them.
    pub fn hydrate(store: &Store) -> Self {
        let mut items = store.load_work_items();
        items.extend(store.load_requests());
        ItemBoard { items }
    }

    /// Build a board from an in-memory collection.
    pub fn from_items(items: Vec<WorkItem>) -> Self {
        ItemBoard { items }
    }

    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    /// First card matching the id. Linear scan; with the weak id generation
    /// a duplicate id across merged sources resolves to the earliest card.
    pub fn get(&self, id: u64) -> Option<&WorkItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Next card id: highest existing id plus one, over the whole merged
    /// collection, starting at 1 when empty.
    pub fn next_id(&self) -> u64 {
        self.items.iter().map(|i| i.id).max().unwrap_or(0) + 1
    }

    /// Append a new work item and persist. The draft's id is replaced and
    /// its origin forced to `WorkItem`.
    pub fn add(&mut self, store: &Store, mut draft: WorkItem) -> std::io::Result<u64> {
        draft.id = self.next_id();
        draft.origin = Origin::WorkItem;
        let id = draft.id;
        self.items.push(draft);
        self.persist(store)?;
        Ok(id)
    }

    /// Replace the first card matching `updated.id` in place and persist.
    /// Returns false when no card matched.
    pub fn update(&mut self, store: &Store, updated: WorkItem) -> std::io::Result<bool> {
        let Some(index) = self.items.iter().position(|i| i.id == updated.id) else {
            return Ok(false);
        };
        self.items[index] = updated;
        self.persist(store)?;
        Ok(true)
    }

    /// Remove every card matching the id and persist.
    /// Returns false when no card matched.
    pub fn remove(&mut self, store: &Store, id: u64) -> std::io::Result<bool> {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.persist(store)?;
        Ok(true)
    }

    /// Write the work item subset back to its resource. Request cards stay
    /// in memory only.
    pub fn persist(&self, store: &Store) -> std::io::Result<()> {
        let own: Vec<WorkItem> = self
            .items
            .iter()
            .filter(|i| i.origin == Origin::WorkItem)
            .cloned()
            .collect();
        store.save_work_items(&own)
    }

    /// Flat positions of a bucket's cards, in display order.
    fn bucket_positions(&self, bucket: DisplayBucket) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, i)| i.status.bucket() == Some(bucket))
            .map(|(pos, _)| pos)
            .collect()
    }
}

impl BoardColumns for ItemBoard {
    type Bucket = DisplayBucket;

    fn bucket_of(&self, id: u64) -> Option<DisplayBucket> {
        self.get(id).and_then(|i| i.status.bucket())
    }

    fn draggable(&self, id: u64) -> bool {
        self.get(id).is_some_and(|i| i.draggable())
    }

    fn move_to_tail(&mut self, id: u64, bucket: DisplayBucket) {
        let Some(pos) = self.items.iter().position(|i| i.id == id) else {
            return;
        };
        let mut card = self.items.remove(pos);
        card.status = bucket.canonical_status();
        // Tail of the flat collection is also the tail of the bucket's
        // filtered display sequence.
        self.items.push(card);
    }

    fn index_in(&self, bucket: DisplayBucket, id: u64) -> Option<usize> {
        self.items
            .iter()
            .filter(|i| i.status.bucket() == Some(bucket))
            .position(|i| i.id == id)
    }

    fn reinsert_from_tail(&mut self, bucket: DisplayBucket, index: usize) {
        let positions = self.bucket_positions(bucket);
        let (Some(&tail_pos), Some(&target_pos)) = (positions.last(), positions.get(index)) else {
            return;
        };
        if tail_pos == target_pos {
            return;
        }
        let card = self.items.remove(tail_pos);
        self.items.insert(target_pos, card);
    }
}

/// The simple three-column task board, persisted as one document.
#[derive(Debug, Default)]
pub struct TaskBoard {
    doc: TaskBoardDoc,
}

impl TaskBoard {
    pub fn hydrate(store: &Store) -> Self {
        TaskBoard {
            doc: store.load_task_board(),
        }
    }

    pub fn from_doc(doc: TaskBoardDoc) -> Self {
        TaskBoard { doc }
    }

    pub fn column(&self, column: TaskColumn) -> &[TaskCard] {
        match column {
            TaskColumn::Todo => &self.doc.todo,
            TaskColumn::InProgress => &self.doc.in_progress,
            TaskColumn::Done => &self.doc.done,
        }
    }

    fn column_mut(&mut self, column: TaskColumn) -> &mut Vec<TaskCard> {
        match column {
            TaskColumn::Todo => &mut self.doc.todo,
            TaskColumn::InProgress => &mut self.doc.in_progress,
            TaskColumn::Done => &mut self.doc.done,
        }
    }

    /// Next card id across all three columns, starting at 1 when empty.
    pub fn next_id(&self) -> u64 {
        TaskColumn::ALL
            .iter()
            .flat_map(|&c| self.column(c).iter())
            .map(|t| t.id)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Locate a card by id: the column holding it and its index there.
    pub fn find(&self, id: u64) -> Option<(TaskColumn, usize)> {
        for column in TaskColumn::ALL {
            if let Some(index) = self.column(column).iter().position(|t| t.id == id) {
                return Some((column, index));
            }
        }
        None
    }

    /// Append a new card to a column and persist.
    pub fn add_card(
        &mut self,
        store: &Store,
        column: TaskColumn,
        content: String,
    ) -> std::io::Result<u64> {
        let id = self.next_id();
        self.column_mut(column).push(TaskCard {
            id,
            content,
            status: column,
        });
        self.persist(store)?;
        Ok(id)
    }

    /// Rewrite the content of the first card matching the id and persist.
    pub fn update_card(
        &mut self,
        store: &Store,
        id: u64,
        content: String,
    ) -> std::io::Result<bool> {
        let Some((column, index)) = self.find(id) else {
            return Ok(false);
        };
        self.column_mut(column)[index].content = content;
        self.persist(store)?;
        Ok(true)
    }

    /// Remove a card from whichever column holds it and persist.
    pub fn delete_card(&mut self, store: &Store, id: u64) -> std::io::Result<bool> {
        let Some((column, index)) = self.find(id) else {
            return Ok(false);
        };
        self.column_mut(column).remove(index);
        self.persist(store)?;
        Ok(true)
    }

    pub fn persist(&self, store: &Store) -> std::io::Result<()> {
        store.save_task_board(&self.doc)
    }
}

impl BoardColumns for TaskBoard {
    type Bucket = TaskColumn;

    fn bucket_of(&self, id: u64) -> Option<TaskColumn> {
        self.find(id).map(|(column, _)| column)
    }

    fn draggable(&self, _id: u64) -> bool {
        true
    }

    fn move_to_tail(&mut self, id: u64, bucket: TaskColumn) {
        let Some((column, index)) = self.find(id) else {
            return;
        };
        let mut card = self.column_mut(column).remove(index);
        card.status = bucket;
        self.column_mut(bucket).push(card);
    }

    fn index_in(&self, bucket: TaskColumn, id: u64) -> Option<usize> {
        self.column(bucket).iter().position(|t| t.id == id)
    }

    fn reinsert_from_tail(&mut self, bucket: TaskColumn, index: usize) {
        let cards = self.column_mut(bucket);
        let Some(card) = cards.pop() else {
            return;
        };
        if index <= cards.len() {
            cards.insert(index, card);
        } else {
            cards.push(card);
        }
    }
}

/// Build a data directory path for the session: the explicit flag, the
/// `WORKBOARD_DIR` environment variable, or `~/.workboard`.
pub fn resolve_data_dir(flag: Option<&Path>) -> std::path::PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Ok(dir) = std::env::var("WORKBOARD_DIR") {
        return std::path::PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    std::path::PathBuf::from(home).join(".workboard")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Resource;

    fn work(id: u64, title: &str, status: WorkStatus) -> WorkItem {
        let mut item = WorkItem::draft(title.into(), String::new());
        item.id = id;
        item.status = ItemStatus::Work(status);
        item
    }

    #[test]
    fn first_item_id_is_one() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        let mut board = ItemBoard::default();
        let id = board
            .add(&store, WorkItem::draft("first".into(), String::new()))
            .unwrap();
        assert_eq!(id, 1);
    }

    #[test]
    fn ids_continue_from_the_highest_existing() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        let mut board = ItemBoard::from_items(vec![
            work(2, "a", WorkStatus::Todo),
            work(7, "b", WorkStatus::Done),
            work(4, "c", WorkStatus::Todo),
        ]);
        let id = board
            .add(&store, WorkItem::draft("next".into(), String::new()))
            .unwrap();
        assert_eq!(id, 8);
    }

    #[test]
    fn update_hits_the_first_matching_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        // Duplicate ids can arise from merging sources; first match wins.
        let mut board = ItemBoard::from_items(vec![
            work(5, "earlier", WorkStatus::Todo),
            work(5, "later", WorkStatus::Done),
        ]);

        let mut patch = work(5, "patched", WorkStatus::InProgress);
        patch.description = "now in flight".into();
        assert!(board.update(&store, patch).unwrap());

        assert_eq!(board.items()[0].title, "patched");
        assert_eq!(board.items()[1].title, "later");
    }

    #[test]
    fn requests_never_reach_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        let mut request = work(9, "mirrored", WorkStatus::Todo);
        request.origin = Origin::Request;
        request.status = ItemStatus::Request(RequestStatus::Pending);

        let mut board = ItemBoard::from_items(vec![request]);
        board
            .add(&store, WorkItem::draft("mine".into(), String::new()))
            .unwrap();

        let saved = store.load_work_items();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].title, "mine");
        // The request file was never created, let alone rewritten.
        assert!(!store.path(Resource::Requests).exists());
    }

    #[test]
    fn removing_a_missing_id_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        let mut board = ItemBoard::from_items(vec![work(1, "only", WorkStatus::Todo)]);
        assert!(!board.remove(&store, 42).unwrap());
        assert_eq!(board.items().len(), 1);
    }

    #[test]
    fn task_board_round_trips_all_three_columns() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        let mut board = TaskBoard::default();

        let a = board
            .add_card(&store, TaskColumn::Todo, "write spec".into())
            .unwrap();
        let b = board
            .add_card(&store, TaskColumn::InProgress, "review".into())
            .unwrap();
        assert_eq!((a, b), (1, 2));

        let reloaded = TaskBoard::hydrate(&store);
        assert_eq!(reloaded.column(TaskColumn::Todo).len(), 1);
        assert_eq!(reloaded.column(TaskColumn::InProgress)[0].content, "review");
        assert_eq!(reloaded.next_id(), 3);
    }

    #[test]
    fn task_board_update_and_delete_locate_across_columns() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        let mut board = TaskBoard::default();
        board
            .add_card(&store, TaskColumn::Todo, "one".into())
            .unwrap();
        let id = board
            .add_card(&store, TaskColumn::Done, "two".into())
            .unwrap();

        assert!(board.update_card(&store, id, "two, revised".into()).unwrap());
        assert_eq!(board.column(TaskColumn::Done)[0].content, "two, revised");

        assert!(board.delete_card(&store, id).unwrap());
        assert!(board.column(TaskColumn::Done).is_empty());
        assert!(!board.delete_card(&store, id).unwrap());
    }
}
