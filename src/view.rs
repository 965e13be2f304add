//! Display projection of the board: sort, search, bucket grouping, paging.
//!
//! Everything here derives from the canonical card collection without
//! mutating it. The search term is debounced on an explicit clock so the
//! settle behaviour is testable without timers: callers feed key strokes
//! through [`BoardView::set_search`] and tick [`BoardView::poll`] from the
//! event loop.

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use crate::fields::DisplayBucket;
use crate::item::WorkItem;

/// Cards revealed per bucket before "load more", and per increment.
pub const PAGE_SIZE: usize = 10;

/// Input inactivity window before a typed search term takes effect.
pub const SEARCH_SETTLE: Duration = Duration::from_millis(300);

/// Sort cards ascending by upcoming date. Dated cards precede undated ones;
/// the relative order of undated cards is preserved (stable sort).
pub fn sorted_by_upcoming(items: &[WorkItem]) -> Vec<&WorkItem> {
    let mut sorted: Vec<&WorkItem> = items.iter().collect();
    sorted.sort_by(|a, b| match (a.upcoming_date, b.upcoming_date) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}

/// Case-insensitive substring match against title or description.
pub fn matches_search(item: &WorkItem, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    item.title.to_lowercase().contains(&needle)
        || item.description.to_lowercase().contains(&needle)
}

/// View state for the four-bucket board: the debounced search term and each
/// bucket's independent visible-count counter.
#[derive(Debug)]
pub struct BoardView {
    search_input: String,
    applied_search: String,
    pending_since: Option<Instant>,
    visible: [usize; 4],
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView {
    pub fn new() -> Self {
        BoardView {
            search_input: String::new(),
            applied_search: String::new(),
            pending_since: None,
            visible: [PAGE_SIZE; 4],
        }
    }

    /// The term as typed, ahead of the debounce.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// The term currently filtering the board.
    pub fn applied_search(&self) -> &str {
        &self.applied_search
    }

    /// Record a keystroke's worth of search text; the filter itself waits
    /// for the input to settle.
    pub fn set_search(&mut self, text: impl Into<String>, now: Instant) {
        self.search_input = text.into();
        self.pending_since = Some(now);
    }

    /// Apply the typed term once it has been quiet long enough. Returns true
    /// when the applied term changed and the board needs re-deriving.
    pub fn poll(&mut self, now: Instant) -> bool {
        let settled = self
            .pending_since
            .is_some_and(|since| now.duration_since(since) >= SEARCH_SETTLE);
        if !settled {
            return false;
        }
        self.pending_since = None;
        if self.applied_search == self.search_input {
            return false;
        }
        self.applied_search = self.search_input.clone();
        true
    }

    /// Apply the typed term immediately, skipping the settle window.
    pub fn flush_search(&mut self) {
        self.pending_since = None;
        self.applied_search = self.search_input.clone();
    }

    /// The sorted, search-filtered projection of the whole collection.
    pub fn filtered<'a>(&self, items: &'a [WorkItem]) -> Vec<&'a WorkItem> {
        sorted_by_upcoming(items)
            .into_iter()
            .filter(|i| matches_search(i, &self.applied_search))
            .collect()
    }

    /// A bucket's visible cards: filtered, grouped, capped at the bucket's
    /// visible count.
    pub fn column<'a>(&self, items: &'a [WorkItem], bucket: DisplayBucket) -> Vec<&'a WorkItem> {
        self.filtered(items)
            .into_iter()
            .filter(|i| i.status.bucket() == Some(bucket))
            .take(self.visible_count(bucket))
            .collect()
    }

    /// Total filtered cards in a bucket, ignoring the visible cap.
    pub fn bucket_total(&self, items: &[WorkItem], bucket: DisplayBucket) -> usize {
        self.filtered(items)
            .into_iter()
            .filter(|i| i.status.bucket() == Some(bucket))
            .count()
    }

    /// Whether the bucket holds more filtered cards than are shown.
    pub fn has_more(&self, items: &[WorkItem], bucket: DisplayBucket) -> bool {
        self.bucket_total(items, bucket) > self.visible_count(bucket)
    }

    /// Reveal another page of the bucket. Counters only ever grow.
    pub fn load_more(&mut self, bucket: DisplayBucket) {
        self.visible[Self::slot(bucket)] += PAGE_SIZE;
    }

    pub fn visible_count(&self, bucket: DisplayBucket) -> usize {
        self.visible[Self::slot(bucket)]
    }

    fn slot(bucket: DisplayBucket) -> usize {
        match bucket {
            DisplayBucket::Todo => 0,
            DisplayBucket::InProgress => 1,
            DisplayBucket::Done => 2,
            DisplayBucket::Rejected => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{ItemStatus, WorkStatus};
    use chrono::NaiveDate;

    fn item(id: u64, title: &str, status: WorkStatus, date: Option<(i32, u32, u32)>) -> WorkItem {
        let mut item = WorkItem::draft(title.into(), String::new());
        item.id = id;
        item.status = ItemStatus::Work(status);
        item.upcoming_date = date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
        item
    }

    #[test]
    fn dated_cards_sort_ascending_ahead_of_undated() {
        let items = vec![
            item(1, "undated a", WorkStatus::Todo, None),
            item(2, "late", WorkStatus::Todo, Some((2024, 9, 1))),
            item(3, "undated b", WorkStatus::Todo, None),
            item(4, "early", WorkStatus::Todo, Some((2024, 2, 1))),
        ];
        let order: Vec<u64> = sorted_by_upcoming(&items).iter().map(|i| i.id).collect();
        // Dated ascending first, undated afterwards in original order.
        assert_eq!(order, vec![4, 2, 1, 3]);
    }

    #[test]
    fn search_matches_title_or_description_case_insensitively() {
        let mut a = item(1, "Fix login", WorkStatus::Todo, None);
        a.description = "session cookie expires".into();
        let b = item(2, "Write docs", WorkStatus::Todo, None);

        assert!(matches_search(&a, "LOGIN"));
        assert!(matches_search(&a, "Cookie"));
        assert!(!matches_search(&b, "cookie"));
        assert!(matches_search(&b, ""));
    }

    #[test]
    fn debounced_search_converges_to_immediate_filtering() {
        let items = vec![
            item(1, "alpha", WorkStatus::Todo, None),
            item(2, "beta", WorkStatus::Todo, None),
        ];
        let t0 = Instant::now();
        let mut debounced = BoardView::new();
        let mut immediate = BoardView::new();

        // Three keystrokes in quick succession; nothing applies in between.
        debounced.set_search("b", t0);
        debounced.set_search("be", t0 + Duration::from_millis(100));
        debounced.set_search("bet", t0 + Duration::from_millis(200));
        assert!(!debounced.poll(t0 + Duration::from_millis(250)));
        assert_eq!(debounced.column(&items, DisplayBucket::Todo).len(), 2);

        // Input settles; the applied term catches up.
        assert!(debounced.poll(t0 + Duration::from_millis(501)));
        immediate.set_search("bet", t0);
        immediate.flush_search();

        let d: Vec<u64> = debounced
            .column(&items, DisplayBucket::Todo)
            .iter()
            .map(|i| i.id)
            .collect();
        let i: Vec<u64> = immediate
            .column(&items, DisplayBucket::Todo)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(d, i);
        assert_eq!(d, vec![2]);
    }

    #[test]
    fn buckets_cap_at_the_visible_count_and_page_independently() {
        let mut items: Vec<WorkItem> = (1..=25)
            .map(|id| item(id, &format!("todo {id}"), WorkStatus::Todo, None))
            .collect();
        items.push(item(100, "lone done", WorkStatus::Done, None));

        let mut view = BoardView::new();
        assert_eq!(view.column(&items, DisplayBucket::Todo).len(), 10);
        assert!(view.has_more(&items, DisplayBucket::Todo));
        assert!(!view.has_more(&items, DisplayBucket::Done));

        view.load_more(DisplayBucket::Todo);
        assert_eq!(view.column(&items, DisplayBucket::Todo).len(), 20);
        assert!(view.has_more(&items, DisplayBucket::Todo));
        // Other buckets were untouched.
        assert_eq!(view.visible_count(DisplayBucket::Done), 10);

        view.load_more(DisplayBucket::Todo);
        assert_eq!(view.column(&items, DisplayBucket::Todo).len(), 25);
        assert!(!view.has_more(&items, DisplayBucket::Todo));
    }

    #[test]
    fn visible_counts_never_decrease() {
        let mut view = BoardView::new();
        let before = view.visible_count(DisplayBucket::Rejected);
        view.load_more(DisplayBucket::Rejected);
        view.load_more(DisplayBucket::Rejected);
        assert_eq!(
            view.visible_count(DisplayBucket::Rejected),
            before + 2 * PAGE_SIZE
        );
    }

    #[test]
    fn filtering_never_mutates_the_collection() {
        let items = vec![
            item(1, "alpha", WorkStatus::Todo, Some((2024, 6, 1))),
            item(2, "beta", WorkStatus::Done, None),
        ];
        let mut view = BoardView::new();
        view.set_search("alpha", Instant::now());
        view.flush_search();
        let _ = view.column(&items, DisplayBucket::Todo);

        assert_eq!(items[0].id, 1);
        assert_eq!(items[1].id, 2);
        assert_eq!(items.len(), 2);
    }
}
