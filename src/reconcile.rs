//! Drag gesture reconciliation.
//!
//! A drag is a tiny state machine over one in-flight gesture: it goes active
//! on drag-start, stays inert through any number of drag-overs, and resolves
//! on drop into exactly one of a persisted move, a persisted reorder, or a
//! no-op. Nothing in between is ever observable by the UI.
//!
//! The machine is board-agnostic: both the four-bucket work item board and
//! the simple three-column task board implement [`BoardColumns`].

/// Column operations a board exposes to the reconciler.
pub trait BoardColumns {
    /// Bucket/column identifier type.
    type Bucket: Copy + PartialEq;

    /// The bucket currently holding the card, if the card resolves at all.
    fn bucket_of(&self, id: u64) -> Option<Self::Bucket>;

    /// Whether a drag gesture may move this card.
    fn draggable(&self, id: u64) -> bool;

    /// Remove the card from its bucket, retag it with the destination's
    /// canonical status and append it at the destination tail.
    fn move_to_tail(&mut self, id: u64, bucket: Self::Bucket);

    /// The card's index within its bucket's display sequence.
    fn index_in(&self, bucket: Self::Bucket, id: u64) -> Option<usize>;

    /// Reposition the bucket's tail card to `index` (remove then reinsert,
    /// not a swap).
    fn reinsert_from_tail(&mut self, bucket: Self::Bucket, index: usize);
}

/// Where a drop landed: a bucket, and optionally the card dropped onto.
#[derive(Debug, Clone, Copy)]
pub struct DropTarget<B> {
    pub bucket: B,
    /// Id of the card under the drop point, when the gesture named one.
    pub over: Option<u64>,
}

/// Terminal result of one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome<B: PartialEq> {
    /// The card changed buckets; callers persist.
    Moved { id: u64, from: B, to: B },
    /// The card stayed in its bucket but changed position; callers persist.
    Reordered { id: u64, bucket: B, index: usize },
    /// Invalid or non-actionable gesture; no state changed.
    Ignored,
}

/// The gesture state machine. One instance lives per board session; at most
/// one card is in flight at a time.
#[derive(Debug, Default)]
pub struct Reconciler {
    active: Option<u64>,
}

impl Reconciler {
    pub fn new() -> Self {
        Reconciler { active: None }
    }

    /// Id of the card currently being dragged.
    pub fn active(&self) -> Option<u64> {
        self.active
    }

    /// Begin a gesture. Only cards that resolve on the board arm the machine.
    pub fn drag_start<B: BoardColumns>(&mut self, board: &B, id: u64) {
        if board.bucket_of(id).is_some() {
            self.active = Some(id);
        }
    }

    /// Hovering a target mutates nothing; every bucket change waits for the
    /// drop so intermediate hover states carry no side effects.
    pub fn drag_over<B: BoardColumns>(&mut self, _board: &B, _target: DropTarget<B::Bucket>) {}

    /// Abandon the gesture without touching the board.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Resolve the gesture. Returns to idle regardless of outcome.
    pub fn drop_on<B: BoardColumns>(
        &mut self,
        board: &mut B,
        target: Option<DropTarget<B::Bucket>>,
    ) -> DropOutcome<B::Bucket> {
        let Some(active) = self.active.take() else {
            return DropOutcome::Ignored;
        };
        let Some(target) = target else {
            return DropOutcome::Ignored;
        };
        let Some(source) = board.bucket_of(active) else {
            return DropOutcome::Ignored;
        };
        if !board.draggable(active) {
            return DropOutcome::Ignored;
        }
        // A drop-target card that does not resolve on the board means the
        // active/over pairing is inconsistent; the whole gesture aborts.
        if let Some(over) = target.over {
            if over != active && board.bucket_of(over).is_none() {
                return DropOutcome::Ignored;
            }
        }

        board.move_to_tail(active, target.bucket);

        if source == target.bucket {
            if let Some(over) = target.over.filter(|&over| over != active) {
                if let Some(index) = board.index_in(target.bucket, over) {
                    board.reinsert_from_tail(target.bucket, index);
                    return DropOutcome::Reordered {
                        id: active,
                        bucket: target.bucket,
                        index,
                    };
                }
            }
        }

        DropOutcome::Moved {
            id: active,
            from: source,
            to: target.bucket,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ItemBoard;
    use crate::fields::*;
    use crate::item::WorkItem;

    fn work(id: u64, status: WorkStatus) -> WorkItem {
        let mut item = WorkItem::draft(format!("item {id}"), String::new());
        item.id = id;
        item.status = ItemStatus::Work(status);
        item
    }

    fn request(id: u64, status: RequestStatus) -> WorkItem {
        let mut item = WorkItem::draft(format!("request {id}"), String::new());
        item.id = id;
        item.status = ItemStatus::Request(status);
        item.origin = Origin::Request;
        item.request_id = Some(format!("REQ-{id}"));
        item
    }

    fn target(bucket: DisplayBucket, over: Option<u64>) -> Option<DropTarget<DisplayBucket>> {
        Some(DropTarget { bucket, over })
    }

    fn bucket_ids(board: &ItemBoard, bucket: DisplayBucket) -> Vec<u64> {
        board
            .items()
            .iter()
            .filter(|i| i.status.bucket() == Some(bucket))
            .map(|i| i.id)
            .collect()
    }

    #[test]
    fn cross_bucket_drop_retags_and_moves_to_tail() {
        let mut board = ItemBoard::from_items(vec![
            work(3, WorkStatus::Todo),
            work(4, WorkStatus::Done),
        ]);
        let mut gesture = Reconciler::new();

        gesture.drag_start(&board, 3);
        let outcome = gesture.drop_on(&mut board, target(DisplayBucket::Done, None));

        assert_eq!(
            outcome,
            DropOutcome::Moved {
                id: 3,
                from: DisplayBucket::Todo,
                to: DisplayBucket::Done,
            }
        );
        assert_eq!(
            board.get(3).unwrap().status,
            ItemStatus::Work(WorkStatus::Done)
        );
        assert!(bucket_ids(&board, DisplayBucket::Todo).is_empty());
        assert_eq!(bucket_ids(&board, DisplayBucket::Done), vec![4, 3]);
        assert_eq!(gesture.active(), None);
    }

    #[test]
    fn request_cards_never_move() {
        let mut board = ItemBoard::from_items(vec![request(7, RequestStatus::Pending)]);
        let mut gesture = Reconciler::new();

        gesture.drag_start(&board, 7);
        let outcome = gesture.drop_on(&mut board, target(DisplayBucket::Done, None));

        assert_eq!(outcome, DropOutcome::Ignored);
        assert_eq!(
            board.get(7).unwrap().status,
            ItemStatus::Request(RequestStatus::Pending)
        );
    }

    #[test]
    fn same_bucket_drop_reorders_without_changing_membership() {
        let mut board = ItemBoard::from_items(vec![
            work(1, WorkStatus::Todo),
            work(2, WorkStatus::Todo),
            work(3, WorkStatus::Todo),
        ]);
        let mut gesture = Reconciler::new();

        gesture.drag_start(&board, 3);
        let outcome = gesture.drop_on(&mut board, target(DisplayBucket::Todo, Some(1)));

        assert_eq!(
            outcome,
            DropOutcome::Reordered {
                id: 3,
                bucket: DisplayBucket::Todo,
                index: 0,
            }
        );
        assert_eq!(bucket_ids(&board, DisplayBucket::Todo), vec![3, 1, 2]);
        assert_eq!(
            board.get(3).unwrap().status,
            ItemStatus::Work(WorkStatus::Todo)
        );
    }

    #[test]
    fn drop_without_target_is_a_no_op() {
        let mut board = ItemBoard::from_items(vec![work(1, WorkStatus::Todo)]);
        let mut gesture = Reconciler::new();

        gesture.drag_start(&board, 1);
        assert_eq!(gesture.drop_on(&mut board, None), DropOutcome::Ignored);
        assert_eq!(bucket_ids(&board, DisplayBucket::Todo), vec![1]);
    }

    #[test]
    fn drop_with_unresolvable_over_card_aborts() {
        let mut board = ItemBoard::from_items(vec![work(1, WorkStatus::Todo)]);
        let mut gesture = Reconciler::new();

        gesture.drag_start(&board, 1);
        let outcome = gesture.drop_on(&mut board, target(DisplayBucket::Todo, Some(99)));

        assert_eq!(outcome, DropOutcome::Ignored);
        assert_eq!(bucket_ids(&board, DisplayBucket::Todo), vec![1]);
    }

    #[test]
    fn drop_without_drag_start_is_inert() {
        let mut board = ItemBoard::from_items(vec![work(1, WorkStatus::Todo)]);
        let mut gesture = Reconciler::new();
        assert_eq!(
            gesture.drop_on(&mut board, target(DisplayBucket::Done, None)),
            DropOutcome::Ignored
        );
    }

    #[test]
    fn drag_over_carries_no_side_effects() {
        let mut board = ItemBoard::from_items(vec![
            work(1, WorkStatus::Todo),
            work(2, WorkStatus::Done),
        ]);
        let mut gesture = Reconciler::new();

        gesture.drag_start(&board, 1);
        gesture.drag_over(
            &board,
            DropTarget {
                bucket: DisplayBucket::Done,
                over: Some(2),
            },
        );
        assert_eq!(
            board.get(1).unwrap().status,
            ItemStatus::Work(WorkStatus::Todo)
        );
        // Still dragging; the hover changed nothing.
        assert_eq!(gesture.active(), Some(1));
        gesture.cancel();
        assert_eq!(gesture.active(), None);
    }

    #[test]
    fn dropping_onto_rejected_retags_with_rejected() {
        let mut board = ItemBoard::from_items(vec![work(5, WorkStatus::InProgress)]);
        let mut gesture = Reconciler::new();

        gesture.drag_start(&board, 5);
        gesture.drop_on(&mut board, target(DisplayBucket::Rejected, None));

        assert_eq!(
            board.get(5).unwrap().status,
            ItemStatus::Request(RequestStatus::Rejected)
        );
        assert_eq!(bucket_ids(&board, DisplayBucket::Rejected), vec![5]);
    }

    #[test]
    fn repeated_gestures_keep_membership_exclusive() {
        let mut board = ItemBoard::from_items(vec![
            work(1, WorkStatus::Todo),
            work(2, WorkStatus::InProgress),
            request(3, RequestStatus::Approved),
        ]);
        let mut gesture = Reconciler::new();

        for bucket in [
            DisplayBucket::InProgress,
            DisplayBucket::Done,
            DisplayBucket::Todo,
        ] {
            gesture.drag_start(&board, 1);
            gesture.drop_on(&mut board, target(bucket, None));

            let holding: Vec<_> = DisplayBucket::ALL
                .iter()
                .filter(|&&b| bucket_ids(&board, b).contains(&1))
                .collect();
            assert_eq!(holding.len(), 1);
            assert_eq!(*holding[0], bucket);
        }
        // The request card sat still through all of it.
        assert_eq!(
            board.get(3).unwrap().status,
            ItemStatus::Request(RequestStatus::Approved)
        );
    }
}
