//! Card form handling for the terminal user interface.
//!
//! This module provides the `ItemForm` structure for creating and editing
//! work items in the TUI, including field ordering and form state
//! management. Requests never reach the form; they are read-only.

use crate::fields::{ItemKind, ItemStatus, Priority, WorkStatus};
use crate::item::WorkItem;
use crate::tui::input::TextInput;

/// Order constants for the form's fields.
pub const TITLE_ORDER: usize = 0;
pub const DESCRIPTION_ORDER: usize = 1;
pub const PRIORITY_ORDER: usize = 2;
pub const KIND_ORDER: usize = 3;
pub const STATUS_ORDER: usize = 4;

const FIELD_COUNT: usize = 5;

/// Work item form for creating and editing cards.
pub struct ItemForm {
    pub title: TextInput,
    pub description: TextInput,
    pub priority: usize,
    pub kind: usize,
    pub status: usize,
    pub current_field: usize,
    pub priorities: Vec<Priority>,
    pub kinds: Vec<ItemKind>,
    pub statuses: Vec<WorkStatus>,
}

impl ItemForm {
    /// Create an empty form with the defaults new cards get.
    pub fn new() -> Self {
        let mut form = Self {
            title: TextInput::new(),
            description: TextInput::new(),
            priority: 1, // Normal
            kind: 0,     // Task
            status: 1,   // Todo
            current_field: 0,
            priorities: vec![Priority::High, Priority::Normal],
            kinds: vec![ItemKind::Task, ItemKind::Bug, ItemKind::Feature],
            statuses: vec![
                WorkStatus::Backlog,
                WorkStatus::Todo,
                WorkStatus::InProgress,
                WorkStatus::Done,
            ],
        };
        form.update_focus();
        form
    }

    /// Create a form populated from an existing work item.
    ///
    /// A card whose status came from the request vocabulary falls back to
    /// Todo; only work statuses are editable here.
    pub fn from_item(item: &WorkItem) -> Self {
        let mut form = Self::new();
        form.title = TextInput::with_value(&item.title);
        form.description = TextInput::with_value(&item.description);
        form.priority = form
            .priorities
            .iter()
            .position(|&p| p == item.priority)
            .unwrap_or(1);
        form.kind = form.kinds.iter().position(|&k| k == item.kind).unwrap_or(0);
        if let ItemStatus::Work(status) = item.status {
            form.status = form
                .statuses
                .iter()
                .position(|&s| s == status)
                .unwrap_or(1);
        }
        form.update_focus();
        form
    }

    /// The currently selected priority.
    pub fn selected_priority(&self) -> Priority {
        self.priorities[self.priority]
    }

    /// The currently selected item kind.
    pub fn selected_kind(&self) -> ItemKind {
        self.kinds[self.kind]
    }

    /// The currently selected work status.
    pub fn selected_status(&self) -> WorkStatus {
        self.statuses[self.status]
    }

    /// Move to the next field in the form.
    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % FIELD_COUNT;
        self.update_focus();
    }

    /// Move to the previous field in the form.
    pub fn prev_field(&mut self) {
        self.current_field = if self.current_field == 0 {
            FIELD_COUNT - 1
        } else {
            self.current_field - 1
        };
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.title.focused = self.current_field == TITLE_ORDER;
        self.description.focused = self.current_field == DESCRIPTION_ORDER;
    }

    /// Handle character input for the active field.
    pub fn handle_char(&mut self, c: char) {
        match self.current_field {
            TITLE_ORDER => self.title.insert(c),
            DESCRIPTION_ORDER => self.description.insert(c),
            _ => {}
        }
    }

    /// Handle backspace for the active field.
    pub fn handle_backspace(&mut self) {
        match self.current_field {
            TITLE_ORDER => self.title.backspace(),
            DESCRIPTION_ORDER => self.description.backspace(),
            _ => {}
        }
    }

    /// Handle left/right arrows: cursor movement on text fields, cycling
    /// on selectors.
    pub fn handle_left_right(&mut self, right: bool) {
        match self.current_field {
            TITLE_ORDER => {
                if right {
                    self.title.right()
                } else {
                    self.title.left()
                }
            }
            DESCRIPTION_ORDER => {
                if right {
                    self.description.right()
                } else {
                    self.description.left()
                }
            }
            PRIORITY_ORDER => {
                self.priority = cycle(self.priority, self.priorities.len(), right);
            }
            KIND_ORDER => {
                self.kind = cycle(self.kind, self.kinds.len(), right);
            }
            STATUS_ORDER => {
                self.status = cycle(self.status, self.statuses.len(), right);
            }
            _ => {}
        }
    }
}

fn cycle(current: usize, len: usize, forward: bool) -> usize {
    if forward {
        (current + 1) % len
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Origin, RequestStatus};

    #[test]
    fn new_form_defaults_match_new_cards() {
        let form = ItemForm::new();
        assert_eq!(form.selected_priority(), Priority::Normal);
        assert_eq!(form.selected_kind(), ItemKind::Task);
        assert_eq!(form.selected_status(), WorkStatus::Todo);
    }

    #[test]
    fn from_item_restores_selectors() {
        let mut item = WorkItem::draft("Fix crash".into(), "see #core".into());
        item.priority = Priority::High;
        item.kind = ItemKind::Bug;
        item.status = ItemStatus::Work(WorkStatus::InProgress);
        let form = ItemForm::from_item(&item);
        assert_eq!(form.title.value, "Fix crash");
        assert_eq!(form.selected_priority(), Priority::High);
        assert_eq!(form.selected_kind(), ItemKind::Bug);
        assert_eq!(form.selected_status(), WorkStatus::InProgress);
    }

    #[test]
    fn request_status_falls_back_to_todo() {
        let mut item = WorkItem::draft("Mirror".into(), String::new());
        item.origin = Origin::Request;
        item.status = ItemStatus::Request(RequestStatus::Approved);
        let form = ItemForm::from_item(&item);
        assert_eq!(form.selected_status(), WorkStatus::Todo);
    }

    #[test]
    fn field_navigation_wraps() {
        let mut form = ItemForm::new();
        for _ in 0..FIELD_COUNT {
            form.next_field();
        }
        assert_eq!(form.current_field, TITLE_ORDER);
        form.prev_field();
        assert_eq!(form.current_field, STATUS_ORDER);
    }

    #[test]
    fn selectors_cycle_both_directions() {
        let mut form = ItemForm::new();
        form.current_field = PRIORITY_ORDER;
        form.handle_left_right(true);
        assert_eq!(form.selected_priority(), Priority::High);
        form.handle_left_right(false);
        assert_eq!(form.selected_priority(), Priority::Normal);
    }
}
