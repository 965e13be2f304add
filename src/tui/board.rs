//! Kanban board interface.
//!
//! This module implements the four-column board view where cards are
//! organized into display buckets, with grab-and-drop card movement,
//! debounced search, incremental per-column paging, and an inline form
//! for creating and editing work items.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::board::ItemBoard;
use crate::extract;
use crate::fields::*;
use crate::item::WorkItem;
use crate::reconcile::{DropOutcome, DropTarget, Reconciler};
use crate::store::Store;
use crate::tui::colors::{AMBER, BRICK_RED, MOSS_GREEN, SLATE_BLUE};
use crate::tui::item_form::{
    ItemForm, DESCRIPTION_ORDER, KIND_ORDER, PRIORITY_ORDER, STATUS_ORDER, TITLE_ORDER,
};
use crate::view::BoardView;

/// Rendered height of one card, borders included.
const CARD_HEIGHT: usize = 5;

/// Main board application state.
pub struct BoardApp {
    board: ItemBoard,
    store: Store,
    view: BoardView,
    gesture: Reconciler,
    selected_bucket: usize, // Index into DisplayBucket::ALL
    selected_card: usize,   // Selected card within the column
    column_scroll_offsets: [usize; 4],
    status_message: String,
    show_detail: bool,
    search_active: bool,
    form: Option<ItemForm>,
    editing_id: Option<u64>, // Card being edited, None while adding
    confirm_delete: Option<u64>,
}

impl BoardApp {
    /// Create a new board app over the given store.
    pub fn new(store: &Store) -> Self {
        BoardApp {
            board: ItemBoard::hydrate(store),
            store: store.clone(),
            view: BoardView::new(),
            gesture: Reconciler::new(),
            selected_bucket: 0,
            selected_card: 0,
            column_scroll_offsets: [0; 4],
            status_message: String::new(),
            show_detail: false,
            search_active: false,
            form: None,
            editing_id: None,
            confirm_delete: None,
        }
    }

    fn bucket_at(index: usize) -> DisplayBucket {
        DisplayBucket::ALL[index]
    }

    fn accent(bucket: DisplayBucket) -> Color {
        match bucket {
            DisplayBucket::Todo => SLATE_BLUE,
            DisplayBucket::InProgress => AMBER,
            DisplayBucket::Done => MOSS_GREEN,
            DisplayBucket::Rejected => BRICK_RED,
        }
    }

    /// Ids of the selected column's visible cards.
    fn visible_ids(&self, bucket: DisplayBucket) -> Vec<u64> {
        self.view
            .column(self.board.items(), bucket)
            .iter()
            .map(|i| i.id)
            .collect()
    }

    /// Id of the card under the cursor, if the column has any.
    fn selected_card_id(&self) -> Option<u64> {
        self.visible_ids(Self::bucket_at(self.selected_bucket))
            .get(self.selected_card)
            .copied()
    }

    /// Ensure the selected card index is valid for its column.
    fn clamp_selection(&mut self) {
        let len = self
            .visible_ids(Self::bucket_at(self.selected_bucket))
            .len();
        if len == 0 {
            self.selected_card = 0;
            self.column_scroll_offsets[self.selected_bucket] = 0;
        } else if self.selected_card >= len {
            self.selected_card = len - 1;
        }
    }

    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Resolve the in-flight grab against the cursor position.
    fn drop_grabbed(&mut self) {
        let bucket = Self::bucket_at(self.selected_bucket);
        let over = self.selected_card_id();
        let outcome = self
            .gesture
            .drop_on(&mut self.board, Some(DropTarget { bucket, over }));

        match outcome {
            DropOutcome::Ignored => {
                self.set_status_message("Move ignored: card cannot move there".to_string());
            }
            DropOutcome::Moved { id, to, .. } => {
                if let Err(e) = self.board.persist(&self.store) {
                    self.set_status_message(format!("Error saving: {}", e));
                } else {
                    self.set_status_message(format!("Moved card #{} to {}", id, format_bucket(to)));
                }
                self.select_card(id);
            }
            DropOutcome::Reordered { id, index, .. } => {
                if let Err(e) = self.board.persist(&self.store) {
                    self.set_status_message(format!("Error saving: {}", e));
                } else {
                    self.set_status_message(format!(
                        "Reordered card #{} to position {}",
                        id,
                        index + 1
                    ));
                }
                self.select_card(id);
            }
        }
        self.clamp_selection();
    }

    /// Move the cursor onto a card, wherever it now lives.
    fn select_card(&mut self, id: u64) {
        for (bucket_index, bucket) in DisplayBucket::ALL.iter().enumerate() {
            if let Some(position) = self.visible_ids(*bucket).iter().position(|&c| c == id) {
                self.selected_bucket = bucket_index;
                self.selected_card = position;
                return;
            }
        }
    }

    /// Save the open form as a new card or an update to an existing one.
    fn save_form(&mut self) {
        let Some(form) = self.form.take() else {
            return;
        };
        if form.title.value.trim().is_empty() {
            self.set_status_message("Title is required".to_string());
            self.form = Some(form);
            return;
        }

        let result = match self.editing_id.take() {
            None => {
                let mut draft = WorkItem::draft(form.title.value.clone(), form.description.value.clone());
                draft.priority = form.selected_priority();
                draft.kind = form.selected_kind();
                draft.status = ItemStatus::Work(form.selected_status());
                draft.upcoming_date = extract::upcoming_date(&draft.description);
                self.board.add(&self.store, draft).map(|id| {
                    self.set_status_message(format!("Added card #{}", id));
                    self.select_card(id);
                })
            }
            Some(id) => match self.board.get(id) {
                None => {
                    self.set_status_message(format!("Card #{} no longer exists", id));
                    return;
                }
                Some(existing) => {
                    let mut updated = existing.clone();
                    updated.title = form.title.value.clone();
                    updated.description = form.description.value.clone();
                    updated.priority = form.selected_priority();
                    updated.kind = form.selected_kind();
                    updated.status = ItemStatus::Work(form.selected_status());
                    updated.upcoming_date = extract::upcoming_date(&updated.description);
                    self.board.update(&self.store, updated).map(|_| {
                        self.set_status_message(format!("Updated card #{}", id));
                    })
                }
            },
        };

        if let Err(e) = result {
            self.set_status_message(format!("Error saving: {}", e));
        }
        self.clamp_selection();
    }

    /// Handle keyboard input. Returns true when the app should exit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if !event::poll(Duration::from_millis(50))? {
            return Ok(false);
        }
        let Event::Key(key) = event::read()? else {
            return Ok(false);
        };

        // Form dialog swallows all input while open
        if let Some(ref mut form) = self.form {
            match key.code {
                KeyCode::Esc => {
                    self.form = None;
                    self.editing_id = None;
                    self.set_status_message("Cancelled".to_string());
                }
                KeyCode::Enter => self.save_form(),
                KeyCode::Tab | KeyCode::Down => form.next_field(),
                KeyCode::BackTab | KeyCode::Up => form.prev_field(),
                KeyCode::Left => form.handle_left_right(false),
                KeyCode::Right => form.handle_left_right(true),
                KeyCode::Backspace => form.handle_backspace(),
                KeyCode::Char(c) => form.handle_char(c),
                _ => {}
            }
            return Ok(false);
        }

        // Delete confirmation
        if let Some(id) = self.confirm_delete {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.confirm_delete = None;
                    match self.board.remove(&self.store, id) {
                        Ok(_) => self.set_status_message(format!("Deleted card #{}", id)),
                        Err(e) => self.set_status_message(format!("Error saving: {}", e)),
                    }
                    self.clamp_selection();
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.confirm_delete = None;
                    self.clear_status_message();
                }
                _ => {}
            }
            return Ok(false);
        }

        // Search mode input
        if self.search_active {
            match key.code {
                KeyCode::Esc => {
                    self.search_active = false;
                    self.view.set_search("", Instant::now());
                    self.view.flush_search();
                    self.clamp_selection();
                    self.clear_status_message();
                }
                KeyCode::Enter => {
                    self.search_active = false;
                    self.view.flush_search();
                    self.clamp_selection();
                }
                KeyCode::Backspace => {
                    let mut text = self.view.search_input().to_string();
                    text.pop();
                    self.view.set_search(text, Instant::now());
                }
                KeyCode::Char(c) => {
                    let mut text = self.view.search_input().to_string();
                    text.push(c);
                    self.view.set_search(text, Instant::now());
                }
                _ => {}
            }
            return Ok(false);
        }

        self.clear_status_message();

        match key.code {
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
            KeyCode::Esc => {
                if self.gesture.active().is_some() {
                    self.gesture.cancel();
                    self.set_status_message("Grab cancelled".to_string());
                } else if self.show_detail {
                    self.show_detail = false;
                } else {
                    return Ok(true);
                }
            }

            // Grab and drop
            KeyCode::Char('g') | KeyCode::Char(' ') => {
                if self.gesture.active().is_some() {
                    self.drop_grabbed();
                } else if let Some(id) = self.selected_card_id() {
                    match self.board.get(id) {
                        Some(item) if item.draggable() => {
                            self.gesture.drag_start(&self.board, id);
                            self.set_status_message(format!(
                                "Grabbed card #{}: aim with arrows, g/Enter to drop, Esc to cancel",
                                id
                            ));
                        }
                        Some(_) => {
                            self.set_status_message("Requests are read-only and cannot move".to_string());
                        }
                        None => {}
                    }
                }
            }
            KeyCode::Enter => {
                if self.gesture.active().is_some() {
                    self.drop_grabbed();
                } else if self.selected_card_id().is_some() {
                    self.show_detail = !self.show_detail;
                }
            }

            // Column navigation
            KeyCode::Left => {
                if self.selected_bucket > 0 {
                    self.selected_bucket -= 1;
                    self.clamp_selection();
                }
            }
            KeyCode::Right => {
                if self.selected_bucket < DisplayBucket::ALL.len() - 1 {
                    self.selected_bucket += 1;
                    self.clamp_selection();
                }
            }

            // Card navigation within column
            KeyCode::Up => {
                if self.selected_card > 0 {
                    self.selected_card -= 1;
                }
            }
            KeyCode::Down => {
                let len = self
                    .visible_ids(Self::bucket_at(self.selected_bucket))
                    .len();
                if len > 0 && self.selected_card < len - 1 {
                    self.selected_card += 1;
                }
            }

            // Load more cards in the selected column
            KeyCode::Char('m') => {
                let bucket = Self::bucket_at(self.selected_bucket);
                if self.view.has_more(self.board.items(), bucket) {
                    self.view.load_more(bucket);
                    self.set_status_message(format!(
                        "Showing {} of {} in {}",
                        self.visible_ids(bucket).len(),
                        self.view.bucket_total(self.board.items(), bucket),
                        format_bucket(bucket)
                    ));
                }
            }

            // Add, edit, delete
            KeyCode::Char('a') => {
                self.form = Some(ItemForm::new());
                self.editing_id = None;
            }
            KeyCode::Char('e') => {
                if let Some(id) = self.selected_card_id() {
                    match self.board.get(id) {
                        Some(item) if item.origin == Origin::WorkItem => {
                            self.form = Some(ItemForm::from_item(item));
                            self.editing_id = Some(id);
                        }
                        Some(_) => {
                            self.set_status_message("Requests are read-only".to_string());
                        }
                        None => {}
                    }
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_card_id() {
                    match self.board.get(id) {
                        Some(item) if item.origin == Origin::WorkItem => {
                            self.confirm_delete = Some(id);
                        }
                        Some(_) => {
                            self.set_status_message("Requests are read-only".to_string());
                        }
                        None => {}
                    }
                }
            }

            // Search
            KeyCode::Char('/') => {
                self.search_active = true;
            }

            // Help
            KeyCode::Char('h') => {
                self.set_status_message(
                    "Help: g: Grab/Drop | Enter: Details | a: Add | e: Edit | d: Delete | /: Search | m: More | Esc: Exit"
                        .to_string(),
                );
            }

            _ => {}
        }
        Ok(false)
    }

    /// Render the board.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_board(f, chunks[1]);
        self.render_status_bar(f, chunks[2]);

        if self.show_detail {
            self.render_detail_popup(f);
        }
        if self.form.is_some() {
            self.render_form(f);
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let search = self.view.applied_search();
        let context = if search.is_empty() {
            format!("Cards: {}", self.view.filtered(self.board.items()).len())
        } else {
            format!(
                "Search: '{}' ({} cards)",
                search,
                self.view.filtered(self.board.items()).len()
            )
        };

        let header_text = vec![Line::from(vec![
            Span::styled("WORK ITEM BOARD", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                context,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ),
        ])];

        let header_block = Paragraph::new(header_text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(header_block, area);
    }

    fn render_board(&mut self, f: &mut Frame, area: Rect) {
        let constraints: Vec<Constraint> = DisplayBucket::ALL
            .iter()
            .map(|_| Constraint::Percentage(25))
            .collect();

        let columns_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (i, &column_area) in columns_layout.iter().enumerate() {
            self.render_column(f, column_area, i);
        }
    }

    fn render_column(&mut self, f: &mut Frame, area: Rect, bucket_index: usize) {
        let bucket = Self::bucket_at(bucket_index);
        let is_selected = bucket_index == self.selected_bucket;
        let accent = Self::accent(bucket);

        let shown = self.visible_ids(bucket).len();
        let total = self.view.bucket_total(self.board.items(), bucket);
        let title = format!("{} ({}/{})", format_bucket(bucket), shown, total);

        let border_style = if is_selected {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let card_ids = self.visible_ids(bucket);
        if card_ids.is_empty() {
            return;
        }

        let available_height = inner.height as usize;
        let visible_cards = (available_height / CARD_HEIGHT).max(1);

        // Keep the selected card in the scroll window
        let scroll_offset = if is_selected {
            let start = self.column_scroll_offsets[bucket_index];
            if self.selected_card < start {
                self.column_scroll_offsets[bucket_index] = self.selected_card;
            } else if self.selected_card >= start + visible_cards {
                self.column_scroll_offsets[bucket_index] = self.selected_card - visible_cards + 1;
            }
            self.column_scroll_offsets[bucket_index]
        } else {
            self.column_scroll_offsets[bucket_index].min(card_ids.len().saturating_sub(1))
        };

        let mut current_y = 0;
        let mut rendered = 0;
        for (card_index, &card_id) in card_ids.iter().enumerate().skip(scroll_offset) {
            if current_y + CARD_HEIGHT > available_height {
                break;
            }
            let Some(item) = self.board.get(card_id) else {
                continue;
            };
            let card_area = Rect {
                x: inner.x,
                y: inner.y + current_y as u16,
                width: inner.width,
                height: CARD_HEIGHT as u16,
            };
            let card_selected = is_selected && card_index == self.selected_card;
            let grabbed = self.gesture.active() == Some(card_id);
            render_card(f, card_area, item, accent, card_selected, grabbed);
            current_y += CARD_HEIGHT;
            rendered += 1;
        }

        if scroll_offset > 0 {
            let indicator = Paragraph::new(format!("▲ +{} above", scroll_offset))
                .style(Style::default().fg(Color::Cyan));
            f.render_widget(
                indicator,
                Rect {
                    x: inner.x,
                    y: inner.y,
                    width: inner.width,
                    height: 1,
                },
            );
        }

        let below = card_ids.len() - scroll_offset - rendered;
        let unloaded = total - card_ids.len();
        if below > 0 || unloaded > 0 {
            let text = if unloaded > 0 {
                format!("▼ +{} below, {} more (m)", below, unloaded)
            } else {
                format!("▼ +{} below", below)
            };
            let indicator = Paragraph::new(text).style(Style::default().fg(Color::Cyan));
            f.render_widget(
                indicator,
                Rect {
                    x: inner.x,
                    y: inner.y + inner.height.saturating_sub(1),
                    width: inner.width,
                    height: 1,
                },
            );
        }
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if self.search_active {
            format!(
                "Search: {} | Type to filter title/description, Enter to apply, Esc to clear",
                self.view.search_input()
            )
        } else if let Some(id) = self.confirm_delete {
            format!("Delete card #{}? y/n", id)
        } else if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            let total = self.view.filtered(self.board.items()).len();
            format!(
                "Cards: {} | g: Grab | Enter: Details | a: Add | e: Edit | d: Delete | /: Search | h: Help",
                total
            )
        };

        let accent = Self::accent(Self::bucket_at(self.selected_bucket));
        let text_color = match accent {
            AMBER => Color::Rgb(20, 20, 20),
            _ => Color::White,
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(accent).fg(text_color))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    fn render_detail_popup(&self, f: &mut Frame) {
        let Some(id) = self.selected_card_id() else {
            return;
        };
        let Some(item) = self.board.get(id) else {
            return;
        };

        let popup_area = centered_rect(f.area(), 70, 70);
        f.render_widget(Clear, popup_area);

        let labels = extract::tags(&item.description);
        let mut detail_lines = vec![
            Line::from(vec![Span::styled(
                format!("Card #{}: {}", item.id, item.title),
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(format!("Status:    {}", item.status.as_str())),
            Line::from(format!(
                "Bucket:    {}",
                item.status.bucket().map(format_bucket).unwrap_or("-")
            )),
            Line::from(format!("Priority:  {}", format_priority(item.priority))),
            Line::from(format!("Type:      {}", format_kind(item.kind))),
            Line::from(format!(
                "Upcoming:  {}",
                item.upcoming_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string())
            )),
            Line::from(format!(
                "Labels:    {}",
                if labels.is_empty() {
                    "-".to_string()
                } else {
                    labels.join(" ")
                }
            )),
        ];
        if let Some(ref request_id) = item.request_id {
            detail_lines.push(Line::from(format!("Request:   {} (read-only)", request_id)));
        }
        detail_lines.push(Line::from(""));
        detail_lines.push(Line::from("Description:"));
        detail_lines.push(Line::from(item.description.as_str()));

        let accent = Self::accent(Self::bucket_at(self.selected_bucket));
        let popup_block = Block::default()
            .borders(Borders::ALL)
            .title("Card Details (Press Enter to close)")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(accent).add_modifier(Modifier::BOLD));

        let popup = Paragraph::new(detail_lines)
            .block(popup_block)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(Color::Black));
        f.render_widget(popup, popup_area);
    }

    fn render_form(&self, f: &mut Frame) {
        let Some(ref form) = self.form else {
            return;
        };

        let popup_area = centered_rect(f.area(), 60, 50);
        f.render_widget(Clear, popup_area);

        let title = if self.editing_id.is_some() {
            "Edit Card (Enter: Save, Esc: Cancel)"
        } else {
            "New Card (Enter: Save, Esc: Cancel)"
        };

        let lines = vec![
            form_text_line("Title", &form.title.value, form.current_field == TITLE_ORDER),
            form_text_line(
                "Description",
                &form.description.value,
                form.current_field == DESCRIPTION_ORDER,
            ),
            Line::from(""),
            form_selector_line(
                "Priority",
                format_priority(form.selected_priority()),
                form.current_field == PRIORITY_ORDER,
            ),
            form_selector_line(
                "Type",
                format_kind(form.selected_kind()),
                form.current_field == KIND_ORDER,
            ),
            form_selector_line(
                "Status",
                ItemStatus::Work(form.selected_status()).as_str(),
                form.current_field == STATUS_ORDER,
            ),
            Line::from(""),
            Line::from(Span::styled(
                "Tab: Next field | ←/→: Edit or cycle | #word adds a label, [YYYY-MM-DD] sets the upcoming date",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let popup_block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

        let popup = Paragraph::new(lines)
            .block(popup_block)
            .wrap(Wrap { trim: false })
            .style(Style::default().bg(Color::Black));
        f.render_widget(popup, popup_area);
    }

    /// Main event loop.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            if self.view.poll(Instant::now()) {
                self.clamp_selection();
            }
            terminal.draw(|f| self.render(f))?;
            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

/// Render one card: id, wrapped title, and a metadata line.
fn render_card(
    f: &mut Frame,
    area: Rect,
    item: &WorkItem,
    accent: Color,
    is_selected: bool,
    grabbed: bool,
) {
    let style = if grabbed {
        Style::default()
            .bg(accent)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC)
    } else if is_selected {
        Style::default()
            .bg(accent)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(Color::DarkGray)
    };

    let mut card_text = Vec::new();
    let id_line = match (grabbed, item.origin) {
        (true, _) => format!("#{} [grabbed]", item.id),
        (false, Origin::Request) => format!("#{} (request)", item.id),
        (false, Origin::WorkItem) => format!("#{}", item.id),
    };
    card_text.push(Line::from(id_line));

    let available_width = area.width.saturating_sub(2) as usize;
    for line in wrap_title(&item.title, available_width.max(1), 2) {
        card_text.push(Line::from(line));
    }

    let mut meta = format!("{} | {}", format_priority(item.priority), format_kind(item.kind));
    if let Some(date) = item.upcoming_date {
        meta.push_str(&format!(" | {}", date));
    }
    card_text.push(Line::from(meta));

    let card_block = Paragraph::new(card_text)
        .block(Block::default().borders(Borders::ALL))
        .style(style)
        .wrap(Wrap { trim: true });
    f.render_widget(card_block, area);
}

/// Word-wrap a title into at most `max_lines` lines.
fn wrap_title(title: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in title.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current.clone());
            current = word.to_string();
            if lines.len() >= max_lines {
                break;
            }
        }
    }
    if !current.is_empty() && lines.len() < max_lines {
        lines.push(current);
    }
    lines.truncate(max_lines);
    lines
}

fn form_text_line<'a>(label: &'a str, value: &'a str, active: bool) -> Line<'a> {
    let marker = if active { "> " } else { "  " };
    let style = if active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(format!("{}{:<12}", marker, label), style),
        Span::raw(value.to_string()),
    ])
}

fn form_selector_line<'a>(label: &'a str, value: &'a str, active: bool) -> Line<'a> {
    let marker = if active { "> " } else { "  " };
    let style = if active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(format!("{}{:<12}", marker, label), style),
        Span::raw(format!("< {} >", value)),
    ])
}

/// A centered rect taking the given percentages of the frame.
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = (area.width * percent_x) / 100;
    let height = (area.height * percent_y) / 100;
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
