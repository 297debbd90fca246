use crate::query::{Column, Page, SortDirection};
use crate::record::{Record, RecordKey};
use crate::table::{RecordTable, TableError};

/// Ticks a status message stays on screen.
const STATUS_TTL_TICKS: u16 = 16;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
    ttl: u16,
}

/// Draft filter text for one column, applied on confirm.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilterPrompt {
    pub column: Column,
    pub text: String,
}

pub struct App {
    should_quit: bool,
    table: RecordTable,
    /// Requested page; clamped whenever the view changes.
    page: usize,
    /// Row within the current page.
    selected: usize,
    /// Column that sort and filter keys act on.
    column: Column,
    filter_prompt: Option<FilterPrompt>,
    status: Option<StatusLine>,
}

impl App {
    pub fn new(table: RecordTable) -> Self {
        Self {
            should_quit: false,
            table,
            page: 0,
            selected: 0,
            column: Column::Name,
            filter_prompt: None,
            status: None,
        }
    }

    pub fn table(&self) -> &RecordTable {
        &self.table
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = &mut self.status {
            status.ttl = status.ttl.saturating_sub(1);
            if status.ttl == 0 {
                self.status = None;
            }
        }
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    // -------------------------------------------------------------------------
    // Grid navigation
    // -------------------------------------------------------------------------

    pub fn current_page(&self) -> Page<&Record> {
        self.table.page(self.page)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_key(&self) -> Option<RecordKey> {
        self.current_page()
            .items
            .get(self.selected)
            .map(|record| record.key())
    }

    pub fn move_selection(&mut self, delta: isize) {
        let rows = self.current_page().items.len();
        if rows == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(rows - 1);
    }

    pub fn next_page(&mut self) {
        let page = self.current_page();
        if page.has_next() {
            self.page = page.index + 1;
            self.selected = 0;
        }
    }

    pub fn previous_page(&mut self) {
        let page = self.current_page();
        if page.has_previous() {
            self.page = page.index - 1;
            self.selected = 0;
        }
    }

    pub fn column(&self) -> Column {
        self.column
    }

    pub fn focus_next_column(&mut self) {
        self.column = self.column.next();
    }

    // -------------------------------------------------------------------------
    // Query
    // -------------------------------------------------------------------------

    pub fn cycle_sort(&mut self) -> SortDirection {
        let direction = self.table.cycle_sort(self.column);
        self.clamp_cursor();
        direction
    }

    pub fn filter_prompt(&self) -> Option<&FilterPrompt> {
        self.filter_prompt.as_ref()
    }

    /// Start editing the focused column's filter, seeded with its current text.
    pub fn open_filter_prompt(&mut self) {
        let text = self
            .table
            .query()
            .criteria()
            .filter(self.column)
            .unwrap_or_default()
            .to_string();
        self.filter_prompt = Some(FilterPrompt {
            column: self.column,
            text,
        });
    }

    /// Characters the prompt's column does not accept are dropped.
    pub fn prompt_input(&mut self, ch: char) {
        if let Some(prompt) = &mut self.filter_prompt {
            if prompt.column.accepts(ch) {
                prompt.text.push(ch);
            }
        }
    }

    pub fn prompt_backspace(&mut self) {
        if let Some(prompt) = &mut self.filter_prompt {
            prompt.text.pop();
        }
    }

    /// Apply the draft; empty text clears the column's filter.
    pub fn confirm_filter(&mut self) {
        if let Some(prompt) = self.filter_prompt.take() {
            self.table.apply_filter(prompt.column, prompt.text);
            self.page = 0;
            self.selected = 0;
        }
    }

    pub fn cancel_filter(&mut self) {
        self.filter_prompt = None;
    }

    pub fn clear_filter(&mut self) {
        self.table.clear_filter(self.column);
        self.clamp_cursor();
    }

    pub fn reset_query(&mut self) {
        self.table.reset_query();
        self.page = 0;
        self.selected = 0;
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    pub fn open_add(&mut self) {
        self.table.open_add();
    }

    pub fn edit_selected(&mut self) {
        if let Some(key) = self.selected_key() {
            if let Err(err) = self.table.open_edit(key) {
                self.set_status(StatusKind::Error, err.to_string());
            }
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(key) = self.selected_key() {
            if let Err(err) = self.table.request_delete(key) {
                self.set_status(StatusKind::Error, err.to_string());
            }
        }
    }

    pub fn form_input(&mut self, ch: char) {
        self.table.input(ch);
    }

    pub fn form_backspace(&mut self) {
        self.table.backspace();
    }

    pub fn form_focus_next(&mut self) {
        self.table.focus_next();
    }

    pub fn cancel_dialog(&mut self) {
        self.table.cancel();
    }

    pub fn submit(&mut self) {
        match self.table.submit() {
            Ok(record) => {
                self.set_status(StatusKind::Info, format!("Saved {}", record.name()));
                self.clamp_cursor();
            }
            // Shown inline in the dialog.
            Err(TableError::Validation(_)) => {}
            Err(err) => {
                self.set_status(StatusKind::Error, err.to_string());
                self.clamp_cursor();
            }
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(record) = self.table.confirm_delete() {
            self.set_status(StatusKind::Info, format!("Deleted {}", record.name()));
        }
        self.clamp_cursor();
    }

    fn set_status(&mut self, kind: StatusKind, text: String) {
        self.status = Some(StatusLine {
            kind,
            text,
            ttl: STATUS_TTL_TICKS,
        });
    }

    /// Keep page and row inside the current view.
    fn clamp_cursor(&mut self) {
        let page = self.table.page(self.page);
        self.page = page.index;
        self.selected = self.selected.min(page.items.len().saturating_sub(1));
    }
}
