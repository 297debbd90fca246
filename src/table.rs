//! The record table as the shell sees it.
//!
//! [`RecordTable`] ties the store, the query engine and the editing session
//! together. The shell renders [`RecordTable::page`] and forwards user
//! actions; submissions pass through the form gate before the store changes.

use thiserror::Error;

use crate::form::{FormGate, ValidationError};
use crate::query::{paginate, Column, Page, QueryEngine, SortDirection};
use crate::record::{Record, RecordKey};
use crate::store::{RecordStore, StoreError};
use crate::session::{EditorIntent, EditorReducer, EditorState};
use crate::session::mvi::Reducer;

/// Errors surfaced to the shell. None of them are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("No form is open")]
    NoOpenForm,
}

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

pub struct RecordTable {
    store: RecordStore,
    query: QueryEngine,
    editor: EditorState,
    page_size: usize,
}

impl Default for RecordTable {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl RecordTable {
    pub fn new(page_size: usize) -> Self {
        Self {
            store: RecordStore::new(),
            query: QueryEngine::new(),
            editor: EditorState::default(),
            page_size: page_size.max(1),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn query(&self) -> &QueryEngine {
        &self.query
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Filtered and sorted records.
    pub fn view(&self) -> Vec<&Record> {
        self.query.view(self.store.list())
    }

    /// One page of the view; `index` is clamped to the last page.
    pub fn page(&self, index: usize) -> Page<&Record> {
        paginate(self.view(), index, self.page_size)
    }

    // -------------------------------------------------------------------------
    // Query criteria
    // -------------------------------------------------------------------------

    pub fn apply_filter(&mut self, column: Column, text: impl Into<String>) {
        self.query.apply_filter(column, text);
    }

    pub fn clear_filter(&mut self, column: Column) {
        self.query.clear_filter(column);
    }

    pub fn apply_sort(&mut self, column: Column, direction: SortDirection) {
        self.query.apply_sort(column, direction);
    }

    pub fn cycle_sort(&mut self, column: Column) -> SortDirection {
        self.query.cycle_sort(column)
    }

    pub fn reset_query(&mut self) {
        self.query.reset();
    }

    // -------------------------------------------------------------------------
    // Editing session
    // -------------------------------------------------------------------------

    pub fn open_add(&mut self) {
        self.dispatch(EditorIntent::OpenAdd);
    }

    /// Open the edit form for `key`.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if the record is gone.
    pub fn open_edit(&mut self, key: RecordKey) -> Result<(), TableError> {
        let record = self
            .store
            .get(key)
            .cloned()
            .ok_or(StoreError::NotFound { key })?;
        self.dispatch(EditorIntent::OpenEdit { record });
        Ok(())
    }

    pub fn input(&mut self, ch: char) {
        self.dispatch(EditorIntent::Input { ch });
    }

    pub fn backspace(&mut self) {
        self.dispatch(EditorIntent::Backspace);
    }

    pub fn focus_next(&mut self) {
        self.dispatch(EditorIntent::FocusNext);
    }

    pub fn cancel(&mut self) {
        self.dispatch(EditorIntent::Cancel);
    }

    /// Validate the open form and apply it to the store.
    ///
    /// On a validation failure the form stays open with the error attached.
    /// A stale edit key closes the form.
    pub fn submit(&mut self) -> Result<Record, TableError> {
        let (target, form) = match &self.editor {
            EditorState::AddOpen { form, .. } => (None, form.clone()),
            EditorState::EditOpen { key, form, .. } => (Some(*key), form.clone()),
            _ => return Err(TableError::NoOpenForm),
        };

        let fields = match FormGate::validate(&form) {
            Ok(fields) => fields,
            Err(error) => {
                tracing::warn!(error = %error, "Submission rejected");
                self.dispatch(EditorIntent::Rejected {
                    error: error.clone(),
                });
                return Err(error.into());
            }
        };

        let result = match target {
            None => {
                let record = self.store.add(fields);
                tracing::info!(key = %record.key(), name = %record.name(), age = record.age(), "Record added");
                Ok(record)
            }
            Some(key) => match self.store.update(key, fields) {
                Ok(record) => {
                    tracing::info!(key = %key, name = %record.name(), age = record.age(), "Record updated");
                    Ok(record)
                }
                Err(err) => {
                    tracing::warn!(key = %key, "Edited record no longer exists");
                    Err(err.into())
                }
            },
        };

        self.dispatch(EditorIntent::Submitted);
        result
    }

    /// Ask for confirmation before deleting `key`.
    pub fn request_delete(&mut self, key: RecordKey) -> Result<(), TableError> {
        let name = self
            .store
            .get(key)
            .map(|r| r.name().to_string())
            .ok_or(StoreError::NotFound { key })?;
        self.dispatch(EditorIntent::RequestDelete { key, name });
        Ok(())
    }

    /// Delete the record awaiting confirmation. Returns it if it still existed.
    pub fn confirm_delete(&mut self) -> Option<Record> {
        let EditorState::ConfirmDelete { key, .. } = &self.editor else {
            return None;
        };
        let key = *key;
        let removed = self.delete(key);
        self.dispatch(EditorIntent::Submitted);
        removed
    }

    /// Delete by key. Absent keys are ignored.
    pub fn delete(&mut self, key: RecordKey) -> Option<Record> {
        let removed = self.store.delete(key);
        match &removed {
            Some(record) => tracing::info!(key = %key, name = %record.name(), "Record deleted"),
            None => tracing::debug!(key = %key, "Delete of absent record ignored"),
        }
        removed
    }

    fn dispatch(&mut self, intent: EditorIntent) {
        self.editor = EditorReducer::reduce(std::mem::take(&mut self.editor), intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;

    fn type_text(table: &mut RecordTable, text: &str) {
        for ch in text.chars() {
            table.input(ch);
        }
    }

    fn add(table: &mut RecordTable, name: &str, age: &str) -> Record {
        table.open_add();
        type_text(table, name);
        table.focus_next();
        type_text(table, age);
        table.submit().unwrap()
    }

    #[test]
    fn submit_adds_and_closes() {
        let mut table = RecordTable::default();
        let record = add(&mut table, "Ann", "30");
        assert_eq!(table.store().list(), &[record]);
        assert_eq!(table.editor(), &EditorState::Closed);
    }

    #[test]
    fn invalid_submit_keeps_form_open() {
        let mut table = RecordTable::default();
        table.open_add();
        type_text(&mut table, "Ann");

        let err = table.submit().unwrap_err();
        assert!(matches!(err, TableError::Validation(ref e) if e.has_field(FormField::Age)));
        assert!(table.editor().is_form_open());
        assert!(table.store().is_empty());
    }

    #[test]
    fn submit_without_form_is_an_error() {
        let mut table = RecordTable::default();
        assert_eq!(table.submit(), Err(TableError::NoOpenForm));
    }

    #[test]
    fn stale_edit_closes_with_not_found() {
        let mut table = RecordTable::default();
        let record = add(&mut table, "Ann", "30");
        table.open_edit(record.key()).unwrap();
        table.delete(record.key());

        assert_eq!(
            table.submit(),
            Err(TableError::Store(StoreError::NotFound { key: record.key() }))
        );
        assert_eq!(table.editor(), &EditorState::Closed);
    }

    #[test]
    fn confirm_delete_removes_row() {
        let mut table = RecordTable::default();
        let record = add(&mut table, "Ann", "30");
        table.request_delete(record.key()).unwrap();
        assert_eq!(table.confirm_delete(), Some(record));
        assert!(table.store().is_empty());
        assert!(!table.editor().is_open());
    }

    #[test]
    fn cancel_delete_keeps_row() {
        let mut table = RecordTable::default();
        let record = add(&mut table, "Ann", "30");
        table.request_delete(record.key()).unwrap();
        table.cancel();
        assert_eq!(table.store().len(), 1);
        assert_eq!(table.confirm_delete(), None);
    }

    #[test]
    fn page_uses_configured_size() {
        let mut table = RecordTable::new(2);
        for name in ["A", "B", "C"] {
            add(&mut table, name, "20");
        }
        let page = table.page(1);
        assert_eq!(page.count, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name(), "C");
    }
}
