use crate::form::ValidationError;
use crate::record::{Record, RecordKey};
use crate::session::mvi::Intent;

#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Open an empty form for a new record.
    OpenAdd,
    /// Open the form prefilled from an existing record.
    OpenEdit { record: Record },
    /// Character typed into the focused field.
    Input { ch: char },
    Backspace,
    FocusNext,
    /// Escape or "cancel": closes any open dialog without changes.
    Cancel,
    /// Submission failed validation; the form stays open.
    Rejected { error: ValidationError },
    /// Submission or deletion went through.
    Submitted,
    /// Ask for confirmation before deleting a row.
    RequestDelete { key: RecordKey, name: String },
}

impl Intent for EditorIntent {}
