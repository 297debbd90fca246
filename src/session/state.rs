use crate::form::{FormField, FormState, ValidationError};
use crate::record::RecordKey;
use crate::session::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    AddOpen {
        form: FormState,
        focus: FormField,
        /// Last rejected submission, minus fields edited since.
        error: Option<ValidationError>,
    },
    EditOpen {
        key: RecordKey,
        form: FormState,
        focus: FormField,
        error: Option<ValidationError>,
    },
    ConfirmDelete {
        key: RecordKey,
        name: String,
    },
}

impl UiState for EditorState {}

impl EditorState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// True for the add and edit dialogs, false for delete confirmation.
    pub fn is_form_open(&self) -> bool {
        matches!(self, Self::AddOpen { .. } | Self::EditOpen { .. })
    }

    pub fn form(&self) -> Option<&FormState> {
        match self {
            Self::AddOpen { form, .. } | Self::EditOpen { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn focus(&self) -> Option<FormField> {
        match self {
            Self::AddOpen { focus, .. } | Self::EditOpen { focus, .. } => Some(*focus),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::AddOpen { error, .. } | Self::EditOpen { error, .. } => error.as_ref(),
            _ => None,
        }
    }

    /// Key of the record being edited or about to be deleted.
    pub fn target_key(&self) -> Option<RecordKey> {
        match self {
            Self::EditOpen { key, .. } | Self::ConfirmDelete { key, .. } => Some(*key),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Closed => "",
            Self::AddOpen { .. } => "New record",
            Self::EditOpen { .. } => "Edit record",
            Self::ConfirmDelete { .. } => "Delete record?",
        }
    }
}
