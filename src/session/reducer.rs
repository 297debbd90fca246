use crate::form::{FormField, FormGate, FormState, ValidationError};
use crate::session::intent::EditorIntent;
use crate::session::state::EditorState;
use crate::session::mvi::Reducer;

/// Ages top out at three digits.
pub const AGE_INPUT_MAX_LEN: usize = 3;

pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Intent = EditorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::OpenAdd => match state {
                EditorState::Closed => EditorState::AddOpen {
                    form: FormState::default(),
                    focus: FormField::Name,
                    error: None,
                },
                other => other,
            },
            EditorIntent::OpenEdit { record } => match state {
                EditorState::Closed => EditorState::EditOpen {
                    key: record.key(),
                    form: FormGate::prefill(&record),
                    focus: FormField::Name,
                    error: None,
                },
                other => other,
            },
            EditorIntent::Input { ch } => edit_form(state, |form, focus, error| {
                if !focus.accepts(ch) {
                    return;
                }
                let value = form.field_mut(focus);
                if focus == FormField::Age && value.len() >= AGE_INPUT_MAX_LEN {
                    return;
                }
                value.push(ch);
                clear_field_error(error, focus);
            }),
            EditorIntent::Backspace => edit_form(state, |form, focus, error| {
                if form.field_mut(focus).pop().is_some() {
                    clear_field_error(error, focus);
                }
            }),
            EditorIntent::FocusNext => match state {
                EditorState::AddOpen { form, focus, error } => EditorState::AddOpen {
                    form,
                    focus: focus.next(),
                    error,
                },
                EditorState::EditOpen {
                    key,
                    form,
                    focus,
                    error,
                } => EditorState::EditOpen {
                    key,
                    form,
                    focus: focus.next(),
                    error,
                },
                other => other,
            },
            EditorIntent::Rejected { error } => match state {
                EditorState::AddOpen { form, focus, .. } => EditorState::AddOpen {
                    form,
                    focus: first_failed_field(&error).unwrap_or(focus),
                    error: Some(error),
                },
                EditorState::EditOpen {
                    key, form, focus, ..
                } => EditorState::EditOpen {
                    key,
                    form,
                    focus: first_failed_field(&error).unwrap_or(focus),
                    error: Some(error),
                },
                other => other,
            },
            EditorIntent::Cancel | EditorIntent::Submitted => EditorState::Closed,
            EditorIntent::RequestDelete { key, name } => match state {
                EditorState::Closed => EditorState::ConfirmDelete { key, name },
                other => other,
            },
        }
    }
}

/// Apply `edit` to the open form, leaving other states untouched.
fn edit_form<F>(state: EditorState, edit: F) -> EditorState
where
    F: FnOnce(&mut FormState, FormField, &mut Option<ValidationError>),
{
    match state {
        EditorState::AddOpen {
            mut form,
            focus,
            mut error,
        } => {
            edit(&mut form, focus, &mut error);
            EditorState::AddOpen { form, focus, error }
        }
        EditorState::EditOpen {
            key,
            mut form,
            focus,
            mut error,
        } => {
            edit(&mut form, focus, &mut error);
            EditorState::EditOpen {
                key,
                form,
                focus,
                error,
            }
        }
        other => other,
    }
}

fn clear_field_error(error: &mut Option<ValidationError>, field: FormField) {
    if let Some(current) = error {
        current.errors.retain(|e| e.field != field);
        if current.errors.is_empty() {
            *error = None;
        }
    }
}

fn first_failed_field(error: &ValidationError) -> Option<FormField> {
    error.errors.first().map(|e| e.field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Record, RecordFields, RecordKey};

    fn typed(mut state: EditorState, text: &str) -> EditorState {
        for ch in text.chars() {
            state = EditorReducer::reduce(state, EditorIntent::Input { ch });
        }
        state
    }

    #[test]
    fn open_add_starts_empty() {
        let state = EditorReducer::reduce(EditorState::Closed, EditorIntent::OpenAdd);
        assert_eq!(state.form(), Some(&FormState::default()));
        assert_eq!(state.focus(), Some(FormField::Name));
    }

    #[test]
    fn open_edit_prefills_from_record() {
        let record = Record::new(RecordKey::generate(), RecordFields::new("Ann", 30).unwrap());
        let state = EditorReducer::reduce(
            EditorState::Closed,
            EditorIntent::OpenEdit {
                record: record.clone(),
            },
        );
        assert_eq!(state.form(), Some(&FormState::new("Ann", "30")));
        assert_eq!(state.target_key(), Some(record.key()));
    }

    #[test]
    fn open_is_ignored_while_dialog_is_open() {
        let state = EditorReducer::reduce(EditorState::Closed, EditorIntent::OpenAdd);
        let state = typed(state, "Bo");
        let again = EditorReducer::reduce(state.clone(), EditorIntent::OpenAdd);
        assert_eq!(again, state);
    }

    #[test]
    fn typing_fills_focused_field() {
        let state = EditorReducer::reduce(EditorState::Closed, EditorIntent::OpenAdd);
        let state = typed(state, "Ann");
        let state = EditorReducer::reduce(state, EditorIntent::FocusNext);
        let state = typed(state, "4x2");
        assert_eq!(state.form(), Some(&FormState::new("Ann", "42")));
    }

    #[test]
    fn age_input_is_capped() {
        let state = EditorReducer::reduce(EditorState::Closed, EditorIntent::OpenAdd);
        let state = EditorReducer::reduce(state, EditorIntent::FocusNext);
        let state = typed(state, "12345");
        assert_eq!(state.form().map(|f| f.age.as_str()), Some("123"));
    }

    #[test]
    fn rejected_keeps_form_and_focuses_first_error() {
        let state = EditorReducer::reduce(EditorState::Closed, EditorIntent::OpenAdd);
        let state = EditorReducer::reduce(state, EditorIntent::FocusNext);
        let error = FormGate::validate(&FormState::new("", "5")).unwrap_err();
        let state = EditorReducer::reduce(state, EditorIntent::Rejected { error });
        assert!(state.is_form_open());
        assert_eq!(state.focus(), Some(FormField::Name));
        assert!(state.error().is_some());
    }

    #[test]
    fn editing_a_failed_field_clears_its_error() {
        let state = EditorReducer::reduce(EditorState::Closed, EditorIntent::OpenAdd);
        let error = FormGate::validate(&FormState::default()).unwrap_err();
        let state = EditorReducer::reduce(state, EditorIntent::Rejected { error });
        let state = typed(state, "A");

        let error = state.error().unwrap();
        assert!(!error.has_field(FormField::Name));
        assert!(error.has_field(FormField::Age));

        let state = EditorReducer::reduce(state, EditorIntent::FocusNext);
        let state = typed(state, "9");
        assert_eq!(state.error(), None);
    }

    #[test]
    fn backspace_on_empty_field_keeps_error() {
        let state = EditorReducer::reduce(EditorState::Closed, EditorIntent::OpenAdd);
        let error = FormGate::validate(&FormState::default()).unwrap_err();
        let state = EditorReducer::reduce(state, EditorIntent::Rejected { error });
        let state = EditorReducer::reduce(state, EditorIntent::Backspace);
        assert!(state.error().unwrap().has_field(FormField::Name));
    }

    #[test]
    fn cancel_and_submit_close() {
        let open = EditorReducer::reduce(EditorState::Closed, EditorIntent::OpenAdd);
        assert_eq!(
            EditorReducer::reduce(open.clone(), EditorIntent::Cancel),
            EditorState::Closed
        );
        assert_eq!(
            EditorReducer::reduce(open, EditorIntent::Submitted),
            EditorState::Closed
        );
    }

    #[test]
    fn request_delete_only_from_closed() {
        let key = RecordKey::generate();
        let state = EditorReducer::reduce(
            EditorState::Closed,
            EditorIntent::RequestDelete {
                key,
                name: "Ann".into(),
            },
        );
        assert_eq!(state.target_key(), Some(key));

        let open = EditorReducer::reduce(EditorState::Closed, EditorIntent::OpenAdd);
        let still_open = EditorReducer::reduce(
            open.clone(),
            EditorIntent::RequestDelete {
                key,
                name: "Ann".into(),
            },
        );
        assert_eq!(still_open, open);
    }

    #[test]
    fn input_is_ignored_in_confirm_delete() {
        let state = EditorState::ConfirmDelete {
            key: RecordKey::generate(),
            name: "Ann".into(),
        };
        let after = typed(state.clone(), "x");
        assert_eq!(after, state);
    }
}
