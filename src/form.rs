//! Form gate: validation of candidate records.
//!
//! [`FormState`] holds the raw text typed into the add/edit dialog.
//! [`FormGate::validate`] turns it into [`RecordFields`] or a
//! [`ValidationError`] listing every field that failed.

use std::fmt;
use std::num::IntErrorKind;

use thiserror::Error;

use crate::record::{Record, RecordFields};

/// Lowest accepted age.
pub const AGE_MIN: u8 = 1;
/// Highest accepted age.
pub const AGE_MAX: u8 = 100;

/// Editable fields of the record form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    #[default]
    Name,
    Age,
}

impl FormField {
    pub const ALL: [FormField; 2] = [FormField::Name, FormField::Age];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Age => "Age",
        }
    }

    /// Next field in tab order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Age,
            FormField::Age => FormField::Name,
        }
    }

    /// Whether a typed character is allowed in this field.
    ///
    /// Age is a numeric input and only takes digits.
    pub fn accepts(self, ch: char) -> bool {
        match self {
            FormField::Name => !ch.is_control(),
            FormField::Age => ch.is_ascii_digit(),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw field values backing the add/edit dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub name: String,
    pub age: String,
}

impl FormState {
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Age => &self.age,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Age => &mut self.age,
        }
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorReason {
    Required,
    NotANumber,
    OutOfRange { min: u8, max: u8 },
}

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub reason: FieldErrorReason,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            FieldErrorReason::Required => write!(f, "{} is required", self.field),
            FieldErrorReason::NotANumber => write!(f, "{} must be a number", self.field),
            FieldErrorReason::OutOfRange { min, max } => {
                write!(f, "{} must be between {} and {}", self.field, min, max)
            }
        }
    }
}

/// A rejected submission. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Reason for a given field, if that field failed.
    pub fn reason_for(&self, field: FormField) -> Option<FieldErrorReason> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.reason)
    }

    pub fn has_field(&self, field: FormField) -> bool {
        self.reason_for(field).is_some()
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validation entry point. Stateless; never touches the store.
pub struct FormGate;

impl FormGate {
    /// Check a form and produce trimmed, range-checked fields.
    pub fn validate(form: &FormState) -> Result<RecordFields, ValidationError> {
        let mut errors = Vec::new();

        let name = form.name.trim();
        if name.is_empty() {
            errors.push(FieldError {
                field: FormField::Name,
                reason: FieldErrorReason::Required,
            });
        }

        let age = match parse_age(form.age.trim()) {
            Ok(age) => Some(age),
            Err(reason) => {
                errors.push(FieldError {
                    field: FormField::Age,
                    reason,
                });
                None
            }
        };

        match age {
            Some(age) if errors.is_empty() => Ok(RecordFields::checked(name.to_string(), age)),
            _ => Err(ValidationError { errors }),
        }
    }

    /// Form values for editing an existing record.
    pub fn prefill(record: &Record) -> FormState {
        FormState::new(record.name(), record.age().to_string())
    }
}

fn parse_age(text: &str) -> Result<u8, FieldErrorReason> {
    let out_of_range = FieldErrorReason::OutOfRange {
        min: AGE_MIN,
        max: AGE_MAX,
    };

    if text.is_empty() {
        return Err(FieldErrorReason::Required);
    }

    match text.parse::<i64>() {
        Ok(value) => u8::try_from(value)
            .ok()
            .filter(|age| (AGE_MIN..=AGE_MAX).contains(age))
            .ok_or(out_of_range),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(out_of_range)
        }
        Err(_) => Err(FieldErrorReason::NotANumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, age: &str) -> FormState {
        FormState::new(name, age)
    }

    #[test]
    fn accepts_boundaries() {
        assert!(FormGate::validate(&form("A", "1")).is_ok());
        assert!(FormGate::validate(&form("A", "100")).is_ok());
    }

    #[test]
    fn rejects_age_out_of_range() {
        let err = FormGate::validate(&form("A", "0")).unwrap_err();
        assert_eq!(
            err.reason_for(FormField::Age),
            Some(FieldErrorReason::OutOfRange { min: 1, max: 100 })
        );

        let err = FormGate::validate(&form("A", "101")).unwrap_err();
        assert!(err.has_field(FormField::Age));
        assert!(!err.has_field(FormField::Name));
    }

    #[test]
    fn huge_and_negative_ages_are_out_of_range() {
        let err = FormGate::validate(&form("A", "99999999999999999999999")).unwrap_err();
        assert!(matches!(
            err.reason_for(FormField::Age),
            Some(FieldErrorReason::OutOfRange { .. })
        ));
        let err = FormGate::validate(&form("A", "-3")).unwrap_err();
        assert!(matches!(
            err.reason_for(FormField::Age),
            Some(FieldErrorReason::OutOfRange { .. })
        ));
    }

    #[test]
    fn non_numeric_age_is_reported() {
        let err = FormGate::validate(&form("A", "ten")).unwrap_err();
        assert_eq!(
            err.reason_for(FormField::Age),
            Some(FieldErrorReason::NotANumber)
        );
    }

    #[test]
    fn whitespace_name_is_required() {
        let err = FormGate::validate(&form("   ", "30")).unwrap_err();
        assert_eq!(
            err.reason_for(FormField::Name),
            Some(FieldErrorReason::Required)
        );
    }

    #[test]
    fn empty_form_reports_both_fields() {
        let err = FormGate::validate(&FormState::default()).unwrap_err();
        assert_eq!(err.errors.len(), 2);
        assert_eq!(
            err.to_string(),
            "Name is required; Age is required"
        );
    }

    #[test]
    fn age_field_only_accepts_digits() {
        assert!(FormField::Age.accepts('7'));
        assert!(!FormField::Age.accepts('x'));
        assert!(FormField::Name.accepts('x'));
        assert!(!FormField::Name.accepts('\n'));
    }

    #[test]
    fn field_order_wraps() {
        assert_eq!(FormField::Name.next(), FormField::Age);
        assert_eq!(FormField::Age.next(), FormField::Name);
    }
}
