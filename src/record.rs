//! Record model.
//!
//! A [`Record`] is one row of the table. Its fields are private so the key
//! can never change once the store has issued it, and the only way to get a
//! [`RecordFields`] value is through the form gate, so stored rows always
//! satisfy the name/age invariants.

use std::fmt;

use uuid::Uuid;

use crate::form::{FormGate, FormState, ValidationError};

/// Unique identifier of a record, assigned by the store at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey(Uuid);

impl RecordKey {
    /// Generate a fresh random key.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Short prefix for display and log lines.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated name/age pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    name: String,
    age: u8,
}

impl RecordFields {
    /// Validate raw values through [`FormGate`].
    pub fn new(name: impl Into<String>, age: u8) -> Result<Self, ValidationError> {
        FormGate::validate(&FormState::new(name, age.to_string()))
    }

    /// Only the form gate builds fields directly; it has already checked them.
    pub(crate) fn checked(name: String, age: u8) -> Self {
        Self { name, age }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }
}

/// One row of managed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    key: RecordKey,
    name: String,
    age: u8,
}

impl Record {
    pub(crate) fn new(key: RecordKey, fields: RecordFields) -> Self {
        Self {
            key,
            name: fields.name,
            age: fields.age,
        }
    }

    /// Replace name and age, keeping the key.
    pub(crate) fn replace_fields(&mut self, fields: RecordFields) {
        self.name = fields.name;
        self.age = fields.age;
    }

    pub fn key(&self) -> RecordKey {
        self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }
}
