//! In-memory record store.
//!
//! Keeps records in insertion order. Every mutation addresses a record by
//! key, never by position.

use thiserror::Error;

use crate::record::{Record, RecordFields, RecordKey};

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record has the given key (stale edit or delete).
    #[error("Record '{key}' not found")]
    NotFound { key: RecordKey },
}

/// Ordered collection of records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new record under a freshly generated key.
    pub fn add(&mut self, fields: RecordFields) -> Record {
        let mut key = RecordKey::generate();
        // Keys are unique within the store.
        while self.position(key).is_some() {
            key = RecordKey::generate();
        }

        let record = Record::new(key, fields);
        self.records.push(record.clone());
        record
    }

    /// Replace name and age of the record with `key`.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no record has that key. The store
    /// is unchanged on error.
    pub fn update(&mut self, key: RecordKey, fields: RecordFields) -> Result<Record, StoreError> {
        let index = self.position(key).ok_or(StoreError::NotFound { key })?;
        let record = &mut self.records[index];
        record.replace_fields(fields);
        Ok(record.clone())
    }

    /// Remove the record with `key`. Deleting an absent key is a no-op.
    pub fn delete(&mut self, key: RecordKey) -> Option<Record> {
        let index = self.position(key)?;
        Some(self.records.remove(index))
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, key: RecordKey) -> Option<&Record> {
        self.records.iter().find(|r| r.key() == key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, key: RecordKey) -> Option<usize> {
        self.records.iter().position(|r| r.key() == key)
    }
}
