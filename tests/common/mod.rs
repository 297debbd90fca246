//! Shared test helpers.

#![allow(dead_code, unused_imports)]

use recordgrid::form::{FormGate, FormState};
use recordgrid::record::{Record, RecordFields};
use recordgrid::store::RecordStore;
use recordgrid::table::RecordTable;

/// Validated fields; panics on invalid input.
pub fn fields(name: &str, age: u8) -> RecordFields {
    RecordFields::new(name, age).expect("test fields must be valid")
}

/// Store seeded with `(name, age)` rows in order.
pub fn seeded_store(rows: &[(&str, u8)]) -> RecordStore {
    let mut store = RecordStore::new();
    for (name, age) in rows {
        store.add(fields(name, *age));
    }
    store
}

/// Drive the add dialog the way a user would.
pub fn add_through_form(table: &mut RecordTable, name: &str, age: &str) -> Record {
    table.open_add();
    type_text(table, name);
    table.focus_next();
    type_text(table, age);
    table.submit().expect("submission should be accepted")
}

pub fn type_text(table: &mut RecordTable, text: &str) {
    for ch in text.chars() {
        table.input(ch);
    }
}

pub fn names(rows: &[&Record]) -> Vec<String> {
    rows.iter().map(|r| r.name().to_string()).collect()
}

pub fn ages(rows: &[&Record]) -> Vec<u8> {
    rows.iter().map(|r| r.age()).collect()
}

pub fn validate(name: &str, age: &str) -> bool {
    FormGate::validate(&FormState::new(name, age)).is_ok()
}
