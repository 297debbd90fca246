//! In-memory record table with filtering, sorting, paging and form-checked
//! edits, plus a terminal front end.
//!
//! The core is [`store::RecordStore`], [`query::QueryEngine`] and
//! [`form::FormGate`], with [`session`] holding the dialog state machine.
//! [`table::RecordTable`] is the surface a shell talks to.

pub mod config;
pub mod form;
pub mod logging;
pub mod query;
pub mod record;
pub mod session;
pub mod store;
pub mod table;
pub mod ui;
