//! Terminal shell around [`RecordTable`](crate::table::RecordTable).
//!
//! Draws with ratatui and reads keys with crossterm. Dialog state comes
//! from [`crate::session`].

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
