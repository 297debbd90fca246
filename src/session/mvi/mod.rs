//! Model-View-Intent primitives for the editing session.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                               │
//!    └────────── key press ──────────┘
//! ```
//!
//! Reducers are pure. Anything with a side effect (validating a form,
//! touching the record store) happens in the caller before the matching
//! intent is dispatched.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
