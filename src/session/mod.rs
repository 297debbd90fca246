//! Add/edit/delete session for the record dialog.
//!
//! Pure state: the table drives it and the terminal shell only reads it.

pub mod mvi;

mod intent;
mod reducer;
mod state;

pub use intent::EditorIntent;
pub use reducer::{EditorReducer, AGE_INPUT_MAX_LEN};
pub use state::EditorState;
