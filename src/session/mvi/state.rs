//! Marker trait for dialog state.

/// Dialog state: plain data, cheap to compare, with a `Default` resting
/// state so it can be swapped out with `std::mem::take` during dispatch.
pub trait UiState: Clone + PartialEq + Default + 'static {}
