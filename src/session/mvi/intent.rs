//! Marker trait for intents.

/// An action fed to a [`Reducer`](super::Reducer): a key press mapped to
/// meaning, or the outcome of work the caller already did (a submission
/// accepted or rejected).
pub trait Intent: 'static {}
