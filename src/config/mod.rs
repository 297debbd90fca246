//! Configuration: a TOML file with per-section defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, TableConfig, UiConfig};
