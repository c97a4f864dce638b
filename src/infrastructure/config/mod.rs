//! Application configuration.

/// Configuration values.
pub mod app_config;
/// Command-line arguments.
pub mod args;
/// Config file storage.
pub mod storage;

pub use app_config::{AppConfig, LogLevel, UiConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, ConfigSource, LoadedConfig, StorageManager};
