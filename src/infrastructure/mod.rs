//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Record service HTTP client.
pub mod http;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use http::{DEFAULT_API_URL, HttpRecordClient};
