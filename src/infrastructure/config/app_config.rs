//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::infrastructure::http::DEFAULT_API_URL;

const APP_NAME: &str = "rosterdesk";
const APP_QUALIFIER: &str = "org";
const APP_ORGANIZATION: &str = "rosterdesk";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overridden by CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Base URL of the record service.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout in seconds. Requests never time out when unset.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Log file path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Seconds a success or error notice stays visible.
    #[serde(default = "default_notice_duration")]
    pub notice_duration: u64,

    /// Background of allocation rows whose skills match (name or hex code).
    #[serde(default = "default_highlight_color")]
    pub highlight_color: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_duration: default_notice_duration(),
            highlight_color: default_highlight_color(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_notice_duration() -> u64 {
    5
}

fn default_highlight_color() -> String {
    "#e8e8e8".to_string()
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(api_url) = args.api_url {
            self.api_url = api_url;
        }
        if let Some(timeout) = args.request_timeout {
            self.request_timeout_secs = Some(timeout);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(notice_duration) = args.notice_duration {
            self.ui.notice_duration = notice_duration;
        }
    }

    /// Returns the configured request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Returns how long notices stay visible.
    #[must_use]
    pub const fn notice_duration(&self) -> Duration {
        Duration::from_secs(self.ui.notice_duration)
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("rosterdesk.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            api_url: default_api_url(),
            request_timeout_secs: None,
            log_path: None,
            log_level: LogLevel::Info,
            ui: UiConfig::default(),
        }
    }
}
