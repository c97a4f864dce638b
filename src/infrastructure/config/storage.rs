//! Config file discovery, loading and atomic writes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::app_config::AppConfig;

const APP_QUALIFIER: &str = "org";
const APP_ORGANIZATION: &str = "rosterdesk";
const APP_NAME: &str = "rosterdesk";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Failure to locate, read or write the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform has no config directory for this user.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    /// Reading or writing the file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The config could not be rendered as TOML.
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// How the returned config was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from an existing file.
    File,
    /// No file existed; defaults were written to it.
    CreatedDefault,
    /// The file exists but does not parse; defaults are used and the file
    /// is left untouched.
    Malformed {
        /// Parser message.
        reason: String,
    },
}

/// Result of [`StorageManager::load_config`].
///
/// Loading happens before the log subscriber is installed, so the outcome is
/// carried back and reported through [`LoadedConfig::log_source`] afterwards.
#[derive(Debug)]
pub struct LoadedConfig {
    /// Effective file config, before command-line overrides.
    pub config: AppConfig,
    /// File the config was read from or written to.
    pub path: PathBuf,
    /// How `config` was obtained.
    pub source: ConfigSource,
}

impl LoadedConfig {
    /// Logs where the config came from. A malformed file is a warning.
    pub fn log_source(&self) {
        let path = self.path.display();
        match &self.source {
            ConfigSource::File => debug!(path = %path, "Configuration loaded"),
            ConfigSource::CreatedDefault => {
                info!(path = %path, "No configuration found, wrote defaults");
            }
            ConfigSource::Malformed { reason } => {
                warn!(path = %path, error = %reason, "Malformed configuration, using defaults");
            }
        }
    }
}

/// Locates and persists the config file.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Uses the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Uses `path` as the config directory.
    #[must_use]
    pub const fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Returns the default config directory.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Resolves the file to load: the override when given, otherwise
    /// `config.toml` in the config directory.
    #[must_use]
    pub fn config_path(&self, path_override: Option<&Path>) -> PathBuf {
        path_override.map_or_else(|| self.config_dir.join(CONFIG_FILE_NAME), Path::to_path_buf)
    }

    /// Loads the config, writing defaults when the file is missing.
    ///
    /// Only the directory holding the resolved file is ever created, so an
    /// override path leaves the default config directory alone.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the defaults
    /// cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        let path = self.config_path(path_override);

        if !path.exists() {
            let config = AppConfig::default();
            Self::write_config(&path, &config)?;
            return Ok(LoadedConfig {
                config,
                path,
                source: ConfigSource::CreatedDefault,
            });
        }

        let content = fs::read_to_string(&path)?;
        let (config, source) = match toml::from_str::<AppConfig>(&content) {
            Ok(config) => (config, ConfigSource::File),
            Err(e) => (
                AppConfig::default(),
                ConfigSource::Malformed {
                    reason: e.message().to_string(),
                },
            ),
        };

        Ok(LoadedConfig {
            config,
            path,
            source,
        })
    }

    /// Writes `config` to `path` through a temp file in the same directory,
    /// creating that directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization or any filesystem step fails.
    pub fn write_config(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(config)?;
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut staged = tempfile::NamedTempFile::new_in(dir)?;
        staged.write_all(content.as_bytes())?;
        staged.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gets_defaults_written() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join("rosterdesk");
        let manager = StorageManager::with_dir(config_dir.clone());

        let loaded = manager.load_config(None).unwrap();

        assert_eq!(loaded.source, ConfigSource::CreatedDefault);
        assert_eq!(loaded.path, config_dir.join(CONFIG_FILE_NAME));
        assert_eq!(loaded.config.api_url, "http://localhost:8000");

        let written = fs::read_to_string(&loaded.path).unwrap();
        assert!(written.contains("highlight_color = \"#e8e8e8\""));
        assert!(written.contains("notice_duration = 5"));

        let reloaded = manager.load_config(None).unwrap();
        assert_eq!(reloaded.source, ConfigSource::File);
        assert_eq!(reloaded.config.ui.highlight_color, "#e8e8e8");
        assert_eq!(reloaded.config.request_timeout_secs, None);
    }

    #[test]
    fn test_written_config_keeps_timeout_and_highlight() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut config = AppConfig::default();
        config.request_timeout_secs = Some(15);
        config.ui.highlight_color = "#ffcc00".to_string();

        StorageManager::write_config(&path, &config).unwrap();
        let loaded = StorageManager::with_dir(dir.path().to_path_buf())
            .load_config(None)
            .unwrap();

        assert_eq!(loaded.source, ConfigSource::File);
        assert_eq!(loaded.config.request_timeout_secs, Some(15));
        assert_eq!(loaded.config.ui.highlight_color, "#ffcc00");
        assert_eq!(
            loaded.config.request_timeout(),
            Some(std::time::Duration::from_secs(15))
        );
    }

    #[test]
    fn test_malformed_file_is_reported_and_left_alone() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "api_url = [").unwrap();

        let loaded = manager.load_config(None).unwrap();

        assert!(matches!(
            &loaded.source,
            ConfigSource::Malformed { reason } if !reason.is_empty()
        ));
        assert_eq!(loaded.config.api_url, "http://localhost:8000");
        assert_eq!(fs::read_to_string(&path).unwrap(), "api_url = [");
    }

    #[derive(Clone, Default)]
    struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_malformed_file_warns_once_logging_is_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "api_url = [").unwrap();

        let captured = CapturedLog::default();
        let subscriber = || {
            let writer = captured.clone();
            tracing_subscriber::fmt()
                .with_writer(move || writer.clone())
                .with_ansi(false)
                .finish()
        };

        let loaded = tracing::subscriber::with_default(subscriber(), || {
            StorageManager::with_dir(dir.path().to_path_buf())
                .load_config(None)
                .unwrap()
        });
        assert!(captured.0.lock().unwrap().is_empty());

        tracing::subscriber::with_default(subscriber(), || loaded.log_source());
        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("Malformed configuration, using defaults"));
    }

    #[test]
    fn test_override_path_does_not_touch_default_dir() {
        let dir = tempdir().unwrap();
        let default_dir = dir.path().join("default");
        let manager = StorageManager::with_dir(default_dir.clone());
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "api_url = \"http://records.test\"\n").unwrap();

        let loaded = manager.load_config(Some(&custom)).unwrap();

        assert_eq!(loaded.config.api_url, "http://records.test");
        assert_eq!(loaded.path, custom);
        assert!(!default_dir.exists());
    }

    #[test]
    fn test_missing_override_is_created_in_place() {
        let dir = tempdir().unwrap();
        let default_dir = dir.path().join("default");
        let manager = StorageManager::with_dir(default_dir.clone());
        let custom = dir.path().join("nested").join("desk.toml");

        let loaded = manager.load_config(Some(&custom)).unwrap();

        assert_eq!(loaded.source, ConfigSource::CreatedDefault);
        assert!(custom.exists());
        assert!(!default_dir.exists());
    }
}
