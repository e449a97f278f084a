//! Config file storage.

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors reading or writing the config file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// How the config file was handled on load.
#[derive(Debug)]
pub enum ConfigOutcome {
    /// Parsed from an existing file.
    Loaded,
    /// No file existed, so one was written with defaults.
    Created,
    /// The file could not be parsed and defaults are in use.
    Malformed(toml::de::Error),
}

/// Configuration together with where it came from.
#[derive(Debug)]
pub struct LoadedConfig {
    /// Effective configuration.
    pub config: AppConfig,
    /// Path of the config file.
    pub path: PathBuf,
    /// What happened while loading.
    pub outcome: ConfigOutcome,
}

impl LoadedConfig {
    /// Logs the load outcome. Call once logging is initialized.
    pub fn report(&self) {
        let path = self.path.display();
        match &self.outcome {
            ConfigOutcome::Loaded => info!(path = %path, "Loaded config file"),
            ConfigOutcome::Created => {
                info!(path = %path, "Config file not found, created default");
            }
            ConfigOutcome::Malformed(e) => {
                warn!(path = %path, error = %e, "Failed to parse config file, using defaults");
            }
        }
    }
}

/// Locates, creates and reads the config file.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Create a new `StorageManager`.
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

    /// Creates a new `StorageManager` with a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    fn ensure_config_dir(&self) -> Result<(), ConfigError> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }

    /// Loads the application configuration.
    ///
    /// A missing file is created with defaults. A malformed file is left
    /// untouched and defaults are used. Nothing is logged here; the outcome
    /// is returned for [`LoadedConfig::report`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        let path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            Path::to_path_buf,
        );

        if !path.exists() {
            match path_override.and_then(Path::parent) {
                Some(parent) => fs::create_dir_all(parent)?,
                None => self.ensure_config_dir()?,
            }
            let config = AppConfig::default();
            Self::save_to_file(&path, &config)?;
            return Ok(LoadedConfig {
                config,
                path,
                outcome: ConfigOutcome::Created,
            });
        }

        let content = fs::read_to_string(&path)?;
        let (config, outcome) = match toml::from_str::<AppConfig>(&content) {
            Ok(config) => (config, ConfigOutcome::Loaded),
            Err(e) => (AppConfig::default(), ConfigOutcome::Malformed(e)),
        };

        Ok(LoadedConfig {
            config,
            path,
            outcome,
        })
    }

    fn save_to_file<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(data)?;

        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}
