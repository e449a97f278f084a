//! Application configuration.

pub mod app_config;
pub mod args;
pub mod storage;

pub use app_config::{AppConfig, DiagnosticsConfig, LogLevel, ThemeConfig, ThemeMode};
pub use args::CliArgs;
pub use storage::{ConfigError, ConfigOutcome, LoadedConfig, StorageManager};
