//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;

pub(crate) const APP_NAME: &str = "cripto-login";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "cripto";

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

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Diagnostic output of the login handler.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Theme mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark mode (default).
    #[default]
    Dark,
    /// Light mode.
    Light,
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    /// Theme mode (Dark, Light).
    #[serde(default)]
    pub mode: ThemeMode,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            mode: ThemeMode::default(),
        }
    }
}

/// Diagnostic logging of submitted values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Write the submitted password verbatim instead of masked.
    #[serde(default)]
    pub reveal_password: bool,
}

fn default_accent_color() -> String {
    "Yellow".to_string()
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    ///
    /// The config file path is consumed by [`super::StorageManager::load_config`]
    /// and is not kept here.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
        if let Some(mode) = args.theme_mode {
            self.theme.mode = mode;
        }
        if let Some(reveal_password) = args.reveal_password {
            self.diagnostics.reveal_password = reveal_password;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("cripto-login.log"))
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
            log_path: None,
            log_level: LogLevel::Info,
            theme: ThemeConfig::default(),
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config() {
        let toml_content = r##"
            log_level = "debug"

            [theme]
            accent_color = "#ffbf00"
            mode = "light"

            [diagnostics]
            reveal_password = true
        "##;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.theme.accent_color, "#ffbf00");
        assert_eq!(config.theme.mode, ThemeMode::Light);
        assert!(config.diagnostics.reveal_password);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.theme.accent_color, "Yellow");
        assert_eq!(config.theme.mode, ThemeMode::Dark);
        assert!(!config.diagnostics.reveal_password);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str("[theme]\nmode = \"light\"\n").unwrap();

        assert_eq!(config.theme.accent_color, "Yellow");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let mut config: AppConfig =
            toml::from_str("log_level = \"warn\"\n[theme]\naccent_color = \"Cyan\"\n").unwrap();
        let args = CliArgs::parse_from([
            "cripto-login",
            "--log-level",
            "trace",
            "--theme-mode",
            "light",
            "--reveal-password",
            "true",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.theme.accent_color, "Cyan");
        assert_eq!(config.theme.mode, ThemeMode::Light);
        assert!(config.diagnostics.reveal_password);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Error.to_string(), "error");
    }
}
