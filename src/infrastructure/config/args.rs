//! Command line arguments.

use super::app_config::{LogLevel, ThemeMode};
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "cripto-login",
    version,
    about = "A minimal terminal login screen",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Initial location to open.
    #[arg(long, value_name = "PATH", default_value = "/")]
    pub path: String,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Theme mode.
    #[arg(long, value_enum)]
    pub theme_mode: Option<ThemeMode>,

    /// Write submitted passwords to the log verbatim.
    #[arg(long)]
    pub reveal_password: Option<bool>,
}
