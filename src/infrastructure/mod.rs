//! Infrastructure layer with configuration and auth adapters.

/// Authentication adapters.
pub mod auth;
/// Application configuration.
pub mod config;

pub use auth::DiagnosticAuthenticator;
pub use config::{AppConfig, CliArgs, ConfigOutcome, LoadedConfig, StorageManager};
