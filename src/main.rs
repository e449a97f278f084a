use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cripto_login::infrastructure::{AppConfig, CliArgs, DiagnosticAuthenticator, StorageManager};
use cripto_login::presentation::{App, Theme};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app() -> Result<App> {
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let location = args.path.clone();

    let storage = StorageManager::new()?;
    let mut loaded = storage.load_config(args.config.as_deref())?;
    loaded.config.merge_with_args(args);

    init_logging(&loaded.config)?;
    loaded.report();
    let config = loaded.config;

    info!(version = cripto_login::VERSION, location = %location, "Starting {}", cripto_login::NAME);

    let auth = Arc::new(
        DiagnosticAuthenticator::new().reveal_password(config.diagnostics.reveal_password),
    );
    let theme = Theme::from_config(&config.theme);

    Ok(App::new(auth, theme, &location))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
