use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use rosterdesk::infrastructure::config::LoadedConfig;
use rosterdesk::infrastructure::{AppConfig, CliArgs, HttpRecordClient, StorageManager};
use rosterdesk::presentation::App;

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

fn load_config() -> Result<(AppConfig, LoadedConfig)> {
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();

    let storage = StorageManager::new()?;
    let mut loaded = storage.load_config(args.config.as_deref())?;
    let mut config = std::mem::take(&mut loaded.config);
    config.merge_with_args(args);

    Ok((config, loaded))
}

fn create_app() -> Result<App> {
    let (config, loaded) = load_config()?;

    init_logging(&config)?;
    loaded.log_source();

    info!(version = rosterdesk::VERSION, api_url = %config.api_url, "Starting Rosterdesk");

    let records = Arc::new(HttpRecordClient::with_base_url(
        &config.api_url,
        config.request_timeout(),
    )?);

    Ok(App::new(records, &config))
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
