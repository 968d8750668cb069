//! Daybook API Server
//!
//! Localhost binding server for presentation front-ends.
//!
//! Run with: cargo run --bin daybook-api
//!
//! # Configuration
//!
//! Read from `config.toml` (see `daybook-cli config`), then overridden by:
//! - `DAYBOOK_API_HOST`: Host to bind to (default: 127.0.0.1)
//! - `DAYBOOK_API_PORT`: Port to listen on (default: 8086)
//! - `DAYBOOK_DATA_DIR`: Data directory
//! - `DAYBOOK_WEATHER_API_KEY`: OpenWeatherMap key (weather falls back without it)
//! - `DAYBOOK_LOG_LEVEL`, `DAYBOOK_LOG_FORMAT`; `RUST_LOG` wins when set

use daybook::api::{serve, AppState};
use daybook::config::Config;
use daybook::dashboard::Dashboard;
use daybook::notify::Notifier;
use daybook::store::FileStore;
use daybook::weather::WeatherService;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    daybook::logging::init(&config.logging);

    tracing::info!("Starting Daybook API server v{}", env!("CARGO_PKG_VERSION"));

    let data_dir = config.storage.data_path();
    tracing::info!("Data directory: {:?}", data_dir);
    let store = Arc::new(FileStore::open(&data_dir)?);

    let weather = WeatherService::from_config(&config.weather);
    if !weather.is_live() {
        tracing::info!("No weather API key configured, showing the default reading");
    }

    let dashboard = Dashboard::new(
        store,
        weather.clone(),
        Notifier::new((&config.notifications).into()),
    );
    let state = AppState::new(dashboard, config.api.clone());

    // Initial weather lookup runs beside the server, outside the lock
    let shared = Arc::clone(&state.dashboard);
    let weather_handle = tokio::spawn(async move {
        let reading = weather.current().await;
        shared.write().await.set_weather(reading);
    });

    serve(state, &config.api).await?;

    weather_handle.abort();
    tracing::info!("Daybook API server stopped");

    Ok(())
}
