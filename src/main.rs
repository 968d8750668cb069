//! Daybook
//!
//! Foreground dashboard: prints the current view, then keeps the clock
//! line ticking once per second until Ctrl+C.

use daybook::clock::{spawn_ticker, ClockReading};
use daybook::config::Config;
use daybook::dashboard::Dashboard;
use daybook::notify::Notifier;
use daybook::render::DashboardView;
use daybook::store::FileStore;
use daybook::weather::WeatherService;
use std::io::Write;
use std::sync::Arc;
use tokio::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    daybook::logging::init(&config.logging);

    tracing::info!("Daybook v{}", env!("CARGO_PKG_VERSION"));

    let data_dir = config.storage.data_path();
    tracing::info!("Data directory: {:?}", data_dir);
    let store = Arc::new(FileStore::open(&data_dir)?);

    let mut dashboard = Dashboard::new(
        store,
        WeatherService::from_config(&config.weather),
        Notifier::new((&config.notifications).into()),
    );
    dashboard.refresh_weather().await;

    print_header(&dashboard.view());

    let ticker = spawn_ticker(Duration::from_secs(1), |reading| async move {
        print_clock_line(&reading);
    });

    tokio::signal::ctrl_c().await?;
    ticker.abort();
    println!();

    dashboard.shutdown();
    tracing::info!("Daybook shutdown complete");
    Ok(())
}

fn print_header(view: &DashboardView) {
    match &view.header.user_name {
        Some(name) => println!("{}, {}!", view.header.greeting, name),
        None => println!("{}!", view.header.greeting),
    }
    println!(
        "{} {}  {}",
        view.weather.temperature, view.weather.description, view.weather.location
    );
    println!("{}  {}", view.quote.text, view.quote.author);
    println!(
        "{} of {} tasks done",
        view.todo_summary.completed, view.todo_summary.total
    );
    println!();
}

fn print_clock_line(reading: &ClockReading) {
    let mut stdout = std::io::stdout().lock();
    // Redraw in place; a broken pipe just ends the output
    let _ = write!(stdout, "\r{}  {}  ", reading.time, reading.date);
    let _ = stdout.flush();
}
