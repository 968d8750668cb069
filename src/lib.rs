//! # Daybook
//!
//! Personal dashboard core - a clock and greeting, weather readout, random
//! quote, todo list, notes pad, user profile and light/dark theme, all
//! persisted in a local key/value store.
//!
//! ## Modules
//!
//! - [`store`]: Key/value persistence (`MemoryStore`, `FileStore`)
//! - [`state`]: Todo, notes, profile and theme managers
//! - [`quotes`], [`weather`], [`clock`], [`search`]: Widgets
//! - [`notify`]: Transient notifications
//! - [`render`]: Pure view construction
//! - [`dashboard`]: The controller that ties it together
//! - [`api`]: Localhost binding server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use daybook::dashboard::Dashboard;
//! use daybook::notify::Notifier;
//! use daybook::store::FileStore;
//! use daybook::weather::WeatherService;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(FileStore::open("./daybook_data")?);
//!     let mut dashboard = Dashboard::new(store, WeatherService::offline(), Notifier::default());
//!
//!     dashboard.add_todo("Buy milk");
//!     dashboard.refresh_weather().await;
//!
//!     let view = dashboard.view();
//!     println!("{}, {}", view.header.greeting, view.clock.time);
//!
//!     dashboard.shutdown();
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod notify;
pub mod quotes;
pub mod render;
pub mod search;
pub mod state;
pub mod store;
pub mod weather;

// Re-export top-level types for convenience
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, StoreExt, StoreResult};

pub use state::{
    NotesPad, ProfileManager, Theme, ThemeAttributes, ThemeManager, TodoItem, TodoList,
    UserProfile,
};

pub use dashboard::{Dashboard, KeyEvent, ProfileForm, ShortcutAction};

pub use weather::{
    Coordinates, Geolocator, WeatherError, WeatherIcon, WeatherProvider, WeatherReading,
    WeatherService,
};

pub use notify::{ActiveNotification, Notification, NotificationTiming, Notifier, Severity};

pub use render::DashboardView;

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError};
