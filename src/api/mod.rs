//! Daybook binding API
//!
//! Localhost JSON-over-HTTP surface for presentation front-ends, built with
//! Axum. Handlers translate requests into [`Dashboard`](crate::dashboard::Dashboard)
//! actions; nothing is synced to a remote service.
//!
//! # Endpoints
//!
//! ## View
//! - `GET /api/v1/view` - Everything needed to draw the dashboard
//!
//! ## Todos
//! - `GET /api/v1/todos` - List todos
//! - `POST /api/v1/todos` - Add a todo
//! - `POST /api/v1/todos/:id/toggle` - Flip completion
//! - `DELETE /api/v1/todos/:id` - Delete a todo
//!
//! ## Notes
//! - `GET /api/v1/notes` - Current notes
//! - `PUT /api/v1/notes` - Auto-save
//! - `POST /api/v1/notes/save` - Explicit save
//!
//! ## Profile and theme
//! - `GET /api/v1/profile`, `PUT /api/v1/profile`
//! - `GET /api/v1/theme`, `PUT /api/v1/theme`, `POST /api/v1/theme/toggle`
//!
//! ## Panels
//! - `POST /api/v1/panels/profile`, `DELETE /api/v1/panels/profile`
//! - `POST /api/v1/panels/todo-input/toggle`
//! - `POST /api/v1/panels/search/toggle`
//!
//! ## Widgets
//! - `GET /api/v1/quote`, `POST /api/v1/quote/refresh`
//! - `GET /api/v1/weather`, `POST /api/v1/weather/refresh`
//! - `POST /api/v1/search`
//! - `POST /api/v1/keys`
//! - `GET /api/v1/notifications`
//!
//! ## Health
//! - `GET /health/live` - Liveness check
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use daybook::api::{serve, AppState};
//! use daybook::config::Config;
//! use daybook::dashboard::Dashboard;
//! use daybook::notify::Notifier;
//! use daybook::store::FileStore;
//! use daybook::weather::WeatherService;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_default();
//!     let store = Arc::new(FileStore::open(config.storage.data_path())?);
//!     let dashboard = Dashboard::new(
//!         store,
//!         WeatherService::from_config(&config.weather),
//!         Notifier::new((&config.notifications).into()),
//!     );
//!
//!     serve(AppState::new(dashboard, config.api.clone()), &config.api).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // View
        .route("/view", get(routes::widgets::get_view))
        // Todo routes
        .route(
            "/todos",
            get(routes::todos::list_todos).post(routes::todos::add_todo),
        )
        .route("/todos/:id/toggle", post(routes::todos::toggle_todo))
        .route("/todos/:id", delete(routes::todos::delete_todo))
        // Notes routes
        .route(
            "/notes",
            get(routes::notes::get_notes).put(routes::notes::put_notes),
        )
        .route("/notes/save", post(routes::notes::save_notes))
        // Profile routes
        .route(
            "/profile",
            get(routes::profile::get_profile).put(routes::profile::put_profile),
        )
        // Theme routes
        .route(
            "/theme",
            get(routes::theme::get_theme).put(routes::theme::set_theme),
        )
        .route("/theme/toggle", post(routes::theme::toggle_theme))
        // Panel routes
        .route(
            "/panels/profile",
            post(routes::panels::open_profile).delete(routes::panels::close_profile),
        )
        .route(
            "/panels/todo-input/toggle",
            post(routes::panels::toggle_todo_input),
        )
        .route("/panels/search/toggle", post(routes::panels::toggle_search))
        // Widget routes
        .route("/quote", get(routes::widgets::get_quote))
        .route("/quote/refresh", post(routes::widgets::refresh_quote))
        .route("/weather", get(routes::widgets::get_weather))
        .route("/weather/refresh", post(routes::widgets::refresh_weather))
        .route("/search", post(routes::widgets::search))
        .route("/keys", post(routes::widgets::handle_key))
        .route("/notifications", get(routes::widgets::list_notifications));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(routes::widgets::not_found)
        .layer(TraceLayer::new_for_http())
        // Front-ends load from file:// or a dev server on another port
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let dashboard = Arc::clone(&state.dashboard);
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Daybook API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    dashboard.read().await.shutdown();
    tracing::info!("Daybook API shut down gracefully");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
