//! Widget Routes
//!
//! - GET /api/v1/view - Full render view
//! - GET /api/v1/quote, POST /api/v1/quote/refresh
//! - GET /api/v1/weather, POST /api/v1/weather/refresh
//! - POST /api/v1/search - Search redirect target
//! - POST /api/v1/keys - Keyboard shortcut
//! - GET /api/v1/notifications - Live notifications

use axum::{extract::State, http::Uri, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::{KeyResponse, NotificationsResponse, SearchRequest, SearchResponse};
use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::dashboard::KeyEvent;
use crate::render::{DashboardView, QuoteView};
use crate::weather::WeatherReading;

/// GET /api/v1/view
pub async fn get_view(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    Json(state.dashboard.read().await.view())
}

/// GET /api/v1/quote
pub async fn get_quote(State(state): State<Arc<AppState>>) -> Json<QuoteView> {
    Json(QuoteView::from(state.dashboard.read().await.quote()))
}

/// POST /api/v1/quote/refresh
pub async fn refresh_quote(State(state): State<Arc<AppState>>) -> Json<QuoteView> {
    Json(QuoteView::from(state.dashboard.write().await.refresh_quote()))
}

/// GET /api/v1/weather
pub async fn get_weather(State(state): State<Arc<AppState>>) -> Json<WeatherReading> {
    Json(state.dashboard.read().await.weather().clone())
}

/// POST /api/v1/weather/refresh
///
/// The lookup runs without holding the dashboard lock; the result is
/// installed afterwards.
pub async fn refresh_weather(State(state): State<Arc<AppState>>) -> Json<WeatherReading> {
    let service = state.dashboard.read().await.weather_service();
    let reading = service.current().await;

    let mut dashboard = state.dashboard.write().await;
    Json(dashboard.set_weather(reading).clone())
}

/// POST /api/v1/search
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let url = state.dashboard.write().await.perform_search(&req.query);
    Json(SearchResponse { url })
}

/// POST /api/v1/keys
pub async fn handle_key(
    State(state): State<Arc<AppState>>,
    Json(event): Json<KeyEvent>,
) -> Json<KeyResponse> {
    let mut dashboard = state.dashboard.write().await;
    let action = dashboard.handle_key(&event);

    Json(KeyResponse {
        action,
        panels: dashboard.panels(),
    })
}

/// GET /api/v1/notifications
pub async fn list_notifications(State(state): State<Arc<AppState>>) -> Json<NotificationsResponse> {
    let dashboard = state.dashboard.read().await;
    Json(NotificationsResponse {
        notifications: dashboard.notifier().active(Utc::now()),
    })
}

/// Any unmatched route
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
