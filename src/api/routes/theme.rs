//! Theme Routes
//!
//! - GET /api/v1/theme - Current theme
//! - PUT /api/v1/theme - Choose a theme
//! - POST /api/v1/theme/toggle - Switch theme

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{SetThemeRequest, ThemeResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::state::{Theme, ThemeManager};

/// GET /api/v1/theme
pub async fn get_theme(State(state): State<Arc<AppState>>) -> Json<ThemeResponse> {
    let theme = state.dashboard.read().await.theme();
    Json(ThemeResponse {
        theme,
        attributes: ThemeManager::apply(theme),
    })
}

/// PUT /api/v1/theme
pub async fn set_theme(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetThemeRequest>,
) -> ApiResult<Json<ThemeResponse>> {
    let theme: Theme = req.theme.parse().map_err(ApiError::Validation)?;
    let attributes = state.dashboard.write().await.set_theme(theme);

    Ok(Json(ThemeResponse { theme, attributes }))
}

/// POST /api/v1/theme/toggle
pub async fn toggle_theme(State(state): State<Arc<AppState>>) -> Json<ThemeResponse> {
    let mut dashboard = state.dashboard.write().await;
    let attributes = dashboard.toggle_theme();

    Json(ThemeResponse {
        theme: dashboard.theme(),
        attributes,
    })
}
