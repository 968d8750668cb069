//! Profile Routes
//!
//! - GET /api/v1/profile - Saved profile
//! - PUT /api/v1/profile - Save name and location

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{ProfileRequest, ProfileResponse};
use crate::api::state::AppState;

/// GET /api/v1/profile
pub async fn get_profile(State(state): State<Arc<AppState>>) -> Json<ProfileResponse> {
    let dashboard = state.dashboard.read().await;
    Json(ProfileResponse {
        saved: dashboard.profile().is_set(),
        profile: dashboard.profile().clone(),
    })
}

/// PUT /api/v1/profile
///
/// A blank name leaves the stored profile untouched and answers `saved: false`.
pub async fn put_profile(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProfileRequest>,
) -> Json<ProfileResponse> {
    let mut dashboard = state.dashboard.write().await;
    let saved = dashboard.save_profile(&req.name, &req.location).is_some();

    Json(ProfileResponse {
        saved,
        profile: dashboard.profile().clone(),
    })
}
