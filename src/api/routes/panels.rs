//! Panel Routes
//!
//! Open and close the transient panels a front-end draws.
//!
//! - POST /api/v1/panels/profile - Open the profile editor, returns its form
//! - DELETE /api/v1/panels/profile - Close the profile editor
//! - POST /api/v1/panels/todo-input/toggle - Show or hide the new-todo input
//! - POST /api/v1/panels/search/toggle - Show or hide the search box

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::dashboard::ProfileForm;
use crate::render::PanelState;

/// POST /api/v1/panels/profile
pub async fn open_profile(State(state): State<Arc<AppState>>) -> Json<ProfileForm> {
    Json(state.dashboard.write().await.show_profile_modal())
}

/// DELETE /api/v1/panels/profile
pub async fn close_profile(State(state): State<Arc<AppState>>) -> Json<PanelState> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.hide_profile_modal();
    Json(dashboard.panels())
}

/// POST /api/v1/panels/todo-input/toggle
pub async fn toggle_todo_input(State(state): State<Arc<AppState>>) -> Json<PanelState> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.toggle_todo_input();
    Json(dashboard.panels())
}

/// POST /api/v1/panels/search/toggle
pub async fn toggle_search(State(state): State<Arc<AppState>>) -> Json<PanelState> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.toggle_search();
    Json(dashboard.panels())
}
