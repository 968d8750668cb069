//! Notes Routes
//!
//! - GET /api/v1/notes - Current notes
//! - PUT /api/v1/notes - Auto-save from the editor buffer
//! - POST /api/v1/notes/save - Explicit save (announced)

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::NotesBody;
use crate::api::state::AppState;

/// GET /api/v1/notes
pub async fn get_notes(State(state): State<Arc<AppState>>) -> Json<NotesBody> {
    let dashboard = state.dashboard.read().await;
    Json(NotesBody {
        text: dashboard.notes().to_string(),
    })
}

/// PUT /api/v1/notes
pub async fn put_notes(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NotesBody>,
) -> Json<NotesBody> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.notes_input(req.text);
    Json(NotesBody {
        text: dashboard.notes().to_string(),
    })
}

/// POST /api/v1/notes/save
pub async fn save_notes(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NotesBody>,
) -> Json<NotesBody> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.save_notes(req.text);
    Json(NotesBody {
        text: dashboard.notes().to_string(),
    })
}
