//! Todo Routes
//!
//! - GET /api/v1/todos - List todos
//! - POST /api/v1/todos - Add a todo
//! - POST /api/v1/todos/:id/toggle - Flip completion
//! - DELETE /api/v1/todos/:id - Delete a todo
//!
//! Blank text and unknown ids are not errors; the response says nothing
//! changed.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{AddTodoRequest, AddTodoResponse, TodoChangeResponse, TodoListResponse};
use crate::api::state::AppState;

/// GET /api/v1/todos
pub async fn list_todos(State(state): State<Arc<AppState>>) -> Json<TodoListResponse> {
    let dashboard = state.dashboard.read().await;
    let todos = dashboard.todos().to_vec();

    Json(TodoListResponse {
        total: todos.len(),
        completed: todos.iter().filter(|t| t.completed).count(),
        todos,
    })
}

/// POST /api/v1/todos
pub async fn add_todo(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddTodoRequest>,
) -> Json<AddTodoResponse> {
    let todo = state.dashboard.write().await.add_todo(&req.text);

    Json(AddTodoResponse {
        added: todo.is_some(),
        todo,
    })
}

/// POST /api/v1/todos/:id/toggle
pub async fn toggle_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Json<TodoChangeResponse> {
    let completed = state.dashboard.write().await.toggle_todo(id);

    Json(TodoChangeResponse {
        changed: completed.is_some(),
        completed,
    })
}

/// DELETE /api/v1/todos/:id
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Json<TodoChangeResponse> {
    let changed = state.dashboard.write().await.delete_todo(id);

    Json(TodoChangeResponse {
        changed,
        completed: None,
    })
}
