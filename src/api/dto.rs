//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.

use crate::dashboard::ShortcutAction;
use crate::notify::ActiveNotification;
use crate::render::PanelState;
use crate::state::{Theme, ThemeAttributes, TodoItem, UserProfile};
use serde::{Deserialize, Serialize};

// ============================================
// TODO DTOs
// ============================================

/// Todo list response
#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub todos: Vec<TodoItem>,
    pub total: usize,
    pub completed: usize,
}

/// New todo request
#[derive(Debug, Deserialize)]
pub struct AddTodoRequest {
    pub text: String,
}

/// New todo response; `added` is false for blank text
#[derive(Debug, Serialize)]
pub struct AddTodoResponse {
    pub added: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo: Option<TodoItem>,
}

/// Toggle/delete response; `changed` is false for unknown ids
#[derive(Debug, Serialize)]
pub struct TodoChangeResponse {
    pub changed: bool,
    /// New completion state after a toggle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

// ============================================
// NOTES DTOs
// ============================================

/// Notes body, used for requests and responses
#[derive(Debug, Serialize, Deserialize)]
pub struct NotesBody {
    pub text: String,
}

// ============================================
// PROFILE DTOs
// ============================================

/// Profile save request
#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub name: String,
    #[serde(default)]
    pub location: String,
}

/// Profile response; `saved` is false when the name was blank
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub saved: bool,
    pub profile: UserProfile,
}

// ============================================
// THEME DTOs
// ============================================

/// Explicit theme choice
#[derive(Debug, Deserialize)]
pub struct SetThemeRequest {
    pub theme: String,
}

/// Theme response
#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
    pub attributes: ThemeAttributes,
}

// ============================================
// SEARCH / KEYBOARD DTOs
// ============================================

/// Search request
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Redirect target; `None` for a blank query
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub url: Option<String>,
}

/// Result of a key press
#[derive(Debug, Serialize)]
pub struct KeyResponse {
    pub action: Option<ShortcutAction>,
    pub panels: PanelState,
}

/// Live notifications
#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<ActiveNotification>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or degraded
    pub status: String,
    /// Weather source: live or fallback
    pub weather: String,
    /// Number of stored todos
    pub todos: usize,
    /// Address the server was configured to bind
    pub address: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
