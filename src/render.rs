//! Render instructions
//!
//! Pure functions from dashboard state to what a presentation layer shows.
//! Nothing in here touches the store. User-supplied text is escaped, never
//! interpreted as markup.

use crate::clock::ClockReading;
use crate::notify::ActiveNotification;
use crate::quotes::Quote;
use crate::state::{ThemeAttributes, TodoItem};
use crate::weather::WeatherReading;
use serde::Serialize;

/// Shown instead of rows when the todo list is empty
pub const EMPTY_TODOS_MESSAGE: &str = "No tasks yet. Add one above!";

/// Escape text for insertion into HTML content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One rendered todo row
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TodoRow {
    pub id: i64,
    /// Checkbox state
    pub completed: bool,
    /// Escaped item text
    pub text_html: String,
    /// Row css classes
    pub class_name: String,
}

/// The todo widget body
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TodoListView {
    Placeholder { message: String },
    Items { rows: Vec<TodoRow> },
}

impl TodoListView {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, TodoListView::Placeholder { .. })
    }

    /// HTML fragment for front-ends that insert markup directly
    pub fn to_html(&self) -> String {
        match self {
            TodoListView::Placeholder { message } => {
                format!("<p class=\"todo-empty\">{}</p>", escape_html(message))
            }
            TodoListView::Items { rows } => rows
                .iter()
                .map(|row| {
                    format!(
                        "<div class=\"{class}\" data-id=\"{id}\">\
                         <input type=\"checkbox\" class=\"todo-checkbox\"{checked}>\
                         <span class=\"todo-text\">{text}</span>\
                         <button class=\"todo-delete\" data-action=\"delete\">Delete</button>\
                         </div>",
                        class = row.class_name,
                        id = row.id,
                        checked = if row.completed { " checked" } else { "" },
                        text = row.text_html,
                    )
                })
                .collect(),
        }
    }
}

/// Render the todo list
pub fn todo_list(items: &[TodoItem]) -> TodoListView {
    if items.is_empty() {
        return TodoListView::Placeholder {
            message: EMPTY_TODOS_MESSAGE.to_string(),
        };
    }

    let rows = items
        .iter()
        .map(|item| TodoRow {
            id: item.id,
            completed: item.completed,
            text_html: escape_html(&item.text),
            class_name: if item.completed {
                "todo-item completed".to_string()
            } else {
                "todo-item".to_string()
            },
        })
        .collect();

    TodoListView::Items { rows }
}

/// Weather widget
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WeatherView {
    pub icon: String,
    pub temperature: String,
    pub description: String,
    pub location: String,
}

impl From<&WeatherReading> for WeatherView {
    fn from(reading: &WeatherReading) -> Self {
        Self {
            icon: reading.icon.as_str().to_string(),
            temperature: reading.temperature_label(),
            description: reading.description.clone(),
            location: reading.location_name.clone(),
        }
    }
}

/// Quote widget
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QuoteView {
    pub text: String,
    pub author: String,
}

impl From<&Quote> for QuoteView {
    fn from(quote: &Quote) -> Self {
        Self {
            text: quote.quoted_text(),
            author: quote.attribution(),
        }
    }
}

/// Header block: greeting and profile
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HeaderView {
    pub greeting: String,
    /// Saved profile name, if any
    pub user_name: Option<String>,
    pub location: Option<String>,
}

/// Which transient panels are open
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct PanelState {
    pub search_open: bool,
    pub todo_input_open: bool,
    pub profile_modal_open: bool,
}

/// Todo counters
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TodoSummary {
    pub total: usize,
    pub completed: usize,
}

/// The whole dashboard, ready to draw
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub theme: ThemeAttributes,
    pub header: HeaderView,
    pub clock: ClockReading,
    pub weather: WeatherView,
    pub quote: QuoteView,
    pub todos: TodoListView,
    pub todo_summary: TodoSummary,
    pub notes: String,
    pub panels: PanelState,
    pub notifications: Vec<ActiveNotification>,
}
