//! Dashboard Controller
//!
//! Composes the managers, the weather service and the notifier, and
//! translates user intents into manager calls, notifications and panel
//! state. Everything is injected; there is no global instance.
//!
//! The controller is a plain synchronous type mutated through `&mut self`.
//! Callers that share it across tasks wrap it in `Arc<RwLock<_>>` and run the
//! weather fetch outside the lock (see [`Dashboard::weather_service`] and
//! [`Dashboard::set_weather`]).

pub mod shortcuts;

pub use shortcuts::{shortcut_for, KeyEvent, ShortcutAction};

use crate::clock::ClockReading;
use crate::notify::Notifier;
use crate::quotes::{Quote, QuotePicker};
use crate::render::{
    self, DashboardView, HeaderView, PanelState, QuoteView, TodoSummary, WeatherView,
};
use crate::search::search_url;
use crate::state::{
    NotesPad, ProfileManager, Theme, ThemeAttributes, ThemeManager, TodoItem, TodoList, UserProfile,
};
use crate::store::KeyValueStore;
use crate::weather::{WeatherReading, WeatherService};
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Values pre-filled into the profile editor
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub location: String,
}

/// The dashboard application core
pub struct Dashboard {
    todos: TodoList,
    notes: NotesPad,
    profile: ProfileManager,
    theme: ThemeManager,
    quotes: QuotePicker,
    quote: &'static Quote,
    weather_service: WeatherService,
    weather: WeatherReading,
    notifier: Notifier,
    panels: PanelState,
}

impl Dashboard {
    /// Load every manager from `store`.
    ///
    /// Weather starts as the fallback reading until [`Dashboard::refresh_weather`]
    /// or [`Dashboard::set_weather`] runs.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        weather_service: WeatherService,
        notifier: Notifier,
    ) -> Self {
        let quotes = QuotePicker::new();
        let quote = quotes.pick();

        let dashboard = Self {
            todos: TodoList::load(Arc::clone(&store)),
            notes: NotesPad::load_from(Arc::clone(&store)),
            profile: ProfileManager::load_from(Arc::clone(&store)),
            theme: ThemeManager::load_from(store),
            quotes,
            quote,
            weather_service,
            weather: WeatherReading::fallback(),
            notifier,
            panels: PanelState::default(),
        };

        tracing::info!(
            todos = dashboard.todos.len(),
            theme = %dashboard.theme.current(),
            live_weather = dashboard.weather_service.is_live(),
            "Dashboard initialized"
        );

        dashboard
    }

    // Todos

    /// Add a todo; blank text is ignored
    pub fn add_todo(&mut self, text: &str) -> Option<TodoItem> {
        let item = self.todos.add(text)?;
        self.panels.todo_input_open = false;
        self.notifier.success("Task added!");
        Some(item)
    }

    /// Flip completion; `None` for unknown ids
    pub fn toggle_todo(&mut self, id: i64) -> Option<bool> {
        self.todos.toggle_completion(id)
    }

    /// Delete a todo; returns whether anything was removed
    pub fn delete_todo(&mut self, id: i64) -> bool {
        let removed = self.todos.remove(id);
        if removed {
            self.notifier.success("Task deleted!");
        }
        removed
    }

    /// Show or hide the new-todo input
    pub fn toggle_todo_input(&mut self) -> bool {
        self.panels.todo_input_open = !self.panels.todo_input_open;
        self.panels.todo_input_open
    }

    // Notes

    /// Editor buffer changed
    pub fn notes_input(&mut self, text: impl Into<String>) {
        self.notes.set_from_editor_buffer(text);
    }

    /// Explicit save
    pub fn save_notes(&mut self, text: impl Into<String>) {
        self.notes.save(text);
        self.notifier.success("Notes saved!");
    }

    // Profile

    pub fn show_profile_modal(&mut self) -> ProfileForm {
        self.panels.profile_modal_open = true;
        let profile = self.profile.load();
        ProfileForm {
            name: profile.name.clone(),
            location: profile.location.clone().unwrap_or_default(),
        }
    }

    pub fn hide_profile_modal(&mut self) {
        self.panels.profile_modal_open = false;
    }

    /// Save the profile; a blank name keeps the modal open and changes nothing
    pub fn save_profile(&mut self, name: &str, location: &str) -> Option<UserProfile> {
        let saved = self.profile.save(name, location)?;
        self.panels.profile_modal_open = false;
        self.notifier.success("Profile saved successfully!");
        Some(saved)
    }

    // Theme

    pub fn toggle_theme(&mut self) -> ThemeAttributes {
        let theme = self.theme.toggle();
        ThemeManager::apply(theme)
    }

    pub fn set_theme(&mut self, theme: Theme) -> ThemeAttributes {
        self.theme.set(theme);
        ThemeManager::apply(theme)
    }

    // Quote

    pub fn refresh_quote(&mut self) -> &'static Quote {
        self.quote = self.quotes.pick();
        self.quote
    }

    // Weather

    /// Fetch and install fresh weather; falls back on any failure
    pub async fn refresh_weather(&mut self) -> &WeatherReading {
        let reading = self.weather_service.current().await;
        self.set_weather(reading)
    }

    /// Install a reading fetched elsewhere
    pub fn set_weather(&mut self, reading: WeatherReading) -> &WeatherReading {
        self.weather = reading;
        &self.weather
    }

    /// Handle for fetching weather without holding the controller
    pub fn weather_service(&self) -> WeatherService {
        self.weather_service.clone()
    }

    // Search

    pub fn toggle_search(&mut self) -> bool {
        self.panels.search_open = !self.panels.search_open;
        self.panels.search_open
    }

    /// Redirect target for `query`; blank queries do nothing
    pub fn perform_search(&mut self, query: &str) -> Option<String> {
        let url = search_url(query)?;
        tracing::debug!(%url, "Search");
        Some(url)
    }

    // Keyboard

    /// Apply a keyboard shortcut, returning what it did
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<ShortcutAction> {
        let action = shortcut_for(event)?;
        match action {
            ShortcutAction::ToggleSearch => {
                self.toggle_search();
            }
            ShortcutAction::CloseModal => self.hide_profile_modal(),
        }
        Some(action)
    }

    /// Flush pending state before exit
    pub fn shutdown(&self) {
        self.notes.flush();
        tracing::info!("Dashboard shut down");
    }

    // Accessors

    pub fn todos(&self) -> &[TodoItem] {
        self.todos.list()
    }

    pub fn notes(&self) -> &str {
        self.notes.load()
    }

    pub fn profile(&self) -> &UserProfile {
        self.profile.load()
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn quote(&self) -> &'static Quote {
        self.quote
    }

    pub fn weather(&self) -> &WeatherReading {
        &self.weather
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn panels(&self) -> PanelState {
        self.panels
    }

    // Rendering

    /// Render against the local wall clock
    pub fn view(&self) -> DashboardView {
        self.view_at(&Local::now())
    }

    /// Render as of `now`
    pub fn view_at<Tz>(&self, now: &DateTime<Tz>) -> DashboardView
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let clock = ClockReading::at(now);
        let profile = self.profile.load();

        DashboardView {
            theme: ThemeManager::apply(self.theme.current()),
            header: HeaderView {
                greeting: clock.greeting.clone(),
                user_name: profile.is_set().then(|| profile.name.clone()),
                location: profile.location.clone(),
            },
            clock,
            weather: WeatherView::from(&self.weather),
            quote: QuoteView::from(self.quote),
            todos: render::todo_list(self.todos.list()),
            todo_summary: TodoSummary {
                total: self.todos.len(),
                completed: self.todos.completed_count(),
            },
            notes: self.notes.load().to_string(),
            panels: self.panels,
            notifications: self.notifier.active(now.with_timezone(&Utc)),
        }
    }
}
