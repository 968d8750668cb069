//! Theme Manager
//!
//! Two-valued theme preference stored as a raw string under [`THEME_KEY`].

use crate::store::{KeyValueStore, THEME_KEY};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Visual theme
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// What the presentation layer applies for a theme
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ThemeAttributes {
    /// Value of the document-level `data-theme` attribute
    pub data_theme: &'static str,
    /// Icon key shown on the toggle button (the theme it switches to)
    pub toggle_icon: &'static str,
}

/// Owner of the persisted [`Theme`]
pub struct ThemeManager {
    store: Arc<dyn KeyValueStore>,
    theme: Theme,
}

impl ThemeManager {
    /// Load the preference, defaulting to light
    pub fn load_from(store: Arc<dyn KeyValueStore>) -> Self {
        let theme = match store.get(THEME_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring stored theme");
                Theme::default()
            }),
            None => Theme::default(),
        };

        Self { store, theme }
    }

    pub fn current(&self) -> Theme {
        self.theme
    }

    /// Switch to the other theme and persist it
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    /// Persist an explicit choice
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            tracing::warn!(error = %e, "Failed to persist theme");
        }
        tracing::debug!(theme = %theme, "Theme set");
    }

    /// Presentation attributes for `theme`. Pure, so repeated application
    /// yields the same visible state.
    pub fn apply(theme: Theme) -> ThemeAttributes {
        match theme {
            Theme::Light => ThemeAttributes {
                data_theme: "light",
                toggle_icon: "moon",
            },
            Theme::Dark => ThemeAttributes {
                data_theme: "dark",
                toggle_icon: "sun",
            },
        }
    }
}
