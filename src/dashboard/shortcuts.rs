//! Keyboard shortcuts
//!
//! - Ctrl+K / Meta+K toggles the search panel
//! - Escape closes the profile modal

use serde::{Deserialize, Serialize};

/// A key press as reported by the presentation layer
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key value, e.g. `"k"` or `"Escape"`
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub meta: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

/// What a shortcut does
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShortcutAction {
    ToggleSearch,
    CloseModal,
}

/// Resolve a key press to a shortcut, if it is one
pub fn shortcut_for(event: &KeyEvent) -> Option<ShortcutAction> {
    if (event.ctrl || event.meta) && event.key == "k" {
        return Some(ShortcutAction::ToggleSearch);
    }
    if event.key == "Escape" {
        return Some(ShortcutAction::CloseModal);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_shortcut() {
        assert_eq!(
            shortcut_for(&KeyEvent::new("k").with_ctrl()),
            Some(ShortcutAction::ToggleSearch)
        );
        assert_eq!(
            shortcut_for(&KeyEvent::new("k").with_meta()),
            Some(ShortcutAction::ToggleSearch)
        );
    }

    #[test]
    fn test_plain_k_is_not_a_shortcut() {
        assert_eq!(shortcut_for(&KeyEvent::new("k")), None);
        assert_eq!(shortcut_for(&KeyEvent::new("j").with_ctrl()), None);
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            shortcut_for(&KeyEvent::new("Escape")),
            Some(ShortcutAction::CloseModal)
        );
        assert_eq!(
            shortcut_for(&KeyEvent::new("Escape").with_ctrl()),
            Some(ShortcutAction::CloseModal)
        );
    }

    #[test]
    fn test_deserialize_defaults() {
        let event: KeyEvent = serde_json::from_str(r#"{"key":"Escape"}"#).unwrap();
        assert_eq!(event, KeyEvent::new("Escape"));
    }
}
