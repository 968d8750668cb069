//! Notes Manager
//!
//! A single free-text blob stored verbatim under [`NOTES_KEY`].
//! Every editor change is written immediately; last write wins.

use crate::store::{KeyValueStore, NOTES_KEY};
use std::sync::Arc;

/// Free-text notes pad with auto-save
pub struct NotesPad {
    store: Arc<dyn KeyValueStore>,
    text: String,
}

impl NotesPad {
    /// Load the notes blob, defaulting to empty
    pub fn load_from(store: Arc<dyn KeyValueStore>) -> Self {
        let text = store.get(NOTES_KEY).unwrap_or_default();
        Self { store, text }
    }

    /// Auto-save path, called on every editor input event
    pub fn set_from_editor_buffer(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.persist();
    }

    /// Explicit save. Same write as auto-save; the caller announces it.
    pub fn save(&mut self, text: impl Into<String>) {
        self.set_from_editor_buffer(text);
        tracing::info!(chars = self.text.chars().count(), "Notes saved");
    }

    /// Current blob, for populating the editor
    pub fn load(&self) -> &str {
        &self.text
    }

    /// Re-persist the current blob (used on shutdown)
    pub fn flush(&self) {
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.set(NOTES_KEY, &self.text) {
            tracing::warn!(error = %e, "Failed to persist notes");
        }
    }
}
