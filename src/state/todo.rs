//! Todo List Manager
//!
//! Owns the ordered collection of todo items, mirrored to the store as one
//! JSON array under [`TODOS_KEY`].
//!
//! # Invariants
//!
//! - Ids are unique and strictly increasing in insertion order.
//! - List order is insertion order; removal never reorders survivors.
//! - Item text is never empty after trimming.

use crate::store::{KeyValueStore, StoreExt, TODOS_KEY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single todo entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Time-derived unique id (milliseconds since epoch, bumped on collision)
    pub id: i64,
    /// Trimmed, non-empty text
    pub text: String,
    /// Completion flag
    pub completed: bool,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Ordered todo collection with write-through persistence
pub struct TodoList {
    store: Arc<dyn KeyValueStore>,
    items: Vec<TodoItem>,
    /// Highest id issued or loaded so far
    last_id: i64,
}

impl TodoList {
    /// Load the list from the store, defaulting to empty
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let items: Vec<TodoItem> = store.get_json(TODOS_KEY).unwrap_or_default();
        let last_id = items.iter().map(|t| t.id).max().unwrap_or(0);

        tracing::debug!(count = items.len(), "Loaded todo list");

        Self {
            store,
            items,
            last_id,
        }
    }

    /// Append a new item.
    ///
    /// Returns `None` without touching the list when `text` is blank.
    pub fn add(&mut self, text: &str) -> Option<TodoItem> {
        self.add_at(text, Utc::now())
    }

    /// Append a new item created at `now`
    pub fn add_at(&mut self, text: &str, now: DateTime<Utc>) -> Option<TodoItem> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let item = TodoItem {
            id: self.next_id(now.timestamp_millis()),
            text: text.to_string(),
            completed: false,
            created_at: now,
        };

        self.items.push(item.clone());
        self.persist();

        tracing::debug!(id = item.id, "Added todo");
        Some(item)
    }

    /// Flip the completion flag of `id`.
    ///
    /// Returns the new flag, or `None` if no item has that id.
    pub fn toggle_completion(&mut self, id: i64) -> Option<bool> {
        let item = self.items.iter_mut().find(|t| t.id == id)?;
        item.completed = !item.completed;
        let completed = item.completed;

        self.persist();

        tracing::debug!(id, completed, "Toggled todo");
        Some(completed)
    }

    /// Remove the item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);

        if self.items.len() == before {
            return false;
        }

        self.persist();

        tracing::debug!(id, "Removed todo");
        true
    }

    /// All items in insertion order
    pub fn list(&self) -> &[TodoItem] {
        &self.items
    }

    /// Look up an item by id
    pub fn get(&self, id: i64) -> Option<&TodoItem> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of completed items
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }

    /// Wall-clock id, bumped past the last issued id so that two adds in
    /// the same millisecond still get distinct, ordered ids
    fn next_id(&mut self, now_ms: i64) -> i64 {
        let floor = match self.last_id.checked_add(1) {
            Some(floor) => floor,
            None => {
                self.renumber();
                self.last_id + 1
            }
        };

        let id = now_ms.max(floor);
        self.last_id = id;
        id
    }

    /// Reassign ids `1..=n` in list order. Only reached when a stored id
    /// leaves no room above it.
    fn renumber(&mut self) {
        tracing::warn!(count = self.items.len(), "Todo ids exhausted, renumbering list");
        for (index, item) in self.items.iter_mut().enumerate() {
            item.id = index as i64 + 1;
        }
        self.last_id = self.items.len() as i64;
    }

    fn persist(&self) {
        if let Err(e) = self.store.set_json(TODOS_KEY, &self.items) {
            tracing::warn!(error = %e, "Failed to persist todo list");
        }
    }
}
