//! Persistent Store
//!
//! Key/value abstraction over durable user-local storage. Values are raw
//! strings; callers decide whether a key holds JSON or plain text.
//!
//! - **memory**: `MemoryStore`, a process-local map
//! - **file**: `FileStore`, a single JSON document in the data directory
//! - **error**: Error types
//!
//! # Contract
//!
//! ```text
//! get(key) -> Option<String>   absent when never set or unreadable
//! set(key, value) -> Result    write-through, no batching
//! ```
//!
//! Reads never fail. A value that cannot be parsed by a typed reader is
//! treated exactly like a missing value (see [`StoreExt::get_json`]).

pub mod error;
pub mod file;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;

use serde::{de::DeserializeOwned, Serialize};

/// Key holding the todo list as a JSON array
pub const TODOS_KEY: &str = "todos";
/// Key holding the notes blob as a raw string
pub const NOTES_KEY: &str = "notes";
/// Key holding the user profile as a JSON object
pub const PROFILE_KEY: &str = "userProfile";
/// Key holding the theme preference as a raw string
pub const THEME_KEY: &str = "theme";

/// Durable string-keyed storage
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value for `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Write the raw value for `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// Typed helpers layered over any [`KeyValueStore`]
pub trait StoreExt: KeyValueStore {
    /// Read and decode a JSON value.
    ///
    /// Corrupt values are logged and reported as absent so that callers fall
    /// back to their defaults instead of failing at startup.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Ignoring corrupt stored value");
                None
            }
        }
    }

    /// Encode a value as JSON and write it
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> StoreExt for S {}
