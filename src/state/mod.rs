//! Dashboard State
//!
//! The persisted widgets of the dashboard. Each manager owns one entity,
//! loads it once from the store (read-through) and writes it back on every
//! mutation (write-through):
//!
//! - **todo**: ordered todo list under `todos`
//! - **notes**: free-text notes under `notes`
//! - **profile**: user name and location under `userProfile`
//! - **theme**: light/dark preference under `theme`
//!
//! Write failures are logged and never surface to the caller; the in-memory
//! state stays authoritative for the rest of the session.

pub mod notes;
pub mod profile;
pub mod theme;
pub mod todo;

pub use notes::NotesPad;
pub use profile::{ProfileManager, UserProfile};
pub use theme::{Theme, ThemeAttributes, ThemeManager};
pub use todo::{TodoItem, TodoList};
