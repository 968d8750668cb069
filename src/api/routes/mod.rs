//! API Routes
//!
//! Route handlers organized by widget.

pub mod health;
pub mod notes;
pub mod panels;
pub mod profile;
pub mod theme;
pub mod todos;
pub mod widgets;
