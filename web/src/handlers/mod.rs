//! HTTP request handlers.
//!
//! This module contains all HTTP handlers organized by domain.

pub mod health;
pub mod todo;

// Re-export common handler utilities
pub use health::{health_check, readiness_check};
pub use todo::{TODO_BASE_PATH, create_todo, delete_todo, list_todos, toggle_todo};
