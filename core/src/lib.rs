//! # Todo Core
//!
//! Task item model and the in-memory item store.
//!
//! This crate owns the item lifecycle: how a task record is created,
//! validated, toggled, ordered, and removed. It knows nothing about HTTP;
//! the web crate translates requests into [`TodoRepository`] calls.
//!
//! ## Core Concepts
//!
//! - **`TodoItem`**: The sole entity (id, title, timestamps, completion flag)
//! - **`Title`**: A validated, trimmed title (1-500 characters)
//! - **`TodoRepository`**: The store contract (list, create, delete, toggle)
//! - **Environment**: Injected clock and id generator
//!
//! ## Example
//!
//! ```no_run
//! use todo_core::environment::TodoEnvironment;
//! use todo_core::repository::{InMemoryTodoRepository, TodoRepository};
//!
//! # async fn example() -> Result<(), todo_core::ValidationError> {
//! let repository = InMemoryTodoRepository::new(TodoEnvironment::production());
//!
//! let item = repository.create("  Buy milk ".to_string()).await?;
//! assert_eq!(item.title, "Buy milk");
//!
//! let toggled = repository.toggle_complete(item.id.clone()).await;
//! assert!(toggled.is_some_and(|t| t.completed));
//!
//! assert!(repository.delete(item.id).await);
//! # Ok(())
//! # }
//! ```

pub mod environment;
pub mod error;
pub mod repository;
pub mod types;

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use environment::{Clock, IdGenerator, SystemClock, TodoEnvironment, UuidGenerator};
pub use error::ValidationError;
pub use repository::{InMemoryTodoRepository, TodoRepository};
pub use types::{MAX_TITLE_LENGTH, Title, TodoId, TodoItem};
