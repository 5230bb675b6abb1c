//! Application state for Axum handlers.

use std::sync::Arc;
use todo_core::TodoRepository;

/// Application state shared across all HTTP handlers.
///
/// Holds the one item store constructed at process start. Cloning shares
/// the same store.
///
/// # Examples
///
/// ```
/// use todo_core::{InMemoryTodoRepository, TodoEnvironment};
/// use todo_web::AppState;
///
/// let state = AppState::new(InMemoryTodoRepository::new(TodoEnvironment::production()));
/// let shared = state.clone();
/// ```
#[derive(Clone)]
pub struct AppState {
    /// The item store.
    pub repository: Arc<dyn TodoRepository>,
}

impl AppState {
    /// Create application state around a store.
    #[must_use]
    pub fn new(repository: impl TodoRepository + 'static) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create application state around an already shared store.
    #[must_use]
    pub fn from_shared(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::InMemoryTodoRepository;
    use todo_testing::test_environment;

    #[test]
    fn test_state_is_clone() {
        // Ensure AppState implements Clone (required for Axum)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn clones_share_one_store() {
        let state = AppState::new(InMemoryTodoRepository::new(test_environment()));
        let clone = state.clone();

        let created = state.repository.create("shared".to_string()).await;
        assert!(created.is_ok());
        assert_eq!(clone.repository.len().await, 1);
    }
}
