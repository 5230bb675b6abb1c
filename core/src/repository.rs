//! The item store.
//!
//! [`TodoRepository`] is the store contract consumed by the HTTP layer.
//! [`InMemoryTodoRepository`] is the process-lifetime implementation: a map
//! guarded by a single `RwLock`, where every mutation is one critical
//! section with no await point inside it.
//!
//! # Outcomes
//!
//! | operation | success | other outcome |
//! |---|---|---|
//! | `list` | items, newest first | - |
//! | `create` | the new item | `Err(ValidationError)` |
//! | `create_titled` | the new item | - |
//! | `delete` | `true` | `false` when the id is unknown |
//! | `toggle_complete` | `Some(updated)` | `None` when the id is unknown |

use crate::environment::TodoEnvironment;
use crate::error::ValidationError;
use crate::types::{Title, TodoId, TodoItem};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Boxed future returned by [`TodoRepository`] methods.
pub type RepositoryFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Store contract for task items.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: a single instance is shared by
/// every in-flight request.
///
/// # Dyn Compatibility
///
/// Methods return boxed futures instead of using `async fn` so the store can
/// be held as `Arc<dyn TodoRepository>` in the web layer's state.
pub trait TodoRepository: Send + Sync {
    /// All live items ordered by creation time, most recent first.
    fn list(&self) -> RepositoryFuture<'_, Vec<TodoItem>>;

    /// Look up a single item.
    fn get(&self, id: TodoId) -> RepositoryFuture<'_, Option<TodoItem>>;

    /// Create an item from a raw, untrimmed title.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the trimmed title is empty or too
    /// long. The store is unchanged in that case.
    fn create(&self, title: String) -> RepositoryFuture<'_, Result<TodoItem, ValidationError>>;

    /// Create an item from a title that already passed [`Title::parse`].
    ///
    /// Callers that validated at their own boundary use this to avoid a
    /// second parse; `create` is the entry point for raw input.
    fn create_titled(&self, title: Title) -> RepositoryFuture<'_, TodoItem>;

    /// Remove an item. Returns whether anything was removed.
    fn delete(&self, id: TodoId) -> RepositoryFuture<'_, bool>;

    /// Flip an item's completion state.
    ///
    /// Returns the updated item, or `None` if no item has that id.
    fn toggle_complete(&self, id: TodoId) -> RepositoryFuture<'_, Option<TodoItem>>;

    /// Number of live items.
    fn len(&self) -> RepositoryFuture<'_, usize>;
}

/// A stored item with its insertion sequence number.
///
/// The sequence breaks ties between items created within the same clock
/// tick so listing order is stable.
#[derive(Clone, Debug)]
struct Entry {
    seq: u64,
    item: TodoItem,
}

/// Contents of the in-memory store.
#[derive(Debug, Default)]
struct TodoState {
    todos: HashMap<TodoId, Entry>,
    next_seq: u64,
}

impl TodoState {
    fn insert(&mut self, item: TodoItem) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.todos.insert(item.id.clone(), Entry { seq, item });
    }

    fn sorted(&self) -> Vec<TodoItem> {
        let mut entries: Vec<&Entry> = self.todos.values().collect();
        entries.sort_by(|a, b| {
            b.item
                .created_at
                .cmp(&a.item.created_at)
                .then_with(|| b.seq.cmp(&a.seq))
        });
        entries.into_iter().map(|entry| entry.item.clone()).collect()
    }
}

/// In-memory item store.
///
/// Cloning is cheap and shares the underlying collection.
#[derive(Clone, Debug)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<TodoState>>,
    env: TodoEnvironment,
}

impl InMemoryTodoRepository {
    /// Creates an empty store using the given environment.
    #[must_use]
    pub fn new(env: TodoEnvironment) -> Self {
        Self {
            state: Arc::new(RwLock::new(TodoState::default())),
            env,
        }
    }
}

impl TodoRepository for InMemoryTodoRepository {
    fn list(&self) -> RepositoryFuture<'_, Vec<TodoItem>> {
        Box::pin(async move { self.state.read().await.sorted() })
    }

    fn get(&self, id: TodoId) -> RepositoryFuture<'_, Option<TodoItem>> {
        Box::pin(async move {
            let state = self.state.read().await;
            state.todos.get(&id).map(|entry| entry.item.clone())
        })
    }

    fn create(&self, title: String) -> RepositoryFuture<'_, Result<TodoItem, ValidationError>> {
        Box::pin(async move {
            let title = Title::parse(&title).inspect_err(|error| {
                metrics::counter!("todo_validation_failures_total").increment(1);
                tracing::debug!(code = error.code(), "Rejected todo title");
            })?;

            Ok(self.create_titled(title).await)
        })
    }

    fn create_titled(&self, title: Title) -> RepositoryFuture<'_, TodoItem> {
        Box::pin(async move {
            let item = TodoItem::new(self.env.ids.next_id(), title, self.env.clock.now());

            self.state.write().await.insert(item.clone());

            metrics::counter!("todo_created_total").increment(1);
            tracing::debug!(id = %item.id, "Todo created");

            item
        })
    }

    fn delete(&self, id: TodoId) -> RepositoryFuture<'_, bool> {
        Box::pin(async move {
            let removed = self.state.write().await.todos.remove(&id).is_some();

            if removed {
                metrics::counter!("todo_deleted_total").increment(1);
                tracing::debug!(%id, "Todo deleted");
            }

            removed
        })
    }

    fn toggle_complete(&self, id: TodoId) -> RepositoryFuture<'_, Option<TodoItem>> {
        Box::pin(async move {
            // Read, flip, and write back under one exclusive guard so two
            // concurrent toggles on the same id cannot both observe the old state.
            let mut state = self.state.write().await;
            let entry = state.todos.get_mut(&id)?;
            entry.item.toggle(self.env.clock.now());
            let updated = entry.item.clone();
            drop(state);

            metrics::counter!("todo_toggled_total").increment(1);
            tracing::debug!(%id, completed = updated.completed, "Todo toggled");

            Some(updated)
        })
    }

    fn len(&self) -> RepositoryFuture<'_, usize> {
        Box::pin(async move { self.state.read().await.todos.len() })
    }
}
