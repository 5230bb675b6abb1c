//! Client-side views over a fetched list.
//!
//! The service returns items newest first; these helpers filter without
//! reordering.

use todo_core::TodoItem;

/// Which items a view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoFilter {
    /// Every item
    #[default]
    All,
    /// Items not yet completed
    Active,
    /// Completed items
    Completed,
}

impl TodoFilter {
    /// Whether `item` belongs in this view.
    #[must_use]
    pub const fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }

    /// Items that belong in this view, in their original order.
    #[must_use]
    pub fn apply(self, items: &[TodoItem]) -> Vec<&TodoItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// A fetched list with counts for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    /// Wrap items as returned by the service.
    #[must_use]
    pub const fn new(items: Vec<TodoItem>) -> Self {
        Self { items }
    }

    /// All items in service order.
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Items not yet completed.
    #[must_use]
    pub fn pending(&self) -> Vec<&TodoItem> {
        TodoFilter::Active.apply(&self.items)
    }

    /// Completed items.
    #[must_use]
    pub fn completed(&self) -> Vec<&TodoItem> {
        TodoFilter::Completed.apply(&self.items)
    }

    /// Total number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<TodoItem>> for TodoList {
    fn from(items: Vec<TodoItem>) -> Self {
        Self::new(items)
    }
}
