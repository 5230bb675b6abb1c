//! Environment traits for dependency injection.
//!
//! The item store never reads the system clock or generates identifiers
//! directly. Both are injected through [`TodoEnvironment`] so tests can pin
//! time and ids while production uses [`SystemClock`] and [`UuidGenerator`].

use crate::types::TodoId;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Clock trait - abstracts time operations for testability
///
/// # Examples
///
/// ```
/// use todo_core::environment::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let earlier = clock.now();
/// assert!(clock.now() >= earlier);
/// ```
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of fresh item identifiers.
///
/// Implementations must never hand out the same id twice for the lifetime
/// of the process, including ids of items that were since deleted.
pub trait IdGenerator: Send + Sync {
    /// Produce the next identifier.
    fn next_id(&self) -> TodoId;
}

/// Random v4 UUID generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> TodoId {
        TodoId::from_uuid(Uuid::new_v4())
    }
}

/// Environment dependencies for the item store
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for generating timestamps
    pub clock: Arc<dyn Clock>,
    /// Generator for new item ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// Environment backed by the system clock and random UUIDs.
    #[must_use]
    pub fn production() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(UuidGenerator))
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_generator_produces_distinct_ids() {
        let ids = UuidGenerator;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
