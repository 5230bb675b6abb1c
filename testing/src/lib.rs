//! # Todo Testing
//!
//! Testing utilities for the todo service.
//!
//! This crate provides:
//! - Deterministic implementations of the environment traits
//! - Ready-made test environments
//! - Property-based testing strategies for titles
//!
//! ## Example
//!
//! ```
//! use todo_core::repository::{InMemoryTodoRepository, TodoRepository};
//! use todo_testing::helpers::test_environment;
//!
//! # async fn example() {
//! let repository = InMemoryTodoRepository::new(test_environment());
//! let item = repository.create("Buy milk".to_string()).await;
//! assert!(item.is_ok());
//! # }
//! ```

use chrono::{DateTime, Duration, Utc};
use todo_core::environment::{Clock, IdGenerator};
use todo_core::types::TodoId;

/// Mock implementations of the environment traits.
pub mod mocks {
    use super::{Clock, DateTime, Duration, IdGenerator, TodoId, Utc};
    use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
    use uuid::Uuid;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use todo_testing::mocks::FixedClock;
    /// use todo_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Clock that moves forward by a fixed step on every read.
    ///
    /// The first call returns `start`, the next `start + step`, and so on.
    #[derive(Debug)]
    pub struct SteppingClock {
        start: DateTime<Utc>,
        step_millis: i64,
        ticks: AtomicI64,
    }

    impl SteppingClock {
        /// Create a clock starting at `start` that advances by `step` per read.
        #[must_use]
        pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
            Self {
                start,
                step_millis: step.num_milliseconds(),
                ticks: AtomicI64::new(0),
            }
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
            self.start + Duration::milliseconds(self.step_millis * tick)
        }
    }

    /// Id generator yielding `00000000-0000-0000-0000-000000000001`, `...02`, ...
    #[derive(Debug)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id is 1.
        #[must_use]
        pub const fn new() -> Self {
            Self {
                next: AtomicU64::new(1),
            }
        }
    }

    impl Default for SequentialIdGenerator {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> TodoId {
            let n = self.next.fetch_add(1, Ordering::SeqCst);
            TodoId::from_uuid(Uuid::from_u128(u128::from(n)))
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(epoch())
    }

    /// 2025-01-01 00:00:00 UTC
    ///
    /// # Panics
    ///
    /// Never in practice; the timestamp is a literal.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn epoch() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .expect("hardcoded timestamp should always parse")
            .with_timezone(&Utc)
    }
}

/// Ready-made environments.
pub mod helpers {
    use super::mocks::{SequentialIdGenerator, SteppingClock, epoch, test_clock};
    use chrono::Duration;
    use std::sync::Arc;
    use todo_core::environment::TodoEnvironment;

    /// Fixed clock and sequential ids: every item shares one timestamp.
    #[must_use]
    pub fn test_environment() -> TodoEnvironment {
        TodoEnvironment::new(
            Arc::new(test_clock()),
            Arc::new(SequentialIdGenerator::new()),
        )
    }

    /// Clock advancing one second per read and sequential ids, so each
    /// created item is strictly newer than the previous one.
    #[must_use]
    pub fn stepping_environment() -> TodoEnvironment {
        TodoEnvironment::new(
            Arc::new(SteppingClock::new(epoch(), Duration::seconds(1))),
            Arc::new(SequentialIdGenerator::new()),
        )
    }
}

/// Property-based testing strategies using proptest.
pub mod properties {
    use proptest::prelude::*;
    use todo_core::types::MAX_TITLE_LENGTH;

    /// Titles that pass validation unchanged: no surrounding whitespace,
    /// 1 to 60 characters.
    pub fn valid_title() -> impl Strategy<Value = String> {
        "[A-Za-z0-9][A-Za-z0-9 .,!?-]{0,58}[A-Za-z0-9]|[A-Za-z0-9]"
    }

    /// Valid titles wrapped in spaces, tabs, and newlines.
    pub fn padded_title() -> impl Strategy<Value = (String, String)> {
        ("[ \t\n]{0,5}", valid_title(), "[ \t\n]{0,5}")
            .prop_map(|(lead, core, tail)| (format!("{lead}{core}{tail}"), core))
    }

    /// Strings made only of whitespace, including the empty string.
    pub fn blank_title() -> impl Strategy<Value = String> {
        "[ \t\r\n]{0,20}"
    }

    /// Titles longer than the limit after trimming.
    pub fn oversized_title() -> impl Strategy<Value = String> {
        (MAX_TITLE_LENGTH + 1..MAX_TITLE_LENGTH + 50).prop_map(|len| "x".repeat(len))
    }
}

// Re-export commonly used items
pub use helpers::{stepping_environment, test_environment};
pub use mocks::{FixedClock, SequentialIdGenerator, SteppingClock, test_clock};
