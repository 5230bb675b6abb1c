//! Validation errors raised when creating an item.

use crate::types::MAX_TITLE_LENGTH;
use thiserror::Error;

/// Reasons a raw title is rejected.
///
/// These are the only failures the item store reports as errors. Unknown
/// ids are not errors: they surface as `None` or `false` from the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The title is empty or whitespace-only after trimming.
    #[error("Title cannot be empty or only whitespace")]
    EmptyTitle,

    /// The trimmed title is longer than the maximum.
    #[error("Title cannot exceed {MAX_TITLE_LENGTH} characters")]
    TitleTooLong {
        /// Length of the trimmed title, in characters.
        length: usize,
    },
}

impl ValidationError {
    /// Stable machine-readable code for the failed rule.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "TITLE_EMPTY",
            Self::TitleTooLong { .. } => "TITLE_TOO_LONG",
        }
    }
}
