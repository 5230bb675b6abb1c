//! Domain types for task items.
//!
//! A task item is created from a validated [`Title`], flipped between
//! open and completed by toggling, and removed by deletion. Nothing else
//! mutates it.

use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Maximum title length, in characters, after trimming.
pub const MAX_TITLE_LENGTH: usize = 500;

/// Unique identifier for a todo item
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A trimmed, non-empty title of at most [`MAX_TITLE_LENGTH`] characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    /// Trims `raw` and checks the title rules.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyTitle`] if nothing but whitespace remains
    /// - [`ValidationError::TitleTooLong`] if the trimmed title exceeds the limit
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let length = trimmed.chars().count();
        if length > MAX_TITLE_LENGTH {
            return Err(ValidationError::TitleTooLong { length });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the title text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the title text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single todo item
///
/// Serialized with camelCase field names; `completedAt` is omitted while the
/// item is open.
///
/// This is a snapshot type. Items handed out by the store are trimmed and keep
/// `completed_at` set exactly while `completed` is true; values built by hand
/// or deserialized from elsewhere carry no such guarantee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Title of the todo, already trimmed
    pub title: String,
    /// When the todo was created
    pub created_at: DateTime<Utc>,
    /// Whether the todo is completed
    pub completed: bool,
    /// When the todo was completed (present only while completed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl TodoItem {
    /// Creates a new, open todo item
    #[must_use]
    pub fn new(id: TodoId, title: Title, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into_inner(),
            created_at,
            completed: false,
            completed_at: None,
        }
    }

    /// Flips the completion flag.
    ///
    /// Completing stamps `completed_at` with `now`; reopening clears it.
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        self.completed = !self.completed;
        self.completed_at = self.completed.then_some(now);
    }
}
