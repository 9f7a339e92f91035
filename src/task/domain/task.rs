//! Task aggregate root and creation payload.

use super::{TaskDomainError, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated payload for creating a task.
///
/// A [`NewTask`] carries everything the caller supplies at creation time.
/// The store assigns the identifier, the creation timestamp, and the initial
/// `is_completed = false` flag when the payload is inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    description: Option<String>,
}

impl NewTask {
    /// Creates a validated task creation payload.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the title fails validation. A missing
    /// or whitespace-only title is rejected here, before any store access.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, TaskDomainError> {
        let title = TaskTitle::new(title)?;
        Ok(Self { title, description })
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the optional task description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Task aggregate root.
///
/// Tasks are reconstructed from persisted rows; the store is the sole source
/// of truth and the service holds no cached copy across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    is_completed: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task title.
    pub title: TaskTitle,
    /// Persisted optional description.
    pub description: Option<String>,
    /// Persisted completion flag.
    pub is_completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            is_completed: data.is_completed,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the optional task description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether the task has been completed.
    ///
    /// Completion is a one-way latch: the flag transitions false to true
    /// exactly once via the complete operation and never reverts.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
