//! Repository port for task persistence and retrieval.

use crate::task::domain::{NewTask, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Each operation is a single atomic store mutation or query; there are no
/// transactions spanning multiple operations and no partial-completion
/// semantics.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Durably persists a new task and returns the stored representation.
    ///
    /// The store assigns the identifier, the creation timestamp, and the
    /// initial `is_completed = false` flag.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the insert fails.
    async fn insert(&self, new_task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Returns up to `limit` incomplete tasks, most recently created first.
    ///
    /// Ordering uses the identifier as a monotonic proxy for creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the query fails.
    async fn list_recent_incomplete(&self, limit: i64) -> TaskRepositoryResult<Vec<Task>>;

    /// Sets `is_completed = true` on the task with the given identifier.
    ///
    /// The update filters on the identifier alone, so completing an
    /// already-completed task succeeds again (idempotent success).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no row matches the
    /// identifier, or [`TaskRepositoryError::Persistence`] when the update
    /// fails.
    async fn mark_complete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
