//! Service layer for task creation, listing, and completion.
//!
//! Provides [`TaskService`] which owns input validation and coordinates the
//! repository port. Each operation issues a single store call; the service
//! holds no task state across requests.

use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Number of tasks returned by the recent-incomplete listing.
const RECENT_TASK_LIMIT: i64 = 5;

/// Request payload for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    ///
    /// Title validation happens in [`TaskService::create`], not here, so a
    /// blank title still produces a well-formed request that fails with a
    /// validation error before any store access.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the optional task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task creation, listing, and completion orchestration service.
#[derive(Debug)]
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new task with a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the title is missing or
    /// whitespace-only (the store is never reached), or
    /// [`TaskServiceError::Repository`] when the insert fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let CreateTaskRequest { title, description } = request;
        let new_task = NewTask::new(title, description)?;
        Ok(self.repository.insert(&new_task).await?)
    }

    /// Returns up to five incomplete tasks, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the query fails.
    pub async fn list_recent(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self
            .repository
            .list_recent_incomplete(RECENT_TASK_LIMIT)
            .await?)
    }

    /// Marks the task with the given identifier as complete.
    ///
    /// The underlying update is idempotent: completing an already-completed
    /// task succeeds again.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when no task has the given
    /// identifier or the update fails.
    pub async fn complete(&self, id: TaskId) -> TaskServiceResult<()> {
        Ok(self.repository.mark_complete(id).await?)
    }
}
