//! In-memory repository for task persistence tests.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Mirrors the store semantics of the `PostgreSQL` adapter: identifiers are
/// assigned monotonically in insertion order and never reused, `created_at`
/// is stamped at insertion, and the complete operation filters on the
/// identifier alone so re-completing a task succeeds again.
#[derive(Debug)]
pub struct InMemoryTaskRepository<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<C>,
}

impl<C> Clone for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    next_id: i32,
}

impl InMemoryTaskRepository<DefaultClock> {
    /// Creates an empty in-memory repository using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskRepository<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty in-memory repository with the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
            clock,
        }
    }
}

#[async_trait]
impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn insert(&self, new_task: &NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        state.next_id += 1;
        let id = TaskId::from_i32(state.next_id);
        let task = Task::from_persisted(PersistedTaskData {
            id,
            title: new_task.title().clone(),
            description: new_task.description().map(ToOwned::to_owned),
            is_completed: false,
            created_at: self.clock.utc(),
        });
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn list_recent_incomplete(&self, limit: i64) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let window = usize::try_from(limit).unwrap_or_default();
        let recent = state
            .tasks
            .values()
            .rev()
            .filter(|task| !task.is_completed())
            .take(window)
            .cloned()
            .collect();
        Ok(recent)
    }

    async fn mark_complete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let task = state
            .tasks
            .get(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;

        let completed = Task::from_persisted(PersistedTaskData {
            id: task.id(),
            title: task.title().clone(),
            description: task.description().map(ToOwned::to_owned),
            is_completed: true,
            created_at: task.created_at(),
        });
        state.tasks.insert(id, completed);
        Ok(())
    }
}
