//! `PostgreSQL` repository implementation for task persistence.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use std::time::Duration;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Maximum number of concurrent store connections.
const POOL_MAX_CONNECTIONS: u32 = 10;

/// Upper bound on the wait for a free connection before the request fails.
const POOL_WAIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Idempotent schema definition applied once at process startup.
const CREATE_TASKS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS tasks (
    id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    description TEXT,
    is_completed BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

/// Builds the bounded store connection pool.
///
/// The pool is the only backpressure mechanism in the system: a request that
/// cannot obtain a connection within the wait bound fails as a store error.
///
/// # Errors
///
/// Returns [`PoolError`] when the pool cannot be constructed.
pub fn build_pool(database_url: &str) -> Result<TaskPgPool, PoolError> {
    Pool::builder()
        .max_size(POOL_MAX_CONNECTIONS)
        .connection_timeout(POOL_WAIT_TIMEOUT)
        .build(ConnectionManager::new(database_url))
}

/// Creates the tasks table if it does not exist.
///
/// This is a blocking call intended to run once during process
/// initialization, separate from request handling. It carries no schema
/// versioning; re-running it is a no-op.
///
/// # Errors
///
/// Returns [`TaskRepositoryError::Persistence`] when the connection or the
/// statement fails.
pub fn ensure_schema(pool: &TaskPgPool) -> TaskRepositoryResult<()> {
    let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
    diesel::sql_query(CREATE_TASKS_TABLE)
        .execute(&mut connection)
        .map_err(TaskRepositoryError::persistence)?;
    Ok(())
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, new_task: &NewTask) -> TaskRepositoryResult<Task> {
        let new_row = NewTaskRow {
            title: new_task.title().as_str().to_owned(),
            description: new_task.description().map(ToOwned::to_owned),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn list_recent_incomplete(&self, limit: i64) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::is_completed.eq(false))
                .order(tasks::id.desc())
                .limit(limit)
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn mark_complete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let updated_count =
                diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                    .set(tasks::is_completed.eq(true))
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        is_completed,
        created_at,
    } = row;

    let parsed_title =
        TaskTitle::new(title).map_err(TaskRepositoryError::invalid_persisted_data)?;

    let data = PersistedTaskData {
        id: TaskId::from_i32(id),
        title: parsed_title,
        description,
        is_completed,
        created_at,
    };
    Ok(Task::from_persisted(data))
}
