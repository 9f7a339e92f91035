//! Axum handlers and router for the task API.

use super::dto::{CreateTaskBody, MessageResponse, TaskResponse};
use super::error::ApiFailure;
use crate::task::{
    domain::TaskId,
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskService},
};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

/// Shared application dependencies.
#[derive(Debug)]
pub struct AppState<R>
where
    R: TaskRepository,
{
    tasks: TaskService<R>,
}

impl<R> Clone for AppState<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
        }
    }
}

impl<R> AppState<R>
where
    R: TaskRepository,
{
    /// Creates application state around a task service.
    #[must_use]
    pub const fn new(tasks: TaskService<R>) -> Self {
        Self { tasks }
    }
}

/// Builds the task API router.
pub fn app<R>(state: AppState<R>) -> Router
where
    R: TaskRepository + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/api/tasks", get(list_tasks::<R>).post(create_task::<R>))
        .route("/api/tasks/:id/complete", put(complete_task::<R>))
        .with_state(state)
}

/// Plain-text liveness probe at the server root.
async fn root() -> &'static str {
    "Taskdeck backend API is running!"
}

/// Returns up to five incomplete tasks, most recently created first.
async fn list_tasks<R>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<TaskResponse>>, ApiFailure>
where
    R: TaskRepository,
{
    let tasks = state
        .tasks
        .list_recent()
        .await
        .map_err(|err| ApiFailure::from_service(&err, "Error fetching tasks"))?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// Creates a new task from the request body.
async fn create_task<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiFailure>
where
    R: TaskRepository,
{
    let Json(body) = payload.map_err(|rejection| ApiFailure::invalid_json(&rejection))?;

    let mut request = CreateTaskRequest::new(body.title.unwrap_or_default());
    if let Some(description) = body.description {
        request = request.with_description(description);
    }

    let task = state
        .tasks
        .create(request)
        .await
        .map_err(|err| ApiFailure::from_service(&err, "Error adding task"))?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

/// Marks the task identified by the request path as complete.
async fn complete_task<R>(
    State(state): State<AppState<R>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiFailure>
where
    R: TaskRepository,
{
    let Path(id) = path.map_err(|rejection| ApiFailure::invalid_path(&rejection))?;
    state
        .tasks
        .complete(TaskId::from_i32(id))
        .await
        .map_err(|err| ApiFailure::from_service(&err, "Error marking task complete"))?;
    Ok(Json(MessageResponse::new("Task marked as complete")))
}
