//! Orchestration services for the task module.

mod tasks;

pub use tasks::{CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult};
