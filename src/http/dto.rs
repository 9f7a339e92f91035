//! Wire payload records for the task API.

use crate::task::domain::Task;
use serde::{Deserialize, Serialize};

/// Task representation returned to clients.
///
/// The creation timestamp is persisted but never serialized on the wire;
/// listing order already encodes recency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Store-assigned task identifier.
    pub id: i32,
    /// Task title.
    pub title: String,
    /// Optional task description, serialized as `null` when absent.
    pub description: Option<String>,
    /// Completion flag.
    pub is_completed: bool,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(ToOwned::to_owned),
            is_completed: task.is_completed(),
        }
    }
}

/// Request body for creating a task.
///
/// The title is optional at the wire level so that a body without one still
/// reaches title validation and yields the documented message instead of a
/// deserialization rejection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskBody {
    /// Task title; required and non-blank after trimming.
    pub title: Option<String>,
    /// Optional task description.
    pub description: Option<String>,
}

/// Confirmation or failure message envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message envelope.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
