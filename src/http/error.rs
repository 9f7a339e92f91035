//! Error-to-status mapping for the task API.
//!
//! Three failure classes exist: validation errors (client fault, 400, never
//! reach the store), not-found (404), and store errors (500 with a generic
//! message; the underlying error is logged, never returned to the caller).

use super::dto::MessageResponse;
use crate::task::{
    domain::TaskDomainError, ports::TaskRepositoryError, services::TaskServiceError,
};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failure response carrying a status code and a human-readable message.
#[derive(Debug, Clone)]
pub struct ApiFailure {
    status: StatusCode,
    message: String,
}

impl ApiFailure {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Maps a malformed request body to a client-error response.
    #[must_use]
    pub fn invalid_json(rejection: &JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }

    /// Maps an unparsable path parameter to a client-error response.
    #[must_use]
    pub fn invalid_path(rejection: &PathRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }

    /// Maps a service error to a response per the failure taxonomy.
    ///
    /// `store_failure_message` is the generic message returned for store
    /// errors; the full error detail goes to the operational log only.
    #[must_use]
    pub fn from_service(err: &TaskServiceError, store_failure_message: &str) -> Self {
        match err {
            TaskServiceError::Domain(TaskDomainError::EmptyTitle) => {
                Self::new(StatusCode::BAD_REQUEST, "Title is required")
            }
            TaskServiceError::Domain(domain_err) => {
                Self::new(StatusCode::BAD_REQUEST, domain_err.to_string())
            }
            TaskServiceError::Repository(TaskRepositoryError::NotFound(_)) => {
                Self::new(StatusCode::NOT_FOUND, "Task not found")
            }
            TaskServiceError::Repository(repository_err) => {
                tracing::error!(error = %repository_err, "store operation failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, store_failure_message)
            }
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (self.status, Json(MessageResponse::new(self.message))).into_response()
    }
}
