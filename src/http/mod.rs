//! HTTP surface for the task API.
//!
//! Translates between wire payloads and the task service: typed request and
//! response records in [`dto`], the error-to-status mapping in [`error`], and
//! the axum handlers and router in [`handlers`]. Handlers are generic over
//! the repository so tests can drive the full surface against the in-memory
//! adapter.

pub mod dto;
pub mod error;
pub mod handlers;

pub use handlers::{AppState, app};
