//! Taskdeck: a task-tracking REST backend.
//!
//! This crate provides the task persistence and retrieval API: creating
//! tasks, listing the most recently created incomplete tasks, and marking
//! tasks complete over HTTP, backed by a single relational table.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task domain, persistence port, and adapters
//! - [`http`]: Axum handlers, router, and wire payloads
//! - [`config`]: Environment-sourced settings

pub mod config;
pub mod http;
pub mod task;
