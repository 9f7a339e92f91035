//! Persistence adapters for the task module.
//!
//! Concrete implementations of the [`TaskRepository`] port. Adapters handle
//! all infrastructure concerns while the domain remains pure.
//!
//! - [`memory::InMemoryTaskRepository`]: thread-safe in-memory storage for
//!   unit testing
//! - [`postgres::PostgresTaskRepository`]: production `PostgreSQL`
//!   persistence using Diesel ORM
//!
//! [`TaskRepository`]: crate::task::ports::TaskRepository

pub mod memory;
pub mod postgres;
