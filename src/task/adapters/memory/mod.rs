//! In-memory adapters for task persistence tests.

mod task;

pub use task::InMemoryTaskRepository;
