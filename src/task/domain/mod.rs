//! Domain model for task tracking.
//!
//! The task domain models a single shared task list: titled units of work
//! with an optional description and a one-way completion flag. All
//! infrastructure concerns are kept outside the domain boundary.

mod error;
mod ids;
mod task;
mod title;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{NewTask, PersistedTaskData, Task};
pub use title::TaskTitle;
