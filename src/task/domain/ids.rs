//! Identifier types for the task domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a task.
///
/// Task identifiers are assigned by the store at insertion time and increase
/// monotonically in creation order, so they double as a creation-order proxy
/// when listing tasks. Identifiers are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i32);

impl TaskId {
    /// Creates a task identifier from a store-assigned integer.
    #[must_use]
    pub const fn from_i32(value: i32) -> Self {
        Self(value)
    }

    /// Returns the wrapped integer.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl AsRef<i32> for TaskId {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
