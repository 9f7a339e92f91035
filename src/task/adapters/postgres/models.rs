//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i32,
    /// Task title.
    pub title: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Completion flag.
    pub is_completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
///
/// The identifier, completion flag, and creation timestamp are assigned by
/// the store through column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Optional task description, stored as SQL NULL when absent.
    pub description: Option<String>,
}
