//! Unit tests for task domain types.

use crate::task::domain::{NewTask, PersistedTaskData, Task, TaskDomainError, TaskId, TaskTitle};
use chrono::Utc;
use rstest::rstest;

// ── TaskTitle validation ───────────────────────────────────────────

#[rstest]
#[case("Buy milk")]
#[case("a")]
#[case("Fix the leaking tap in the kitchen")]
fn valid_titles_are_accepted(#[case] input: &str) {
    let title = TaskTitle::new(input);
    assert!(title.is_ok(), "expected '{input}' to be valid");
    assert_eq!(title.expect("valid title").as_str(), input);
}

#[rstest]
fn title_is_trimmed() {
    let title = TaskTitle::new("  Buy milk  ").expect("should accept after trim");
    assert_eq!(title.as_str(), "Buy milk");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn empty_or_whitespace_title_is_rejected(#[case] input: &str) {
    let result = TaskTitle::new(input);
    assert!(matches!(result, Err(TaskDomainError::EmptyTitle)));
}

#[rstest]
#[case("a", 255, true)]
#[case("a", 256, false)]
#[case("é", 255, true)]
#[case("é", 256, false)]
fn title_length_boundary(#[case] fill: &str, #[case] length: usize, #[case] expected_ok: bool) {
    let title = fill.repeat(length);
    let result = TaskTitle::new(&title);
    if expected_ok {
        assert!(result.is_ok(), "expected length {length} to be accepted");
    } else {
        assert!(
            matches!(result, Err(TaskDomainError::TitleTooLong(_))),
            "expected length {length} to be rejected"
        );
    }
}

// ── NewTask construction ───────────────────────────────────────────

#[rstest]
fn new_task_carries_title_and_description() {
    let new_task =
        NewTask::new("Buy milk", Some("Semi-skimmed".to_owned())).expect("valid payload");

    assert_eq!(new_task.title().as_str(), "Buy milk");
    assert_eq!(new_task.description(), Some("Semi-skimmed"));
}

#[rstest]
fn new_task_without_description_stays_absent() {
    let new_task = NewTask::new("Buy milk", None).expect("valid payload");

    assert!(new_task.description().is_none());
}

#[rstest]
fn new_task_with_blank_title_is_rejected() {
    let result = NewTask::new("   ", Some("description without title".to_owned()));

    assert!(matches!(result, Err(TaskDomainError::EmptyTitle)));
}

// ── Task reconstruction ────────────────────────────────────────────

#[rstest]
fn task_from_persisted_exposes_all_fields() {
    let created_at = Utc::now();
    let task = Task::from_persisted(PersistedTaskData {
        id: TaskId::from_i32(7),
        title: TaskTitle::new("Buy milk").expect("valid title"),
        description: None,
        is_completed: false,
        created_at,
    });

    assert_eq!(task.id(), TaskId::from_i32(7));
    assert_eq!(task.title().as_str(), "Buy milk");
    assert!(task.description().is_none());
    assert!(!task.is_completed());
    assert_eq!(task.created_at(), created_at);
}

#[rstest]
fn task_id_display_matches_inner_value() {
    assert_eq!(TaskId::from_i32(42).to_string(), "42");
    assert_eq!(TaskId::from_i32(42).into_inner(), 42);
}
