//! Unit tests for task service orchestration.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskDomainError, TaskId},
    ports::TaskRepositoryError,
    services::{CreateTaskRequest, TaskService, TaskServiceError},
};
use rstest::{fixture, rstest};

type TestService = TaskService<InMemoryTaskRepository>;

#[fixture]
fn service() -> TestService {
    TaskService::new(Arc::new(InMemoryTaskRepository::new()))
}

async fn create_task(service: &TestService, title: &str) -> Result<Task, TaskServiceError> {
    service.create(CreateTaskRequest::new(title)).await
}

async fn create_tasks(service: &TestService, titles: &[&str]) -> Result<(), TaskServiceError> {
    for title in titles {
        create_task(service, title).await?;
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_starts_incomplete_with_assigned_id(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Buy milk").with_description("Semi-skimmed"))
        .await
        .expect("creation should succeed");

    assert_eq!(created.id(), TaskId::from_i32(1));
    assert_eq!(created.title().as_str(), "Buy milk");
    assert_eq!(created.description(), Some("Semi-skimmed"));
    assert!(!created.is_completed());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_list_returns_created_task_first(service: TestService) {
    create_tasks(&service, &["first", "second"])
        .await
        .expect("setup should succeed");

    let created = create_task(&service, "newest").await.expect("creation should succeed");
    let listed = service.list_recent().await.expect("listing should succeed");

    assert_eq!(
        listed.first().map(Task::id),
        Some(created.id()),
        "most recently created task should come first"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_never_exceeds_five_and_orders_newest_first(service: TestService) {
    create_tasks(&service, &["t1", "t2", "t3", "t4", "t5", "t6", "t7"])
        .await
        .expect("setup should succeed");

    let listed = service.list_recent().await.expect("listing should succeed");

    assert_eq!(listed.len(), 5);
    let titles: Vec<&str> = listed.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(titles, ["t7", "t6", "t5", "t4", "t3"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_tasks_are_excluded_from_listing(service: TestService) {
    let created = create_task(&service, "Buy milk").await.expect("creation should succeed");

    service
        .complete(created.id())
        .await
        .expect("completion should succeed");

    let listed = service.list_recent().await.expect("listing should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_title_is_rejected_before_the_store(service: TestService) {
    let result = service.create(CreateTaskRequest::new("   ")).await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Domain(TaskDomainError::EmptyTitle))
    ));

    let listed = service.list_recent().await.expect("listing should succeed");
    assert!(listed.is_empty(), "validation failure must not create a row");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_unknown_id_reports_not_found(service: TestService) {
    let created = create_task(&service, "only task").await.expect("creation should succeed");
    let missing = TaskId::from_i32(created.id().into_inner() + 1);

    let result = service.complete(missing).await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Repository(TaskRepositoryError::NotFound(
            id
        ))) if id == missing
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_twice_is_idempotent_success(service: TestService) {
    let created = create_task(&service, "Buy milk").await.expect("creation should succeed");

    service
        .complete(created.id())
        .await
        .expect("first completion should succeed");
    service
        .complete(created.id())
        .await
        .expect("second completion should also succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identifiers_increase_in_creation_order(service: TestService) {
    let first = create_task(&service, "first").await.expect("creation should succeed");
    let second = create_task(&service, "second").await.expect("creation should succeed");

    assert!(second.id() > first.id());
}
