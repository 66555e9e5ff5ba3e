// Rust guideline compliant 2026-02-09

//! Integration tests for the task service.

use tandem_app::{AppError, ErrorCode, ListOptions, NewTask, TaskPatch, TaskService};
use tandem_core::{Config, Error as CoreError, SelfTransitionPolicy, TaskStatus};

fn service() -> TaskService {
    TaskService::in_memory(Config::default())
}

fn sample_task() -> NewTask {
    NewTask {
        title: "Test Task".to_string(),
        description: Some("Test Description".to_string()),
        status: None,
    }
}

#[test]
fn test_create_task() {
    let mut service = service();
    let task = service.create_task(sample_task()).expect("create");

    assert_eq!(task.title, "Test Task");
    assert_eq!(task.description.as_deref(), Some("Test Description"));
    assert_eq!(task.status, TaskStatus::Created);
    assert!(task.id.starts_with("tsk-"));
}

#[test]
fn test_create_task_with_initial_status() {
    let mut service = service();
    let task = service
        .create_task(NewTask {
            status: Some(TaskStatus::InProgress),
            ..sample_task()
        })
        .expect("create");
    assert_eq!(task.status, TaskStatus::InProgress);
}

#[test]
fn test_identical_titles_get_distinct_ids() {
    let mut service = service();
    let first = service.create_task(sample_task()).expect("first");
    let second = service.create_task(sample_task()).expect("second");
    assert_ne!(first.id, second.id);
}

#[test]
fn test_create_rejects_empty_title() {
    let mut service = service();
    let error = service.create_task(NewTask::titled("")).unwrap_err();
    assert_eq!(error.code(), ErrorCode::ValidationError);
    assert_eq!(error.http_status(), 422);
}

#[test]
fn test_create_rejects_long_title() {
    let mut service = service();
    assert!(service.create_task(NewTask::titled("x".repeat(255))).is_ok());
    let error = service.create_task(NewTask::titled("x".repeat(256))).unwrap_err();
    assert_eq!(error.http_status(), 422);
}

#[test]
fn test_get_task_by_full_and_partial_id() {
    let mut service = service();
    let task = service.create_task(sample_task()).expect("create");

    assert_eq!(service.get_task(&task.id).expect("full"), task);
    assert_eq!(service.get_task(&task.id[4..8]).expect("partial"), task);
}

#[test]
fn test_get_nonexistent_task() {
    let service = service();
    let error = service.get_task("tsk-000000").unwrap_err();
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.http_status(), 404);
}

#[test]
fn test_list_tasks() {
    let mut service = service();
    for i in 0..3 {
        service
            .create_task(NewTask::titled(format!("Task {i}")))
            .expect("create");
    }

    let tasks = service.list_tasks(&ListOptions::default());
    let titles: Vec<_> = tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Task 0", "Task 1", "Task 2"]);
}

#[test]
fn test_list_tasks_uses_configured_page_size() {
    let config = Config {
        default_page_limit: 2,
        ..Config::default()
    };
    let mut service = TaskService::in_memory(config);
    for i in 0..5 {
        service
            .create_task(NewTask::titled(format!("Task {i}")))
            .expect("create");
    }

    assert_eq!(service.list_tasks(&ListOptions::default()).len(), 2);
    let tail = service.list_tasks(&ListOptions {
        skip: 4,
        ..ListOptions::default()
    });
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0].title, "Task 4");
}

#[test]
fn test_update_task_title_and_status() {
    let mut service = service();
    let task = service.create_task(sample_task()).expect("create");

    let updated = service
        .update_task(
            &task.id,
            TaskPatch {
                title: Some("Updated Task".to_string()),
                status: Some(TaskStatus::InProgress),
                ..TaskPatch::default()
            },
        )
        .expect("update");

    assert_eq!(updated.title, "Updated Task");
    assert_eq!(updated.status, TaskStatus::InProgress);
    assert_eq!(service.get_task(&task.id).expect("get"), updated);
}

#[test]
fn test_full_lifecycle_with_reopen() {
    let mut service = service();
    let task = service.create_task(sample_task()).expect("create");

    for status in [
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ] {
        let updated = service
            .update_task(&task.id, TaskPatch::status(status))
            .expect("allowed transition");
        assert_eq!(updated.status, status);
    }
}

#[test]
fn test_invalid_status_transition() {
    let mut service = service();
    let task = service.create_task(sample_task()).expect("create");
    service
        .update_task(&task.id, TaskPatch::status(TaskStatus::Completed))
        .expect("created -> completed");

    let error = service
        .update_task(&task.id, TaskPatch::status(TaskStatus::Created))
        .unwrap_err();
    assert_eq!(error.http_status(), 400);
    assert!(matches!(
        error,
        AppError::Core(CoreError::IllegalTransition {
            current: TaskStatus::Completed,
            requested: TaskStatus::Created,
        })
    ));
}

#[test]
fn test_rejected_update_writes_nothing() {
    let mut service = service();
    let task = service
        .create_task(NewTask {
            status: Some(TaskStatus::InProgress),
            ..sample_task()
        })
        .expect("create");

    let result = service.update_task(
        &task.id,
        TaskPatch {
            title: Some("Should not stick".to_string()),
            status: Some(TaskStatus::Created),
            ..TaskPatch::default()
        },
    );
    assert!(result.is_err());
    assert_eq!(service.get_task(&task.id).expect("get"), task);
}

#[test]
fn test_invalid_title_on_update_writes_nothing() {
    let mut service = service();
    let task = service.create_task(sample_task()).expect("create");

    let result = service.update_task(
        &task.id,
        TaskPatch {
            title: Some("   ".to_string()),
            status: Some(TaskStatus::InProgress),
            ..TaskPatch::default()
        },
    );
    assert_eq!(result.unwrap_err().http_status(), 422);
    assert_eq!(service.get_task(&task.id).expect("get").status, TaskStatus::Created);
}

#[test]
fn test_not_found_checked_before_transition() {
    let mut service = service();
    let error = service
        .update_task("tsk-ffffff", TaskPatch::status(TaskStatus::Created))
        .unwrap_err();
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[test]
fn test_same_status_is_no_op_by_default() {
    let mut service = service();
    let task = service.create_task(sample_task()).expect("create");

    let updated = service
        .update_task(
            &task.id,
            TaskPatch {
                description: Some(Some("Edited".to_string())),
                status: Some(TaskStatus::Created),
                ..TaskPatch::default()
            },
        )
        .expect("unchanged status is accepted");
    assert_eq!(updated.status, TaskStatus::Created);
    assert_eq!(updated.description.as_deref(), Some("Edited"));
}

#[test]
fn test_same_status_rejected_under_reject_policy() {
    let config = Config {
        self_transition: SelfTransitionPolicy::Reject,
        ..Config::default()
    };
    let mut service = TaskService::in_memory(config);
    let task = service.create_task(sample_task()).expect("create");

    let error = service
        .update_task(&task.id, TaskPatch::status(TaskStatus::Created))
        .unwrap_err();
    assert_eq!(error.code(), ErrorCode::IllegalTransition);
}

#[test]
fn test_delete_task() {
    let mut service = service();
    let task = service.create_task(sample_task()).expect("create");

    service.delete_task(&task.id).expect("delete");
    assert_eq!(
        service.get_task(&task.id).unwrap_err().http_status(),
        404
    );
    assert_eq!(
        service.delete_task(&task.id).unwrap_err().code(),
        ErrorCode::NotFound
    );
}

#[test]
fn test_update_clears_description_with_explicit_null() {
    let mut service = service();
    let task = service.create_task(sample_task()).expect("create");

    let untouched: TaskPatch = serde_json::from_str(r#"{"title": "Renamed"}"#).expect("patch");
    assert_eq!(untouched.description, None);
    let updated = service.update_task(&task.id, untouched).expect("rename");
    assert_eq!(updated.description.as_deref(), Some("Test Description"));

    let clear: TaskPatch = serde_json::from_str(r#"{"description": null}"#).expect("patch");
    assert_eq!(clear.description, Some(None));
    let cleared = service.update_task(&task.id, clear).expect("clear");
    assert_eq!(cleared.description, None);
    assert_eq!(service.get_task(&task.id).expect("get").description, None);
}

#[test]
fn test_ambiguous_partial_id() {
    let mut service = service();
    let ids: Vec<String> = (0..17)
        .map(|i| {
            service
                .create_task(NewTask::titled(format!("Task {i}")))
                .expect("create")
                .id
        })
        .collect();

    // Seventeen IDs over sixteen hex digits: some first digit repeats.
    let shared = ids
        .iter()
        .map(|id| &id[4..5])
        .find(|digit| ids.iter().filter(|id| &id[4..5] == *digit).count() > 1)
        .expect("shared leading digit");

    let error = service.get_task(shared).unwrap_err();
    assert_eq!(error.code(), ErrorCode::AmbiguousId);
    assert_eq!(error.http_status(), 409);
    let details = error.details().expect("details");
    assert!(details["matches"].as_array().map_or(0, Vec::len) >= 2);
}

#[test]
fn test_bare_prefix_does_not_resolve() {
    let mut service = service();
    service.create_task(sample_task()).expect("create");

    let error = service.get_task("tsk-").unwrap_err();
    assert_eq!(error.http_status(), 422);
}
