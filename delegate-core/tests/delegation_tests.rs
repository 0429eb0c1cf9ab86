//! Behaviour of the user/task registries as driven through [`Delegation`].
//!
//! Each `#[case]` builds its own state — no sharing between cases.

use delegate_core::{Delegation, Priority, TaskDraft, TaskId, TaskStatus, ValidationError};
use rstest::rstest;

fn with_alice() -> Delegation {
    let mut app = Delegation::new();
    app.add_user("Alice", "Engineer").expect("add Alice");
    app
}

fn fix_bug(assignee: &str) -> TaskDraft {
    TaskDraft::new("Fix bug", "desc", assignee, Priority::High, "2024-01-01")
}

// ---------------------------------------------------------------------------
// 1. Users
// ---------------------------------------------------------------------------

#[test]
fn added_user_role_is_queryable() {
    let app = with_alice();
    assert_eq!(app.users().role("Alice"), Some("Engineer"));
}

#[rstest]
#[case("", "Engineer")]
#[case("Alice", "")]
#[case("  ", "Engineer")]
#[case("Alice", "\t")]
fn blank_user_fields_leave_registry_unchanged(#[case] name: &str, #[case] role: &str) {
    let mut app = with_alice();
    let before = app.users().clone();

    let err = app.add_user(name, role).unwrap_err();

    assert_eq!(err, ValidationError::EmptyUserField);
    assert_eq!(app.users(), &before);
}

#[test]
fn re_registering_a_name_replaces_its_role() {
    let mut app = with_alice();
    app.add_user("Alice", "Manager").expect("upsert");
    assert_eq!(app.users().len(), 1);
    assert_eq!(app.users().role("Alice"), Some("Manager"));
}

// ---------------------------------------------------------------------------
// 2. Task creation
// ---------------------------------------------------------------------------

#[test]
fn unknown_assignee_does_not_advance_counter() {
    let mut app = with_alice();
    let err = app.create_task(fix_bug("Bob")).unwrap_err();
    assert!(matches!(err, ValidationError::UnknownAssignee { ref name } if name == "Bob"));
    assert_eq!(app.tasks().next_id(), TaskId(1));
    assert!(app.tasks().is_empty());
}

#[test]
fn ids_are_sequential_across_failed_attempts() {
    let mut app = with_alice();
    assert!(app.create_task(fix_bug("Bob")).is_err());
    let (first, _) = app.create_task(fix_bug("Alice")).expect("first");
    assert!(app.create_task(fix_bug("")).is_err());
    assert!(app.create_task(fix_bug("Carol")).is_err());
    let (second, _) = app.create_task(fix_bug("Alice")).expect("second");

    assert_eq!(first, TaskId(1));
    assert_eq!(second, TaskId(2));
    let ids: Vec<TaskId> = app.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, [TaskId(1), TaskId(2)]);
}

#[rstest]
#[case(Priority::High, "2024-01-01")]
#[case(Priority::Medium, "")]
#[case(Priority::Low, "next tuesday")]
fn fresh_task_is_not_started(#[case] priority: Priority, #[case] due: &str) {
    let mut app = with_alice();
    let (_, task) = app
        .create_task(TaskDraft::new("t", "d", "Alice", priority, due))
        .expect("create");
    assert_eq!(task.status, TaskStatus::NotStarted);
    assert_eq!(task.progress, 0);
    assert_eq!(task.priority, priority);
    assert_eq!(task.due_date, due);
}

#[test]
fn assignee_is_a_copied_name() {
    let mut app = with_alice();
    let (id, _) = app.create_task(fix_bug("Alice")).expect("create");
    app.add_user("Alice", "Director").expect("upsert");
    assert_eq!(app.tasks().get(id).expect("task").assignee, "Alice");
}

// ---------------------------------------------------------------------------
// 3. Completion
// ---------------------------------------------------------------------------

#[test]
fn completing_twice_reports_success_both_times() {
    let mut app = with_alice();
    let (id, _) = app.create_task(fix_bug("Alice")).expect("create");

    for _ in 0..2 {
        let task = app.mark_completed(Some(id)).expect("complete");
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.progress, 100);
    }
}

#[test]
fn completing_missing_task_mutates_nothing() {
    let mut app = with_alice();
    app.create_task(fix_bug("Alice")).expect("create");
    let before = app.clone();

    let err = app.mark_completed(Some(TaskId(42))).unwrap_err();

    assert_eq!(err, ValidationError::TaskNotFound { id: TaskId(42) });
    assert_eq!(app, before);
}

#[test]
fn completing_only_touches_the_selected_task() {
    let mut app = with_alice();
    let (a, _) = app.create_task(fix_bug("Alice")).expect("a");
    let (b, _) = app.create_task(fix_bug("Alice")).expect("b");
    app.mark_completed(Some(b)).expect("complete b");

    assert_eq!(app.tasks().get(a).expect("a").status, TaskStatus::NotStarted);
    assert_eq!(app.tasks().get(b).expect("b").status, TaskStatus::Completed);
}

// ---------------------------------------------------------------------------
// 4. End to end
// ---------------------------------------------------------------------------

#[test]
fn alice_fixes_a_bug() {
    let mut app = Delegation::new();
    app.add_user("Alice", "Engineer").expect("user");

    let (id, task) = app
        .create_task(TaskDraft::new("Fix bug", "desc", "Alice", Priority::High, "2024-01-01"))
        .expect("task");
    assert_eq!(id, TaskId(1));
    assert_eq!(task.status, TaskStatus::NotStarted);
    assert_eq!(task.progress, 0);

    let task = app.mark_completed(Some(TaskId(1))).expect("complete");
    assert_eq!(task.status, TaskStatus::Completed);
    assert_eq!(task.progress, 100);
}
