//! Domain types for users and tasks.
//!
//! All types are serializable via serde so the CLI can emit them as JSON.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed sequential task identifier. The first task is `1`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(pub u32);

impl TaskId {
    /// The id handed to the first task ever created.
    pub const FIRST: TaskId = TaskId(1);

    /// The id after this one, or `None` once `u32::MAX` is reached.
    pub(crate) fn next(self) -> Option<TaskId> {
        self.0.checked_add(1).map(TaskId)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for TaskId {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Task priority, chosen from a fixed set at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Priority {
    #[default]
    High,
    Medium,
    Low,
}

impl Priority {
    /// Every priority, in selector order.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

/// Status of a task. Only two states are reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::NotStarted => write!(f, "Not Started"),
            TaskStatus::Completed => write!(f, "Completed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// Field input for a new task, as collected by a form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    /// Must name a registered user.
    pub assignee: String,
    pub priority: Priority,
    /// Free-form; `YYYY-MM-DD` is expected but never parsed.
    pub due_date: String,
}

impl TaskDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        assignee: impl Into<String>,
        priority: Priority,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            assignee: assignee.into(),
            priority,
            due_date: due_date.into(),
        }
    }
}

/// A task assigned to a user.
///
/// `assignee` is a copy of the user's name, not a live link: it is checked
/// once at creation and never again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub priority: Priority,
    pub due_date: String,
    pub status: TaskStatus,
    /// Percentage, 0 to 100.
    pub progress: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub(crate) fn from_draft(id: TaskId, draft: TaskDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: draft.title,
            description: draft.description,
            assignee: draft.assignee,
            priority: draft.priority,
            due_date: draft.due_date,
            status: TaskStatus::NotStarted,
            progress: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Progress as shown in the task table, e.g. `"0%"`.
    pub fn progress_label(&self) -> String {
        format!("{}%", self.progress)
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_display_and_next() {
        assert_eq!(TaskId::FIRST.to_string(), "1");
        assert_eq!(TaskId::from(41).next(), Some(TaskId(42)));
        assert_eq!(TaskId(u32::MAX).next(), None);
    }

    #[test]
    fn status_display_matches_table_text() {
        assert_eq!(TaskStatus::NotStarted.to_string(), "Not Started");
        assert_eq!(TaskStatus::Completed.to_string(), "Completed");
        assert_eq!(TaskStatus::default(), TaskStatus::NotStarted);
    }

    #[test]
    fn priority_display() {
        let labels: Vec<String> = Priority::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(labels, ["High", "Medium", "Low"]);
    }

    #[test]
    fn task_from_draft_starts_not_started() {
        let draft = TaskDraft::new("Fix bug", "desc", "Alice", Priority::Low, "2024-01-01");
        let task = Task::from_draft(TaskId(7), draft);
        assert_eq!(task.id, TaskId(7));
        assert_eq!(task.status, TaskStatus::NotStarted);
        assert_eq!(task.progress, 0);
        assert_eq!(task.progress_label(), "0%");
        assert_eq!(task.created_at, task.updated_at);
        assert!(!task.is_completed());
    }
}
