//! Task registry: sequential id → [`Task`].
//!
//! Ids start at [`TaskId::FIRST`] and advance only when a task is actually
//! stored, so rejected creations never leave gaps. Tasks are never removed.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::error::ValidationError;
use crate::types::{Task, TaskDraft, TaskId, TaskStatus};
use crate::users::UserRegistry;

/// In-memory mapping from task id to task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRegistry {
    tasks: BTreeMap<TaskId, Task>,
    next_id: TaskId,
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: TaskId::FIRST,
        }
    }

    /// Create a task from `draft`.
    ///
    /// The assignee must be registered in `users` at this moment. Title,
    /// description and due date are stored exactly as given. Id `u32::MAX` is
    /// never handed out; creation fails with
    /// [`ValidationError::TaskIdsExhausted`] once it is reached.
    pub fn create_task(
        &mut self,
        users: &UserRegistry,
        draft: TaskDraft,
    ) -> Result<(TaskId, &Task), ValidationError> {
        if !users.contains(&draft.assignee) {
            tracing::debug!(assignee = %draft.assignee, "rejected task for unknown assignee");
            return Err(ValidationError::UnknownAssignee {
                name: draft.assignee,
            });
        }

        let id = self.next_id;
        let Some(next_id) = id.next() else {
            tracing::warn!(task_id = %id, "task id space exhausted");
            return Err(ValidationError::TaskIdsExhausted);
        };
        self.next_id = next_id;
        tracing::info!(
            task_id = %id,
            assignee = %draft.assignee,
            priority = %draft.priority,
            "task created"
        );
        let task = self
            .tasks
            .entry(id)
            .or_insert_with(|| Task::from_draft(id, draft));
        Ok((id, &*task))
    }

    /// Move a task to `Completed` with 100% progress.
    ///
    /// Unconditional, so repeating it on the same id succeeds and leaves the
    /// task as it was.
    pub fn mark_completed(&mut self, id: TaskId) -> Result<&Task, ValidationError> {
        let Some(task) = self.tasks.get_mut(&id) else {
            tracing::debug!(task_id = %id, "rejected completion of unknown task");
            return Err(ValidationError::TaskNotFound { id });
        };

        let changed = !task.is_completed() || task.progress != 100;
        task.status = TaskStatus::Completed;
        task.progress = 100;
        if changed {
            task.updated_at = Utc::now();
        }
        tracing::info!(task_id = %id, changed, "task completed");
        Ok(&*task)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// The id the next successful [`create_task`](Self::create_task) will use.
    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in id order, which is also creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
