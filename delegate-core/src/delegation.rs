//! Application state: the user and task registries, owned together.
//!
//! A front end holds one [`Delegation`] and routes every user event through
//! it. No validation or state transition happens outside this crate.

use crate::error::ValidationError;
use crate::tasks::TaskRegistry;
use crate::types::{Task, TaskDraft, TaskId};
use crate::users::UserRegistry;

/// Owns both registries for the lifetime of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delegation {
    users: UserRegistry,
    tasks: TaskRegistry,
}

impl Delegation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user, overwriting the role of an existing name.
    pub fn add_user(&mut self, name: &str, role: &str) -> Result<(), ValidationError> {
        self.users.add_user(name, role)
    }

    /// Create a task whose assignee is checked against this session's users.
    pub fn create_task(&mut self, draft: TaskDraft) -> Result<(TaskId, &Task), ValidationError> {
        self.tasks.create_task(&self.users, draft)
    }

    /// Complete the selected task. `None` means nothing is selected.
    pub fn mark_completed(&mut self, selection: Option<TaskId>) -> Result<&Task, ValidationError> {
        let id = selection.ok_or(ValidationError::NoSelection)?;
        self.tasks.mark_completed(id)
    }

    pub fn users(&self) -> &UserRegistry {
        &self.users
    }

    pub fn tasks(&self) -> &TaskRegistry {
        &self.tasks
    }
}
