//! Error types for delegate-core.

use thiserror::Error;

use crate::types::TaskId;

/// Rejections raised by the user and task registries.
///
/// Every variant is recoverable: the operation that raised it left all state
/// untouched, and the caller may retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A user's name or role was blank after trimming.
    #[error("user name and role must both be non-empty")]
    EmptyUserField,

    /// The task's assignee is not a registered user.
    #[error("assignee '{name}' does not exist")]
    UnknownAssignee { name: String },

    /// Completion was requested without a task selected.
    #[error("no task selected")]
    NoSelection,

    /// Every task id has been handed out.
    #[error("no task ids left")]
    TaskIdsExhausted,

    /// No task has the given id.
    #[error("task {id} not found")]
    TaskNotFound { id: TaskId },
}
