//! Delegate core library: users, tasks, and the state that owns them.
//!
//! - [`types`] — ids, enums, and the task record
//! - [`error`] — [`ValidationError`]
//! - [`users`] — [`UserRegistry`]
//! - [`tasks`] — [`TaskRegistry`]
//! - [`delegation`] — [`Delegation`], the application state a front end drives

pub mod delegation;
pub mod error;
pub mod tasks;
pub mod types;
pub mod users;

pub use delegation::Delegation;
pub use error::ValidationError;
pub use tasks::TaskRegistry;
pub use types::{Priority, Task, TaskDraft, TaskId, TaskStatus};
pub use users::UserRegistry;
