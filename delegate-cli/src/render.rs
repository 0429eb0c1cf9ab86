//! Terminal rendering of registry state: tables, task detail, JSON.

use anyhow::{Context, Result};
use tabled::{settings::Style, Table, Tabled};

use delegate_core::{Task, TaskRegistry, UserRegistry};

#[derive(Tabled)]
struct TaskTableRow {
    #[tabled(rename = "Task ID")]
    id: u32,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Assignee")]
    assignee: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Due Date")]
    due_date: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Progress")]
    progress: String,
}

impl From<&Task> for TaskTableRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.0,
            title: task.title.clone(),
            assignee: task.assignee.clone(),
            priority: task.priority.to_string(),
            due_date: task.due_date.clone(),
            status: task.status.to_string(),
            progress: task.progress_label(),
        }
    }
}

#[derive(Tabled)]
struct UserTableRow<'a> {
    #[tabled(rename = "User Name")]
    name: &'a str,
    #[tabled(rename = "Role")]
    role: &'a str,
}

/// The task table, one row per task in id order.
pub fn task_table(tasks: &TaskRegistry) -> String {
    if tasks.is_empty() {
        return "No tasks yet.".to_string();
    }
    let rows: Vec<TaskTableRow> = tasks.iter().map(TaskTableRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

pub fn user_table(users: &UserRegistry) -> String {
    if users.is_empty() {
        return "No users registered.".to_string();
    }
    let rows: Vec<UserTableRow<'_>> = users
        .iter()
        .map(|(name, role)| UserTableRow { name, role })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Every field of one task, including the description the table omits.
pub fn task_detail(task: &Task) -> String {
    [
        format!("Task ID:     {}", task.id),
        format!("Title:       {}", task.title),
        format!("Description: {}", task.description),
        format!("Assignee:    {}", task.assignee),
        format!("Priority:    {}", task.priority),
        format!("Due Date:    {}", task.due_date),
        format!("Status:      {}", task.status),
        format!("Progress:    {}", task.progress_label()),
        format!("Created:     {}", task.created_at.to_rfc3339()),
        format!("Updated:     {}", task.updated_at.to_rfc3339()),
    ]
    .join("\n")
}

pub fn tasks_json(tasks: &TaskRegistry) -> Result<String> {
    let records: Vec<&Task> = tasks.iter().collect();
    serde_json::to_string_pretty(&records).context("failed to serialize tasks as JSON")
}
