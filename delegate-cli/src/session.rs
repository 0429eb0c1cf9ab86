//! Line-oriented session: every input line is one user event.
//!
//! Lines are split into words (single or double quotes group words), parsed
//! with clap, and dispatched to [`Delegation`]. Rejections are reported and
//! the session carries on; only I/O failures are returned as errors.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Args, Parser, Subcommand};
use colored::Colorize;

use delegate_core::{Delegation, TaskDraft, TaskId, ValidationError};

use crate::render;
use crate::PriorityArg;

// ---------------------------------------------------------------------------
// Line grammar
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "session",
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]"
)]
struct SessionLine {
    #[command(subcommand)]
    command: LineCommand,
}

#[derive(Subcommand, Debug)]
enum LineCommand {
    /// Register users and list them.
    User {
        #[command(subcommand)]
        command: UserCommand,
    },

    /// Create, list, inspect and complete tasks.
    Task {
        #[command(subcommand)]
        command: TaskCommand,
    },

    /// End the session.
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
enum UserCommand {
    /// Add a user, or replace the role of an existing one.
    Add {
        /// Unique user name. A missing name counts as blank.
        #[arg(default_value = "")]
        name: String,
        /// Role, e.g. "Engineer". A missing role counts as blank.
        #[arg(default_value = "")]
        role: String,
    },

    /// List registered users.
    List,
}

#[derive(Subcommand, Debug)]
enum TaskCommand {
    /// Create a task for a registered user.
    Create(CreateArgs),

    /// Show the task table.
    List {
        /// Emit the task records as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show every field of one task.
    Show {
        id: u32,
    },

    /// Mark the selected task as completed.
    Complete {
        /// Task to complete. Omitting it means nothing is selected.
        id: Option<u32>,
    },
}

/// Form fields for a new task. Blank fields are allowed, as in the form.
#[derive(Args, Debug)]
struct CreateArgs {
    #[arg(long, default_value = "")]
    title: String,

    #[arg(long, default_value = "")]
    description: String,

    /// Name of a registered user.
    #[arg(long, default_value = "")]
    assignee: String,

    /// high | medium | low.
    #[arg(long, default_value = "high", value_name = "PRIORITY")]
    priority: PriorityArg,

    /// Due date, YYYY-MM-DD.
    #[arg(long = "due", default_value = "", value_name = "DATE")]
    due_date: String,
}

impl CreateArgs {
    fn into_draft(self) -> TaskDraft {
        TaskDraft::new(
            self.title.trim(),
            self.description.trim(),
            self.assignee.trim(),
            self.priority.into(),
            self.due_date.trim(),
        )
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// What a single line did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line, comment, or successful command.
    Done,
    /// The command was refused; state is unchanged.
    Rejected(String),
    /// The user asked to leave.
    Quit,
}

/// Totals for a driven session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub rejected: usize,
    /// 1-based line number of the rejection that stopped a fail-fast run.
    pub stopped_at: Option<usize>,
}

/// Owns the application state for one session.
#[derive(Debug, Default)]
pub struct Session {
    app: Delegation,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app(&self) -> &Delegation {
        &self.app
    }

    /// Read lines from `input` until EOF or `quit`.
    ///
    /// With `stop_on_reject`, the first rejected line ends the session and is
    /// recorded in [`Summary::stopped_at`]. `prompt` is written before each
    /// read when set.
    pub fn drive(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
        prompt: Option<&str>,
        stop_on_reject: bool,
    ) -> Result<Summary> {
        let mut summary = Summary::default();
        let mut lines = input.lines();
        loop {
            if let Some(prompt) = prompt {
                write!(out, "{prompt}")?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                if prompt.is_some() {
                    writeln!(out)?;
                }
                break;
            };
            let line = line.context("failed to read session input")?;
            summary.lines += 1;

            match self.execute(&line, out)? {
                Outcome::Done => {}
                Outcome::Quit => break,
                Outcome::Rejected(reason) => {
                    summary.rejected += 1;
                    tracing::debug!(line = summary.lines, %reason, "line rejected");
                    if stop_on_reject {
                        summary.stopped_at = Some(summary.lines);
                        break;
                    }
                }
            }
        }
        Ok(summary)
    }

    /// Run one line against the session state.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> Result<Outcome> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Outcome::Done);
        }

        let words = match split_words(trimmed) {
            Ok(words) => words,
            Err(reason) => {
                writeln!(out, "{} {reason}", "✗".red())?;
                return Ok(Outcome::Rejected(reason));
            }
        };

        let parsed = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(err) => {
                let text = err.render().to_string();
                write!(out, "{text}")?;
                return Ok(match err.kind() {
                    ErrorKind::DisplayHelp
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => Outcome::Done,
                    _ => Outcome::Rejected(text.lines().next().unwrap_or_default().to_string()),
                });
            }
        };

        match parsed.command {
            LineCommand::User { command } => self.user(command, out),
            LineCommand::Task { command } => self.task(command, out),
            LineCommand::Quit => Ok(Outcome::Quit),
        }
    }

    fn user(&mut self, command: UserCommand, out: &mut impl Write) -> Result<Outcome> {
        match command {
            UserCommand::Add { name, role } => match self.app.add_user(&name, &role) {
                Ok(()) => {
                    writeln!(out, "{} User '{}' added successfully!", "✓".green(), name.trim())?;
                    Ok(Outcome::Done)
                }
                Err(err) => reject(out, &err),
            },
            UserCommand::List => {
                writeln!(out, "{}", render::user_table(self.app.users()))?;
                Ok(Outcome::Done)
            }
        }
    }

    fn task(&mut self, command: TaskCommand, out: &mut impl Write) -> Result<Outcome> {
        match command {
            TaskCommand::Create(args) => match self.app.create_task(args.into_draft()) {
                Ok((id, task)) => {
                    writeln!(
                        out,
                        "{} Task '{}' created successfully! (id {id})",
                        "✓".green(),
                        task.title
                    )?;
                    Ok(Outcome::Done)
                }
                Err(err) => reject(out, &err),
            },
            TaskCommand::List { json } => {
                if json {
                    writeln!(out, "{}", render::tasks_json(self.app.tasks())?)?;
                } else {
                    writeln!(out, "{}", render::task_table(self.app.tasks()))?;
                }
                Ok(Outcome::Done)
            }
            TaskCommand::Show { id } => {
                let id = TaskId(id);
                match self.app.tasks().get(id) {
                    Some(task) => {
                        writeln!(out, "{}", render::task_detail(task))?;
                        Ok(Outcome::Done)
                    }
                    None => reject(out, &ValidationError::TaskNotFound { id }),
                }
            }
            TaskCommand::Complete { id } => match self.app.mark_completed(id.map(TaskId)) {
                Ok(_) => {
                    writeln!(out, "{} Task marked as completed.", "✓".green())?;
                    Ok(Outcome::Done)
                }
                Err(err) => reject(out, &err),
            },
        }
    }
}

/// Report a rejection the way the form's dialogs worded it.
fn reject(out: &mut impl Write, err: &ValidationError) -> Result<Outcome> {
    let message = match err {
        ValidationError::EmptyUserField => "Please fill out all fields.".to_string(),
        ValidationError::UnknownAssignee { .. } => "Assignee does not exist.".to_string(),
        ValidationError::NoSelection => "Please select a task to mark as completed.".to_string(),
        ValidationError::TaskNotFound { id } => format!("Task {id} not found."),
        ValidationError::TaskIdsExhausted => "No task ids left.".to_string(),
    };
    writeln!(out, "{} {message}", "✗".red())?;
    Ok(Outcome::Rejected(err.to_string()))
}

/// Split a line into words. Quotes group words and may produce empty words.
fn split_words(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {q} quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
