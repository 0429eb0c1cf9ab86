//! Delegate — assign tasks to users from the terminal.
//!
//! # Usage
//!
//! ```text
//! delegate [--verbose] [shell]
//! delegate [--verbose] run <SCRIPT|-> [--fail-fast]
//! ```
//!
//! Inside a session, each line is one command:
//!
//! ```text
//! user add <name> <role>
//! user list
//! task create --title <t> --description <d> --assignee <name> --priority high|medium|low --due <YYYY-MM-DD>
//! task list [--json]
//! task show <id>
//! task complete <id>
//! quit
//! ```

mod commands;
mod render;
mod session;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{run::RunArgs, shell::ShellArgs};
use delegate_core::Priority;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "delegate",
    version,
    about = "Track users and the tasks delegated to them",
    long_about = None,
)]
struct Cli {
    /// Log registry events to stderr (overridden by RUST_LOG).
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive session (the default).
    Shell(ShellArgs),

    /// Replay a script of session commands, one per line.
    Run(RunArgs),
}

// ---------------------------------------------------------------------------
// Priority argument: parsed from session strings, converts to the core type
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse `Priority` from session arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityArg(pub Priority);

impl FromStr for PriorityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(Self(Priority::High)),
            "medium" => Ok(Self(Priority::Medium)),
            "low" => Ok(Self(Priority::Low)),
            other => Err(format!(
                "unknown priority '{other}'; expected: high, medium, low"
            )),
        }
    }
}

impl fmt::Display for PriorityArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<PriorityArg> for Priority {
    fn from(p: PriorityArg) -> Self {
        p.0
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        None => ShellArgs::default().run(),
        Some(Commands::Shell(args)) => args.run(),
        Some(Commands::Run(args)) => args.run(),
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
