//! `delegate shell` — interactive session on stdin.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Args;

use crate::session::Session;

const PROMPT: &str = "delegate> ";

/// Arguments for `delegate shell`.
#[derive(Args, Debug, Default)]
pub struct ShellArgs {
    /// Never print the prompt, even on a terminal.
    #[arg(long)]
    pub no_prompt: bool,
}

impl ShellArgs {
    pub fn run(self) -> Result<()> {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal() && !self.no_prompt;

        if interactive {
            println!(
                "Delegate v{}. Type 'help' for commands, 'quit' to leave.",
                env!("CARGO_PKG_VERSION")
            );
        }

        let mut stdout = io::stdout().lock();
        let mut session = Session::new();
        let summary = session.drive(
            stdin.lock(),
            &mut stdout,
            interactive.then_some(PROMPT),
            false,
        )?;
        tracing::info!(lines = summary.lines, rejected = summary.rejected, "session ended");
        Ok(())
    }
}
