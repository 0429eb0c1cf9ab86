//! `delegate run <script>` — replay session commands from a file or stdin.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use crate::session::{Session, Summary};

/// Arguments for `delegate run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script with one session command per line; `-` reads stdin.
    pub script: PathBuf,

    /// Stop with a non-zero exit at the first rejected line.
    #[arg(long)]
    pub fail_fast: bool,
}

impl RunArgs {
    pub fn run(self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        let mut session = Session::new();

        let summary = if self.script.as_os_str() == "-" {
            session.drive(io::stdin().lock(), &mut stdout, None, self.fail_fast)?
        } else {
            let file = File::open(&self.script)
                .with_context(|| format!("cannot open script '{}'", self.script.display()))?;
            session.drive(BufReader::new(file), &mut stdout, None, self.fail_fast)?
        };

        report(&self.script, &summary)
    }
}

fn report(script: &Path, summary: &Summary) -> Result<()> {
    tracing::info!(
        script = %script.display(),
        lines = summary.lines,
        rejected = summary.rejected,
        "script finished"
    );
    if let Some(line) = summary.stopped_at {
        bail!("script '{}' stopped at line {line}: command rejected", script.display());
    }
    Ok(())
}
