//! Transfer execution
//!
//! Runs a [`SyncInvocation`] through a [`ProcessRunner`] and writes the
//! categorized report. The tool's exit status is returned untouched.

use std::io::Write;

use colored::Colorize;

use crate::process::ProcessRunner;
use crate::report::{ClassifiedLine, render_error_line};
use crate::transfer::SyncInvocation;
use crate::{Error, Result};

/// Program used when no override is configured
pub const DEFAULT_TRANSFER_PROGRAM: &str = "rsync";

/// Executes transfers with a given program through a process runner.
pub struct TransferRunner<'a> {
    process: &'a dyn ProcessRunner,
    program: String,
}

impl<'a> TransferRunner<'a> {
    pub fn new(process: &'a dyn ProcessRunner, program: impl Into<String>) -> Self {
        Self {
            process,
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Echo the command line, run it, then render stdout and stderr.
    ///
    /// Returns the tool's exit code. Only a failure to start the tool (or to
    /// write the report) is an `Err`.
    pub fn run(&self, invocation: &SyncInvocation, out: &mut dyn Write) -> Result<i32> {
        let command_line = invocation.command_line(&self.program);
        writeln!(out, "  {}", command_line.yellow())?;
        writeln!(out)?;

        let output = self
            .process
            .run(&self.program, &invocation.args())
            .map_err(|source| Error::Spawn {
                program: self.program.clone(),
                source,
            })?;

        tracing::debug!(
            exit_code = output.exit_code,
            dry_run = invocation.dry_run,
            "Transfer finished"
        );

        for line in output.stdout.lines() {
            writeln!(out, "{}", ClassifiedLine::new(line).render())?;
        }
        for line in output.stderr.lines() {
            writeln!(out, "{}", render_error_line(line))?;
        }

        Ok(output.exit_code)
    }
}
