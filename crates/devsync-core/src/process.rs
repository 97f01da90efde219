//! External process execution
//!
//! The transfer tool and the address-table tool are both run through the
//! [`ProcessRunner`] trait. Production code uses [`SystemRunner`]; tests swap
//! in a runner with scripted output.

use std::io;
use std::process::{Command, Output, Stdio};
use std::time::Duration;

/// Exit code reported when the child was terminated without one (by a signal).
pub const TERMINATED_EXIT_CODE: i32 = 1;

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ProcessOutput {
    /// Output of a process that printed `stdout` and exited 0.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            ..Self::default()
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs a program to completion and captures its output as text.
pub trait ProcessRunner {
    /// An `Err` means the program could not be started; a program that ran
    /// and failed is an `Ok` with a nonzero `exit_code`.
    fn run(&self, program: &str, args: &[String]) -> io::Result<ProcessOutput>;

    /// Like [`run`](Self::run), but the child is killed if it has not
    /// finished within `timeout`. Expiry is an `Err` of kind `TimedOut`.
    fn run_with_timeout(
        &self,
        program: &str,
        args: &[String],
        timeout: Duration,
    ) -> io::Result<ProcessOutput>;
}

/// Runs real subprocesses. Bounded runs go through tokio so the child can be
/// killed on expiry.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<ProcessOutput> {
        tracing::debug!(program, ?args, "Spawning process");

        let output = Command::new(program).args(args).output()?;
        Ok(capture(program, output))
    }

    fn run_with_timeout(
        &self,
        program: &str,
        args: &[String],
        timeout: Duration,
    ) -> io::Result<ProcessOutput> {
        tracing::debug!(program, ?args, ?timeout, "Spawning bounded process");

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        runtime.block_on(async {
            let child = tokio::process::Command::new(program)
                .args(args)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true)
                .spawn()?;

            match tokio::time::timeout(timeout, child.wait_with_output()).await {
                Ok(output) => Ok(capture(program, output?)),
                Err(_) => Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("{program} did not finish within {timeout:?}"),
                )),
            }
        })
    }
}

fn capture(program: &str, output: Output) -> ProcessOutput {
    let exit_code = output.status.code().unwrap_or_else(|| {
        tracing::warn!(program, "Process terminated without an exit code");
        TERMINATED_EXIT_CODE
    });

    ProcessOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code,
    }
}
