//! devsync CLI
//!
//! Keeps a local directory tree and a remote one in step over SSH, driven by
//! named profiles, and finds hosts worth syncing with.

mod cli;
mod commands;
mod context;
mod error;

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use commands::init::InitRequest;
use context::Context;
use error::Result;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_target(true)
            .with_writer(io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let Some(command) = cli.command else {
        println!(
            "{} Bidirectional dev environment sync over SSH",
            "devsync".green().bold()
        );
        println!();
        println!(
            "Run {} or {} for available commands.",
            "devsync --help".cyan(),
            "devsync help".cyan()
        );
        return Ok(ExitCode::FAILURE);
    };

    let ctx = Context::resolve(cli.config_dir, cli.rsync)?;
    let status = execute_command(&ctx, command)?;
    Ok(exit_code(status))
}

/// Dispatch a parsed command. Returns the process exit status.
fn execute_command(ctx: &Context, cmd: Commands) -> Result<i32> {
    let mut stdout = io::stdout().lock();

    match cmd {
        Commands::Init {
            name,
            host,
            remote,
            local,
            exclude,
            force,
            local_config,
        } => {
            let request = InitRequest {
                name: &name,
                host: &host,
                remote: &remote,
                local: &local,
                extra_excludes: &exclude,
                force,
                local_config,
            };
            commands::run_init(&ctx.store, &request, &mut stdout)?;
            Ok(0)
        }
        Commands::Push { name } => commands::run_push(ctx, &name, &mut stdout),
        Commands::Pull { name } => commands::run_pull(ctx, &name, &mut stdout),
        Commands::Status { name } => commands::run_status(ctx, &name, &mut stdout),
        Commands::Scan {
            known_hosts,
            key_family,
            port,
            timeout_ms,
        } => {
            let options = commands::ScanOptions {
                known_hosts,
                key_family,
                port,
                timeout: Duration::from_millis(timeout_ms),
            };
            commands::run_scan(options, &mut stdout)?;
            Ok(0)
        }
        Commands::List => {
            commands::run_list(&ctx.store, &mut stdout)?;
            Ok(0)
        }
        Commands::Remove { name } => {
            commands::run_remove(&ctx.store, &name, &mut stdout)?;
            Ok(0)
        }
        Commands::Help => {
            commands::run_help(&mut stdout)?;
            Ok(0)
        }
    }
}

/// Map a tool exit status onto a process exit code.
fn exit_code(status: i32) -> ExitCode {
    ExitCode::from(status_byte(status))
}

/// Anything outside `0..=255` is reported as a plain failure.
fn status_byte(status: i32) -> u8 {
    u8::try_from(status).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_passes_tool_status_through() {
        assert_eq!(status_byte(0), 0);
        assert_eq!(status_byte(23), 23);
        assert_eq!(status_byte(-1), 1);
        assert_eq!(status_byte(300), 1);
    }

    #[test]
    fn test_cli_error_user() {
        let error = crate::error::CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }

    #[test]
    fn test_not_found_message() {
        let error = crate::error::CliError::from(devsync_fs::Error::ProfileNotFound {
            name: "ghost".into(),
        });
        assert_eq!(
            error.to_string(),
            "Profile 'ghost' not found. Run 'devsync list' to see profiles."
        );
    }
}
