//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use devsync_core::DEFAULT_TRANSFER_PROGRAM;
use devsync_core::discovery::DEFAULT_KEY_FAMILY;
use devsync_core::discovery::probe::SSH_PORT;

/// devsync - Bidirectional dev environment sync over SSH
#[derive(Parser, Debug)]
#[command(name = "devsync")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the global profiles.json [default: ~/.config/devsync]
    #[arg(long, global = true, env = "DEVSYNC_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Transfer program to run
    #[arg(
        long,
        global = true,
        env = "DEVSYNC_RSYNC",
        default_value = DEFAULT_TRANSFER_PROGRAM,
        value_name = "PROGRAM"
    )]
    pub rsync: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create a new sync profile
    ///
    /// New profiles start with the default excludes (.git, node_modules,
    /// __pycache__, .venv, venv, .DS_Store, *.pyc, .env, *.md).
    ///
    /// Examples:
    ///   devsync init app --host me@192.168.1.187 --remote /srv/app --local ~/app
    ///   devsync init app --host me@box --remote /srv/app --local ~/app --exclude Pods
    Init {
        /// Profile name
        name: String,

        /// SSH host (e.g. user@hostname)
        #[arg(long)]
        host: String,

        /// Remote path
        #[arg(long)]
        remote: String,

        /// Local path
        #[arg(long)]
        local: String,

        /// Additional exclude pattern (repeatable)
        #[arg(long)]
        exclude: Vec<String>,

        /// Overwrite an existing profile
        #[arg(long)]
        force: bool,

        /// Save the profile to ./devsync.json instead of the global config
        #[arg(long)]
        local_config: bool,
    },

    /// Sync files from local machine to remote
    Push {
        /// Profile name
        name: String,
    },

    /// Sync files from remote machine to local
    Pull {
        /// Profile name
        name: String,
    },

    /// Preview what would change (dry-run both directions)
    Status {
        /// Profile name
        name: String,
    },

    /// Find trusted SSH hosts or discover SSH on the local network
    Scan {
        /// Trust store to read [default: ~/.ssh/known_hosts]
        #[arg(long, env = "DEVSYNC_KNOWN_HOSTS", value_name = "PATH")]
        known_hosts: Option<PathBuf>,

        /// Only surface hosts whose key type contains this marker
        #[arg(long, default_value = DEFAULT_KEY_FAMILY)]
        key_family: String,

        /// Port to probe
        #[arg(long, default_value_t = SSH_PORT)]
        port: u16,

        /// Per-host connect and read timeout in milliseconds
        #[arg(long, default_value_t = 500)]
        timeout_ms: u64,
    },

    /// Show all configured profiles
    List,

    /// Delete a profile
    Remove {
        /// Profile name
        name: String,
    },

    /// Show detailed help with examples
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["devsync"]);
        assert!(!cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_init_with_excludes() {
        let cli = Cli::parse_from([
            "devsync", "init", "app", "--host", "me@box", "--remote", "/srv/app", "--local",
            "/home/me/app", "--exclude", "Pods", "--exclude", "*.log", "--force",
        ]);
        assert_eq!(
            cli.command,
            Some(Commands::Init {
                name: "app".into(),
                host: "me@box".into(),
                remote: "/srv/app".into(),
                local: "/home/me/app".into(),
                exclude: vec!["Pods".into(), "*.log".into()],
                force: true,
                local_config: false,
            })
        );
    }

    #[test]
    fn parse_init_requires_host() {
        let result = Cli::try_parse_from(["devsync", "init", "app", "--remote", "/r", "--local", "/l"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_sync_commands() {
        for (word, expected) in [
            ("push", Commands::Push { name: "app".into() }),
            ("pull", Commands::Pull { name: "app".into() }),
            ("status", Commands::Status { name: "app".into() }),
            ("remove", Commands::Remove { name: "app".into() }),
        ] {
            let cli = Cli::parse_from(["devsync", word, "app"]);
            assert_eq!(cli.command, Some(expected));
        }
    }

    #[test]
    fn parse_scan_overrides() {
        let cli = Cli::parse_from([
            "devsync", "scan", "--known-hosts", "/tmp/kh", "--key-family", "ssh-ed25519",
            "--port", "2222", "--timeout-ms", "50",
        ]);
        assert_eq!(
            cli.command,
            Some(Commands::Scan {
                known_hosts: Some(PathBuf::from("/tmp/kh")),
                key_family: "ssh-ed25519".into(),
                port: 2222,
                timeout_ms: 50,
            })
        );
    }

    #[test]
    fn parse_help_subcommand() {
        let cli = Cli::parse_from(["devsync", "help"]);
        assert_eq!(cli.command, Some(Commands::Help));
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["devsync", "push", "app", "-v", "--config-dir", "/tmp/cfg"]);
        assert!(cli.verbose);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/cfg")));
    }
}
