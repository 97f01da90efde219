//! Scan command implementation
//!
//! Finds hosts to sync with: trusted hosts from the trust store, or a sweep
//! of the local address table when there are none.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use devsync_core::SystemRunner;
use devsync_core::discovery::trust::default_trust_store_path;
use devsync_core::discovery::{Discovery, DnsResolver, TcpProber};

use crate::error::{CliError, Result};

/// Arguments of `devsync scan`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub known_hosts: Option<PathBuf>,
    pub key_family: String,
    pub port: u16,
    pub timeout: Duration,
}

/// Run the scan command
pub fn run_scan(options: ScanOptions, out: &mut dyn Write) -> Result<()> {
    let known_hosts = match options.known_hosts {
        Some(path) => path,
        None => default_trust_store_path().ok_or_else(|| {
            CliError::user("Could not determine the home directory. Pass --known-hosts.")
        })?,
    };

    let prober = TcpProber::new(options.port, options.timeout);
    let resolver = DnsResolver;
    let runner = SystemRunner;

    let report = Discovery::new(known_hosts, &prober, &resolver, &runner)
        .with_key_family(options.key_family)
        .discover();
    report.render(out)?;
    Ok(())
}
