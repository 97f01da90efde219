//! Local network sweep via the address-resolution table

use std::io;
use std::time::Duration;

use crate::process::ProcessRunner;

pub const ADDRESS_TABLE_PROGRAM: &str = "arp";
pub const ADDRESS_TABLE_ARGS: &[&str] = &["-a"];

/// Upper bound on the address-table listing, which may stall on reverse lookups
pub const ADDRESS_TABLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Extract candidate addresses from address-table output.
///
/// Lines look like `name (192.168.1.5) at 1a:2b:3c on en0 ...`; only the
/// first parenthesized segment is used. Multicast and broadcast addresses are
/// dropped.
pub fn parse_address_table(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(parenthesized)
        .filter(|addr| is_scan_target(addr))
        .map(str::to_string)
        .collect()
}

/// List candidate hosts from the local address table.
///
/// An address-table tool that cannot be run, or that does not finish within
/// [`ADDRESS_TABLE_TIMEOUT`], yields no candidates.
pub fn sweep(runner: &dyn ProcessRunner) -> Vec<String> {
    let args: Vec<String> = ADDRESS_TABLE_ARGS.iter().map(|a| a.to_string()).collect();

    match runner.run_with_timeout(ADDRESS_TABLE_PROGRAM, &args, ADDRESS_TABLE_TIMEOUT) {
        Ok(output) => {
            if !output.success() {
                tracing::debug!(exit_code = output.exit_code, "Address table listing failed");
            }
            parse_address_table(&output.stdout)
        }
        Err(e) if e.kind() == io::ErrorKind::TimedOut => {
            tracing::warn!(timeout = ?ADDRESS_TABLE_TIMEOUT, "Address table listing timed out");
            Vec::new()
        }
        Err(e) => {
            tracing::debug!(error = %e, "Address table tool unavailable");
            Vec::new()
        }
    }
}

fn parenthesized(line: &str) -> Option<&str> {
    let start = line.find('(')? + 1;
    let len = line[start..].find(')')?;
    let inner = line[start..start + len].trim();
    (!inner.is_empty()).then_some(inner)
}

fn is_scan_target(addr: &str) -> bool {
    !(addr.starts_with("224.") || addr.starts_with("255.") || addr.ends_with(".255"))
}
