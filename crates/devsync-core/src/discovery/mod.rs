//! Host discovery
//!
//! Known hosts come first: if the trust store has entries for the key
//! family, every unique host is labeled, probed and reported whether or not it
//! answers. With an empty trust store the local address table is swept
//! instead and only hosts that send a greeting are reported.

pub mod probe;
pub mod resolve;
pub mod sweep;
pub mod trust;

use std::collections::HashSet;
use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;

use crate::process::ProcessRunner;

pub use probe::{Prober, TcpProber};
pub use resolve::{DnsResolver, NameResolver, host_label};
pub use trust::{DEFAULT_KEY_FAMILY, TrustEntry};

/// One host as reported by a discovery run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredHost {
    pub address: String,
    /// The address, annotated with a resolved name when one is known
    pub label: String,
    pub reachable: bool,
    pub banner: Option<String>,
}

/// Where the reported hosts came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoverySource {
    /// The trust store had entries for the key family
    Trusted,
    /// Fallback sweep of the address table
    Sweep {
        /// Addresses probed, responding or not
        candidates: usize,
    },
}

/// Outcome of a discovery run, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryReport {
    pub source: DiscoverySource,
    pub key_family: String,
    pub hosts: Vec<DiscoveredHost>,
}

/// Discovery over injected probing, resolution and process capabilities.
pub struct Discovery<'a> {
    trust_store: PathBuf,
    key_family: String,
    prober: &'a dyn Prober,
    resolver: &'a dyn NameResolver,
    process: &'a dyn ProcessRunner,
}

impl<'a> Discovery<'a> {
    pub fn new(
        trust_store: impl Into<PathBuf>,
        prober: &'a dyn Prober,
        resolver: &'a dyn NameResolver,
        process: &'a dyn ProcessRunner,
    ) -> Self {
        Self {
            trust_store: trust_store.into(),
            key_family: DEFAULT_KEY_FAMILY.to_string(),
            prober,
            resolver,
            process,
        }
    }

    pub fn with_key_family(mut self, key_family: impl Into<String>) -> Self {
        self.key_family = key_family.into();
        self
    }

    /// Probe hosts one at a time, in discovery order.
    pub fn discover(&self) -> DiscoveryReport {
        let entries = trust::load_trust_store(&self.trust_store, &self.key_family);
        tracing::debug!(
            path = %self.trust_store.display(),
            entries = entries.len(),
            "Loaded trust store"
        );

        if entries.is_empty() {
            self.discover_by_sweep()
        } else {
            self.discover_trusted(&entries)
        }
    }

    fn discover_trusted(&self, entries: &[TrustEntry]) -> DiscoveryReport {
        let mut seen = HashSet::new();
        let hosts = entries
            .iter()
            .filter(|entry| seen.insert(entry.host.clone()))
            .map(|entry| {
                let label = host_label(self.resolver, &entry.host);
                let banner = self.prober.probe(&entry.host);
                DiscoveredHost {
                    address: entry.host.clone(),
                    label,
                    reachable: banner.is_some(),
                    banner,
                }
            })
            .collect();

        DiscoveryReport {
            source: DiscoverySource::Trusted,
            key_family: self.key_family.clone(),
            hosts,
        }
    }

    fn discover_by_sweep(&self) -> DiscoveryReport {
        let candidates = sweep::sweep(self.process);
        tracing::debug!(candidates = candidates.len(), "Swept address table");

        let hosts = candidates
            .iter()
            .filter_map(|address| {
                let banner = self.prober.probe(address)?;
                Some(DiscoveredHost {
                    address: address.clone(),
                    label: host_label(self.resolver, address),
                    reachable: true,
                    banner: Some(banner),
                })
            })
            .collect();

        DiscoveryReport {
            source: DiscoverySource::Sweep {
                candidates: candidates.len(),
            },
            key_family: self.key_family.clone(),
            hosts,
        }
    }
}

impl DiscoveryReport {
    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        match self.source {
            DiscoverySource::Trusted => self.render_trusted(out),
            DiscoverySource::Sweep { candidates } => self.render_sweep(candidates, out),
        }
    }

    fn render_trusted(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            format!("Trusted {} hosts (from known_hosts):", self.key_family).bold()
        )?;
        writeln!(out)?;

        for host in &self.hosts {
            let status = match &host.banner {
                Some(banner) => format!("SSH: {banner}").green(),
                None => "SSH: unreachable".red(),
            };
            writeln!(out, "  {}    {}", host.label, status)?;
        }
        Ok(())
    }

    fn render_sweep(&self, candidates: usize, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "No trusted {} hosts found in known_hosts.",
            self.key_family
        )?;
        writeln!(out, "Scanning local network for SSH services...")?;
        writeln!(out)?;

        if candidates == 0 {
            writeln!(out, "  {}", "No hosts found in ARP table.".dimmed())?;
            return Ok(());
        }

        for host in &self.hosts {
            writeln!(out, "  {}", host.label.bold())?;
            if let Some(banner) = &host.banner {
                writeln!(out, "    {}", banner.dimmed())?;
            }
        }

        if self.hosts.is_empty() {
            writeln!(out, "  {}", "No SSH services found on local network.".dimmed())?;
            return Ok(());
        }

        writeln!(out)?;
        writeln!(
            out,
            "{} host(s) with SSH open. Connect with:",
            self.hosts.len().to_string().green().bold()
        )?;
        writeln!(out, "  {}   (to add to known_hosts)", "ssh user@<host>".cyan())?;
        writeln!(out, "  {}      (to verify)", "devsync scan".cyan())?;
        Ok(())
    }
}
