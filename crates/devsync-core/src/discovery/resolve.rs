//! Best-effort reverse name resolution for labeling hosts

use std::net::IpAddr;

/// Looks up a display name for a host. Any failure is `None`.
pub trait NameResolver {
    fn reverse(&self, host: &str) -> Option<String>;
}

/// Resolves through the system resolver.
///
/// Host names are resolved forward first; the first address is then looked
/// up in reverse.
#[derive(Debug, Default, Clone, Copy)]
pub struct DnsResolver;

impl NameResolver for DnsResolver {
    fn reverse(&self, host: &str) -> Option<String> {
        let ip = match host.parse::<IpAddr>() {
            Ok(ip) => ip,
            Err(_) => dns_lookup::lookup_host(host).ok()?.into_iter().next()?,
        };

        match dns_lookup::lookup_addr(&ip) {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::debug!(host, error = %e, "Reverse lookup failed");
                None
            }
        }
    }
}

/// `addr (name)` when the resolver knows a different name, else `addr`.
pub fn host_label(resolver: &dyn NameResolver, address: &str) -> String {
    match resolver.reverse(address) {
        Some(name) if name != address => format!("{address} ({name})"),
        _ => address.to_string(),
    }
}
