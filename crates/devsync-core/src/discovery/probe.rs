//! Remote-shell connectivity probing
//!
//! Connects to a host with a short timeout and reads the greeting the
//! service sends before authentication. Failure is an ordinary answer here,
//! so probes return `Option` rather than `Result`.

use std::io::Read;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Standard remote-shell port
pub const SSH_PORT: u16 = 22;

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// Upper bound on the bytes read from a greeting
pub const BANNER_READ_LIMIT: usize = 256;

/// Answers "does this host greet us, and with what?"
pub trait Prober {
    /// The trimmed greeting line, or `None` if the host did not send one.
    fn probe(&self, host: &str) -> Option<String>;
}

/// Probes over plain TCP
#[derive(Debug, Clone)]
pub struct TcpProber {
    port: u16,
    timeout: Duration,
}

impl Default for TcpProber {
    fn default() -> Self {
        Self::new(SSH_PORT, DEFAULT_PROBE_TIMEOUT)
    }
}

impl TcpProber {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self { port, timeout }
    }

    fn read_banner(&self, mut stream: TcpStream, addr: SocketAddr) -> Option<String> {
        if let Err(e) = stream.set_read_timeout(Some(self.timeout)) {
            tracing::debug!(%addr, error = %e, "Could not set read timeout");
            return None;
        }

        let mut buf = [0u8; BANNER_READ_LIMIT];
        let read = match stream.read(&mut buf) {
            Ok(n) => n,
            Err(e) => {
                tracing::debug!(%addr, error = %e, "No banner");
                return None;
            }
        };

        let banner = String::from_utf8_lossy(&buf[..read]).trim().to_string();
        (!banner.is_empty()).then_some(banner)
    }
}

impl Prober for TcpProber {
    fn probe(&self, host: &str) -> Option<String> {
        let addrs = match (host, self.port).to_socket_addrs() {
            Ok(addrs) => addrs,
            Err(e) => {
                tracing::debug!(host, error = %e, "Could not resolve host for probing");
                return None;
            }
        };

        for addr in addrs {
            match TcpStream::connect_timeout(&addr, self.timeout) {
                Ok(stream) => return self.read_banner(stream, addr),
                Err(e) => tracing::debug!(%addr, error = %e, "Connect failed"),
            }
        }

        None
    }
}
