//! Connectivity probe consulted before best-effort background syncs.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Answers whether the backend is currently reachable.
pub trait Connectivity: Send + Sync {
    fn is_connected(&self) -> bool;
}

/// Cheap reachability check: can a TCP connection be opened to the API host?
#[derive(Debug, Clone)]
pub struct TcpProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: Duration::from_secs(2),
        }
    }

    /// Derive the probe target from an API base URL, defaulting to port 443.
    pub fn from_base_url(base_url: &str) -> Self {
        let without_scheme = base_url
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        let host_port = without_scheme.split('/').next().unwrap_or(without_scheme);
        match host_port.rsplit_once(':') {
            Some((host, port)) => match port.parse() {
                Ok(port) => Self::new(host, port),
                Err(_) => Self::new(host_port, 443),
            },
            None => Self::new(host_port, 443),
        }
    }
}

impl Connectivity for TcpProbe {
    fn is_connected(&self) -> bool {
        let address = (self.host.as_str(), self.port);
        let Ok(mut candidates) = address.to_socket_addrs() else {
            return false;
        };
        candidates.any(|addr| TcpStream::connect_timeout(&addr, self.timeout).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_target_derived_from_base_url() {
        let probe = TcpProbe::from_base_url("https://api.example.com/v1");
        assert_eq!(probe.host, "api.example.com");
        assert_eq!(probe.port, 443);

        let probe = TcpProbe::from_base_url("http://10.0.0.5:8080");
        assert_eq!(probe.host, "10.0.0.5");
        assert_eq!(probe.port, 8080);
    }
}
