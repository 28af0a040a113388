use crate::DomainError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// A resolver to probe, identified by its socket address.
///
/// Accepts `192.0.2.1`, `2001:db8::1`, `192.0.2.1:5353` and `[2001:db8::1]:5353`.
/// Hostnames are rejected: the probe talks to resolvers by address only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResolverAddress(SocketAddr);

impl ResolverAddress {
    pub fn new(ip: IpAddr, port: u16) -> Self {
        Self(SocketAddr::new(ip, port))
    }

    pub fn socket_addr(&self) -> SocketAddr {
        self.0
    }

    pub fn ip(&self) -> IpAddr {
        self.0.ip()
    }

    pub fn port(&self) -> u16 {
        self.0.port()
    }

    /// Replace the port, used when the configured port differs from 53.
    pub fn with_port(self, port: u16) -> Self {
        Self(SocketAddr::new(self.0.ip(), port))
    }

    /// Parse a resolver, falling back to `default_port` when none is given.
    pub fn parse_with_port(s: &str, default_port: u16) -> Result<Self, DomainError> {
        let s = s.trim();

        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(Self::new(ip, default_port));
        }

        s.parse::<SocketAddr>()
            .map(Self)
            .map_err(|_| DomainError::InvalidResolverAddress(s.to_string()))
    }
}

impl FromStr for ResolverAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_port(s, DEFAULT_DNS_PORT)
    }
}

impl From<SocketAddr> for ResolverAddress {
    fn from(addr: SocketAddr) -> Self {
        Self(addr)
    }
}

impl fmt::Display for ResolverAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.port() == DEFAULT_DNS_PORT {
            write!(f, "{}", self.0.ip())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for ResolverAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
