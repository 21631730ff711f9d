//! Destination endpoint resolution.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs};

use crate::error::{ConsoleError, ConsoleResult};

/// The device address datagrams are sent to.
///
/// Resolved once at startup and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    host: String,
    addr: SocketAddr,
}

impl Destination {
    /// Resolve `host` (a name or literal address) and `port`.
    ///
    /// The first address returned by the resolver is used.
    pub fn resolve(host: &str, port: u16) -> ConsoleResult<Self> {
        let mut addrs = (host, port)
            .to_socket_addrs()
            .map_err(|source| ConsoleError::Resolve {
                host: host.to_string(),
                source,
            })?;

        let addr = addrs.next().ok_or_else(|| ConsoleError::NoAddress {
            host: host.to_string(),
        })?;

        Ok(Destination {
            host: host.to_string(),
            addr,
        })
    }

    /// Use an already resolved socket address.
    pub fn from_addr(addr: SocketAddr) -> Self {
        Destination {
            host: addr.ip().to_string(),
            addr,
        }
    }

    /// Host as originally given.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Resolved socket address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Wildcard local address with an ephemeral port, in the same address
    /// family as the destination.
    pub fn local_bind_addr(&self) -> SocketAddr {
        match self.addr {
            SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
            SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host == self.addr.ip().to_string() {
            write!(f, "{}", self.addr)
        } else {
            write!(f, "{} ({})", self.host, self.addr)
        }
    }
}
