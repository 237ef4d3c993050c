//! Client identity used to partition rate-limiting state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;

/// How a peer address is turned into a client identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityPolicy {
    /// Host-only IP. Every connection from one host (or NAT) shares a bucket.
    #[default]
    PeerIp,
    /// Full `ip:port`. Every connection is its own client.
    PeerAddr,
}

impl IdentityPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityPolicy::PeerIp => "peer_ip",
            IdentityPolicy::PeerAddr => "peer_addr",
        }
    }
}

impl fmt::Display for IdentityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Key of a registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientIdentity(String);

impl ClientIdentity {
    /// Shared identity for requests whose peer address is unavailable.
    pub const UNKNOWN: &'static str = "unknown";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Derives the identity of a peer under the given policy.
    pub fn from_peer(addr: SocketAddr, policy: IdentityPolicy) -> Self {
        match policy {
            IdentityPolicy::PeerIp => Self(addr.ip().to_string()),
            IdentityPolicy::PeerAddr => Self(addr.to_string()),
        }
    }

    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
