//! IPv6 connection setting edited by the page.
//!
//! [`Ip6Settings`] is owned by whoever persists the connection. The page
//! borrows it for one edit session and replaces its address, DNS and route
//! sequences wholesale on a successful commit.

mod method;
mod storage;
mod verify;

use std::net::Ipv6Addr;

use serde::{Deserialize, Deserializer, Serialize};

pub use method::{Ip6Method, UnknownMethod};
pub use verify::VerifyError;

/// Smallest prefix length an address or route may carry.
pub const MIN_PREFIX: u8 = 1;

/// Largest prefix length an IPv6 address or route may carry.
pub const MAX_PREFIX: u8 = 128;

/// IPv6 setting of a connection profile.
///
/// Field order matters for TOML output: plain values come before the
/// arrays of tables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ip6Settings {
    /// How addresses are obtained.
    #[serde(default)]
    pub method: Ip6Method,

    /// Ignore DNS servers learned automatically.
    #[serde(default)]
    pub ignore_auto_dns: bool,

    /// Ignore routes learned automatically.
    #[serde(default)]
    pub ignore_auto_routes: bool,

    /// Never use this connection for the default route.
    #[serde(default)]
    pub never_default: bool,

    /// DNS servers in priority order.
    #[serde(default)]
    pub dns: Vec<DnsServer>,

    /// Statically configured addresses.
    #[serde(default)]
    pub addresses: Vec<Ipv6Address>,

    /// Statically configured routes.
    #[serde(default)]
    pub routes: Vec<Ipv6Route>,
}

/// IPv6 address with prefix length and optional gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipv6Address {
    /// The IPv6 address.
    pub address: Ipv6Addr,
    /// Network prefix length in bits (1-128).
    pub prefix: u8,
    /// Gateway for this address. Never the unspecified address.
    #[serde(
        default,
        deserialize_with = "specified_gateway",
        skip_serializing_if = "Option::is_none"
    )]
    pub gateway: Option<Ipv6Addr>,
}

impl Ipv6Address {
    /// Creates an address entry, treating an unspecified gateway as none.
    pub fn new(address: Ipv6Addr, prefix: u8, gateway: Option<Ipv6Addr>) -> Self {
        Self {
            address,
            prefix,
            gateway: gateway.filter(|gw| !gw.is_unspecified()),
        }
    }
}

// `::` in a stored setting means no gateway.
fn specified_gateway<'de, D>(deserializer: D) -> Result<Option<Ipv6Addr>, D::Error>
where
    D: Deserializer<'de>,
{
    let gateway = Option::<Ipv6Addr>::deserialize(deserializer)?;
    Ok(gateway.filter(|gw| !gw.is_unspecified()))
}

/// IPv6 route entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipv6Route {
    /// Destination network address.
    pub destination: Ipv6Addr,
    /// Network prefix length in bits (1-128).
    pub prefix: u8,
    /// Next hop for this route.
    pub next_hop: Ipv6Addr,
    /// Route metric for priority ordering (lower is higher priority).
    #[serde(default)]
    pub metric: u32,
}

/// A DNS server address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DnsServer {
    /// Server address.
    pub address: Ipv6Addr,
}

impl From<Ipv6Addr> for DnsServer {
    fn from(address: Ipv6Addr) -> Self {
        Self { address }
    }
}
