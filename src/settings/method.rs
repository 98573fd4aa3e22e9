//! IPv6 configuration methods.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the connection obtains its IPv6 configuration.
///
/// Serialized with NetworkManager's method names so settings files read the
/// same as `ipv6.method` in a keyfile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Ip6Method {
    /// Router advertisements with DHCPv6 when the router asks for it.
    #[default]
    #[serde(rename = "auto")]
    Automatic,
    /// DHCPv6 only, router advertisements ignored for addressing.
    #[serde(rename = "dhcp")]
    DhcpOnly,
    /// Statically configured addresses.
    #[serde(rename = "manual")]
    Manual,
    /// Only a link-local address is configured.
    #[serde(rename = "link-local")]
    LinkLocalOnly,
    /// The connection is shared with other hosts.
    #[serde(rename = "shared")]
    Shared,
    /// IPv6 is not configured on this connection.
    #[serde(rename = "ignore")]
    Disabled,
}

/// Returned when a method name is not one NetworkManager knows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown IPv6 method '{0}'")]
pub struct UnknownMethod(pub String);

impl Ip6Method {
    /// Methods the selector offers, in display order.
    ///
    /// Shared and Disabled are reached only through a loaded setting or the
    /// enable switch.
    pub const SELECTABLE: [Ip6Method; 4] = [
        Ip6Method::Automatic,
        Ip6Method::DhcpOnly,
        Ip6Method::Manual,
        Ip6Method::LinkLocalOnly,
    ];

    /// NetworkManager's name for this method.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Automatic => "auto",
            Self::DhcpOnly => "dhcp",
            Self::Manual => "manual",
            Self::LinkLocalOnly => "link-local",
            Self::Shared => "shared",
            Self::Disabled => "ignore",
        }
    }

    /// Human-readable label shown by the method selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Automatic => "Automatic",
            Self::DhcpOnly => "Automatic, DHCP only",
            Self::Manual => "Manual",
            Self::LinkLocalOnly => "Link-Local Only",
            Self::Shared => "Shared",
            Self::Disabled => "Disabled",
        }
    }

    /// Whether the method selector can place this method directly.
    pub fn is_selectable(self) -> bool {
        Self::SELECTABLE.contains(&self)
    }
}

impl fmt::Display for Ip6Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ip6Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Automatic),
            "dhcp" => Ok(Self::DhcpOnly),
            "manual" => Ok(Self::Manual),
            "link-local" => Ok(Self::LinkLocalOnly),
            "shared" => Ok(Self::Shared),
            "ignore" => Ok(Self::Disabled),
            other => Err(UnknownMethod(other.to_string())),
        }
    }
}
