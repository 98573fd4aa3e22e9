use thiserror::Error;

/// Why a single row's text could not become a configuration entry.
///
/// Each variant carries the raw text the user typed so the caller can show
/// it back next to the highlighted field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// Address field is empty or not an IPv6 literal
    #[error("IPv6 address '{0}' missing or invalid")]
    InvalidAddress(String),

    /// Prefix is not a bare decimal in 1-128
    #[error("IPv6 prefix '{0}' is invalid")]
    InvalidPrefix(String),

    /// Gateway is present but not an IPv6 literal
    #[error("IPv6 gateway '{0}' is invalid")]
    InvalidGateway(String),

    /// Route destination is empty or not an IPv6 literal
    #[error("IPv6 route destination '{0}' missing or invalid")]
    InvalidDestination(String),

    /// Route next hop is empty or not an IPv6 literal
    #[error("IPv6 route next hop '{0}' missing or invalid")]
    InvalidNextHop(String),

    /// Route metric is present but not a non-negative integer
    #[error("IPv6 route metric '{0}' is invalid")]
    InvalidMetric(String),

    /// DNS server is not an IPv6 literal
    #[error("IPv6 DNS server '{0}' is invalid")]
    InvalidDnsAddress(String),
}

impl EntryError {
    /// Name of the row field holding the offending text.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidAddress(_) | Self::InvalidDnsAddress(_) => "address",
            Self::InvalidPrefix(_) => "prefix",
            Self::InvalidGateway(_) => "gateway",
            Self::InvalidDestination(_) => "destination",
            Self::InvalidNextHop(_) => "next_hop",
            Self::InvalidMetric(_) => "metric",
        }
    }

    /// The raw text that failed to parse.
    pub fn text(&self) -> &str {
        match self {
            Self::InvalidAddress(text)
            | Self::InvalidPrefix(text)
            | Self::InvalidGateway(text)
            | Self::InvalidDestination(text)
            | Self::InvalidNextHop(text)
            | Self::InvalidMetric(text)
            | Self::InvalidDnsAddress(text) => text,
        }
    }
}
