use super::{EntryError, parse_ipv6};
use crate::settings::DnsServer;

/// Parses the text of a DNS row. Empty text is a blank row.
///
/// # Errors
///
/// Returns [`EntryError::InvalidDnsAddress`] if the text is not an IPv6 literal.
pub fn parse_dns_entry(address: &str) -> Result<Option<DnsServer>, EntryError> {
    if address.is_empty() {
        return Ok(None);
    }

    parse_ipv6(address)
        .map(|addr| Some(DnsServer::from(addr)))
        .ok_or_else(|| EntryError::InvalidDnsAddress(address.to_string()))
}
