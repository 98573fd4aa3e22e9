use super::{EntryError, parse_ipv6, parse_prefix};
use crate::settings::Ipv6Address;

/// Parses the text of an address row.
///
/// The gateway is optional. A gateway of `::` is accepted and dropped, so
/// the entry carries no gateway rather than an unspecified one.
///
/// # Errors
///
/// Fields are checked in order: address, prefix, gateway. The first invalid
/// one is reported.
pub fn parse_address_entry(
    address: &str,
    prefix: &str,
    gateway: &str,
) -> Result<Option<Ipv6Address>, EntryError> {
    if address.is_empty() && prefix.is_empty() && gateway.is_empty() {
        return Ok(None);
    }

    let addr = parse_ipv6(address).ok_or_else(|| EntryError::InvalidAddress(address.to_string()))?;
    let prefix = parse_prefix(prefix)?;

    let gateway = if gateway.is_empty() {
        None
    } else {
        Some(parse_ipv6(gateway).ok_or_else(|| EntryError::InvalidGateway(gateway.to_string()))?)
    };

    Ok(Some(Ipv6Address::new(addr, prefix, gateway)))
}

#[cfg(test)]
mod tests {
    use std::net::Ipv6Addr;

    use super::*;

    #[test]
    fn blank_row_is_skipped() {
        assert_eq!(parse_address_entry("", "", ""), Ok(None));
    }

    #[test]
    fn address_without_gateway() {
        let entry = parse_address_entry("2001:db8::1", "64", "").unwrap().unwrap();

        assert_eq!(entry.address, "2001:db8::1".parse::<Ipv6Addr>().unwrap());
        assert_eq!(entry.prefix, 64);
        assert_eq!(entry.gateway, None);
    }

    #[test]
    fn address_with_gateway() {
        let entry = parse_address_entry("2001:db8::10", "48", "fe80::1").unwrap().unwrap();

        assert_eq!(entry.gateway, Some("fe80::1".parse().unwrap()));
    }

    #[test]
    fn unspecified_gateway_is_normalized_away() {
        let entry = parse_address_entry("2001:db8::10", "64", "::").unwrap().unwrap();

        assert_eq!(entry.gateway, None);
    }

    #[test]
    fn ipv4_mapped_literal_is_an_ipv6_address() {
        assert!(parse_address_entry("::ffff:192.0.2.1", "128", "").unwrap().is_some());
    }

    #[test]
    fn invalid_fields_are_reported_in_order() {
        assert_eq!(
            parse_address_entry("192.0.2.1", "999", "nope"),
            Err(EntryError::InvalidAddress("192.0.2.1".to_string()))
        );
        assert_eq!(
            parse_address_entry("", "64", ""),
            Err(EntryError::InvalidAddress(String::new()))
        );
        assert_eq!(
            parse_address_entry("2001:db8::1", "0", "nope"),
            Err(EntryError::InvalidPrefix("0".to_string()))
        );
        assert_eq!(
            parse_address_entry("2001:db8::1", "", ""),
            Err(EntryError::InvalidPrefix(String::new()))
        );
        assert_eq!(
            parse_address_entry("2001:db8::1", "64", "fe80::1%eth0"),
            Err(EntryError::InvalidGateway("fe80::1%eth0".to_string()))
        );
    }

    #[test]
    fn invalid_prefix_wins_over_valid_neighbours() {
        for prefix in ["129", "abc", "64/", "1e2"] {
            assert_eq!(
                parse_address_entry("2001:db8::1", prefix, "2001:db8::fffe"),
                Err(EntryError::InvalidPrefix(prefix.to_string()))
            );
        }
    }
}
