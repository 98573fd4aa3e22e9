//! Text-to-entry parsers for the three row kinds.
//!
//! Every parser returns `Ok(None)` when all of its inputs are empty: a blank
//! row is skipped, never rejected.

mod address;
mod dns;
mod error;
mod route;

use std::net::Ipv6Addr;

pub use address::parse_address_entry;
pub use dns::parse_dns_entry;
pub use error::EntryError;
pub use route::parse_route_entry;

use crate::settings::{MAX_PREFIX, MIN_PREFIX};

fn parse_ipv6(text: &str) -> Option<Ipv6Addr> {
    text.parse().ok()
}

fn parse_decimal(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Parses a prefix length: bare decimal digits in 1-128.
fn parse_prefix(text: &str) -> Result<u8, EntryError> {
    parse_decimal(text)
        .and_then(|value| u8::try_from(value).ok())
        .filter(|prefix| (MIN_PREFIX..=MAX_PREFIX).contains(prefix))
        .ok_or_else(|| EntryError::InvalidPrefix(text.to_string()))
}
