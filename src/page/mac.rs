//! Hardware address entry shared by pages that bind a connection to a device.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Ethernet addresses devices report when they have no real one.
const PLACEHOLDERS: [[u8; 6]; 4] = [
    [0xff, 0xff, 0xff, 0xff, 0xff, 0xff],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x44, 0x44, 0x44, 0x44, 0x44, 0x44],
    // prism54 dummy
    [0x00, 0x30, 0xb4, 0x00, 0x00, 0x00],
];

/// Hardware address text that is not usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MacError {
    /// Not six colon-separated hex octets
    #[error("invalid hardware address '{0}'")]
    Malformed(String),

    /// Well formed, but a broadcast, placeholder or multicast address
    #[error("hardware address '{0}' cannot identify a device")]
    Unusable(String),
}

/// An Ethernet hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Raw octets.
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// True for addresses with the group bit set.
    pub fn is_multicast(&self) -> bool {
        self.0[0] & 1 == 1
    }

    /// True unless the address is multicast or a known placeholder.
    pub fn is_usable(&self) -> bool {
        !self.is_multicast() && !PLACEHOLDERS.contains(&self.0)
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

impl FromStr for MacAddress {
    type Err = MacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MacError::Malformed(s.to_string());

        let mut octets = [0u8; 6];
        let mut parts = s.split(':');
        for octet in &mut octets {
            let part = parts.next().ok_or_else(malformed)?;
            let hex_digits = part.bytes().all(|b| b.is_ascii_hexdigit());
            if part.is_empty() || part.len() > 2 || !hex_digits {
                return Err(malformed());
            }
            *octet = u8::from_str_radix(part, 16).map_err(|_| malformed())?;
        }

        if parts.next().is_some() {
            return Err(malformed());
        }

        Ok(Self(octets))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// Parses a device entry such as `"00:11:22:33:44:55 (eth0)"`.
///
/// Anything after the first space is a label and ignored. Empty text means
/// no address was chosen.
///
/// # Errors
///
/// Returns [`MacError`] for malformed text or an address that cannot
/// identify a device.
pub fn parse_mac_entry(text: &str) -> Result<Option<MacAddress>, MacError> {
    if text.is_empty() {
        return Ok(None);
    }

    let address = text.split_once(' ').map_or(text, |(address, _)| address);
    let mac: MacAddress = address.parse()?;

    if !mac.is_usable() {
        return Err(MacError::Unusable(address.to_string()));
    }

    Ok(Some(mac))
}
