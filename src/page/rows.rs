//! Editable rows: the raw text of one address, route or DNS server.
//!
//! Each row kind is a small record with named fields, built once when the
//! row is created. Field names double as the keys a UI layer uses when it
//! forwards text edits.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entry::{EntryError, parse_address_entry, parse_dns_entry, parse_route_entry};
use crate::settings::{DnsServer, Ipv6Address, Ipv6Route};

/// Which list a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// Static address rows.
    Address,
    /// DNS server rows.
    Dns,
    /// Static route rows.
    Route,
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKind::Address => write!(f, "address"),
            RowKind::Dns => write!(f, "dns"),
            RowKind::Route => write!(f, "route"),
        }
    }
}

/// A field name that does not exist on the row kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} rows have no field '{name}'")]
pub struct UnknownField {
    /// Row kind that was addressed.
    pub kind: RowKind,
    /// The unrecognized name.
    pub name: String,
}

/// Common behaviour of the three row records.
pub trait Row: Clone + Default + fmt::Debug {
    /// Field selector for this row kind.
    type Field: Copy + fmt::Debug + fmt::Display + FromStr<Err = UnknownField> + 'static;

    /// Configuration entry this row collapses into.
    type Entry;

    /// List this row kind lives in.
    const KIND: RowKind;

    /// Every field in display order.
    const FIELDS: &'static [Self::Field];

    /// Current text of a field.
    fn text(&self, field: Self::Field) -> &str;

    /// Replaces the text of a field.
    fn set_text(&mut self, field: Self::Field, text: String);

    /// True when every field is empty.
    fn is_blank(&self) -> bool;

    /// Parses the row, `Ok(None)` for a blank row.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    fn parse(&self) -> Result<Option<Self::Entry>, EntryError>;

    /// Renders an entry as editable text.
    fn from_entry(entry: &Self::Entry) -> Self;
}

/// Fields of an address row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    /// The address itself.
    Address,
    /// Prefix length.
    Prefix,
    /// Optional gateway.
    Gateway,
}

impl FromStr for AddressField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "address" => Ok(Self::Address),
            "prefix" => Ok(Self::Prefix),
            "gateway" => Ok(Self::Gateway),
            other => Err(UnknownField {
                kind: RowKind::Address,
                name: other.to_string(),
            }),
        }
    }
}

impl AddressField {
    /// Name used in snapshots and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Prefix => "prefix",
            Self::Gateway => "gateway",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw text of an address row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressRow {
    /// Address text.
    pub address: String,
    /// Prefix length text.
    pub prefix: String,
    /// Gateway text, empty for none.
    pub gateway: String,
}

impl Row for AddressRow {
    type Field = AddressField;
    type Entry = Ipv6Address;
    const KIND: RowKind = RowKind::Address;
    const FIELDS: &'static [AddressField] = &[
        AddressField::Address,
        AddressField::Prefix,
        AddressField::Gateway,
    ];

    fn text(&self, field: AddressField) -> &str {
        match field {
            AddressField::Address => &self.address,
            AddressField::Prefix => &self.prefix,
            AddressField::Gateway => &self.gateway,
        }
    }

    fn set_text(&mut self, field: AddressField, text: String) {
        match field {
            AddressField::Address => self.address = text,
            AddressField::Prefix => self.prefix = text,
            AddressField::Gateway => self.gateway = text,
        }
    }

    fn is_blank(&self) -> bool {
        self.address.is_empty() && self.prefix.is_empty() && self.gateway.is_empty()
    }

    fn parse(&self) -> Result<Option<Ipv6Address>, EntryError> {
        parse_address_entry(&self.address, &self.prefix, &self.gateway)
    }

    fn from_entry(entry: &Ipv6Address) -> Self {
        Self {
            address: entry.address.to_string(),
            prefix: entry.prefix.to_string(),
            gateway: entry
                .gateway
                .filter(|gw| !gw.is_unspecified())
                .map(|gw| gw.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Fields of a route row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteField {
    /// Destination network.
    Destination,
    /// Prefix length.
    Prefix,
    /// Next hop.
    NextHop,
    /// Route metric.
    Metric,
}

impl FromStr for RouteField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "destination" => Ok(Self::Destination),
            "prefix" => Ok(Self::Prefix),
            "next_hop" => Ok(Self::NextHop),
            "metric" => Ok(Self::Metric),
            other => Err(UnknownField {
                kind: RowKind::Route,
                name: other.to_string(),
            }),
        }
    }
}

impl RouteField {
    /// Name used in snapshots and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Destination => "destination",
            Self::Prefix => "prefix",
            Self::NextHop => "next_hop",
            Self::Metric => "metric",
        }
    }
}

impl fmt::Display for RouteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw text of a route row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteRow {
    /// Destination text.
    pub destination: String,
    /// Prefix length text.
    pub prefix: String,
    /// Next hop text.
    pub next_hop: String,
    /// Metric text, empty for the default.
    pub metric: String,
}

impl Row for RouteRow {
    type Field = RouteField;
    type Entry = Ipv6Route;
    const KIND: RowKind = RowKind::Route;
    const FIELDS: &'static [RouteField] = &[
        RouteField::Destination,
        RouteField::Prefix,
        RouteField::NextHop,
        RouteField::Metric,
    ];

    fn text(&self, field: RouteField) -> &str {
        match field {
            RouteField::Destination => &self.destination,
            RouteField::Prefix => &self.prefix,
            RouteField::NextHop => &self.next_hop,
            RouteField::Metric => &self.metric,
        }
    }

    fn set_text(&mut self, field: RouteField, text: String) {
        match field {
            RouteField::Destination => self.destination = text,
            RouteField::Prefix => self.prefix = text,
            RouteField::NextHop => self.next_hop = text,
            RouteField::Metric => self.metric = text,
        }
    }

    fn is_blank(&self) -> bool {
        self.destination.is_empty()
            && self.prefix.is_empty()
            && self.next_hop.is_empty()
            && self.metric.is_empty()
    }

    fn parse(&self) -> Result<Option<Ipv6Route>, EntryError> {
        parse_route_entry(&self.destination, &self.prefix, &self.next_hop, &self.metric)
    }

    // A zero prefix or metric renders as an empty field.
    fn from_entry(entry: &Ipv6Route) -> Self {
        let nonzero = |value: u32| {
            if value > 0 {
                value.to_string()
            } else {
                String::new()
            }
        };

        Self {
            destination: entry.destination.to_string(),
            prefix: nonzero(u32::from(entry.prefix)),
            next_hop: entry.next_hop.to_string(),
            metric: nonzero(entry.metric),
        }
    }
}

/// Fields of a DNS row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnsField {
    /// Server address.
    Address,
}

impl FromStr for DnsField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "address" => Ok(Self::Address),
            other => Err(UnknownField {
                kind: RowKind::Dns,
                name: other.to_string(),
            }),
        }
    }
}

impl DnsField {
    /// Name used in snapshots and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Address => "address",
        }
    }
}

impl fmt::Display for DnsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw text of a DNS row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsRow {
    /// Server address text.
    pub address: String,
}

impl Row for DnsRow {
    type Field = DnsField;
    type Entry = DnsServer;
    const KIND: RowKind = RowKind::Dns;
    const FIELDS: &'static [DnsField] = &[DnsField::Address];

    fn text(&self, field: DnsField) -> &str {
        match field {
            DnsField::Address => &self.address,
        }
    }

    fn set_text(&mut self, field: DnsField, text: String) {
        match field {
            DnsField::Address => self.address = text,
        }
    }

    fn is_blank(&self) -> bool {
        self.address.is_empty()
    }

    fn parse(&self) -> Result<Option<DnsServer>, EntryError> {
        parse_dns_entry(&self.address)
    }

    fn from_entry(entry: &DnsServer) -> Self {
        Self {
            address: entry.address.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv6Addr;

    use super::*;

    #[test]
    fn default_rows_are_blank() {
        assert!(AddressRow::default().is_blank());
        assert!(RouteRow::default().is_blank());
        assert!(DnsRow::default().is_blank());
    }

    #[test]
    fn any_text_makes_a_row_non_blank() {
        let mut row = RouteRow::default();
        row.set_text(RouteField::Metric, "10".to_string());

        assert!(!row.is_blank());
        assert_eq!(row.text(RouteField::Metric), "10");
    }

    #[test]
    fn address_row_omits_missing_gateway() {
        let entry = Ipv6Address::new("2001:db8::1".parse().unwrap(), 64, None);

        let row = AddressRow::from_entry(&entry);

        assert_eq!(row.address, "2001:db8::1");
        assert_eq!(row.prefix, "64");
        assert_eq!(row.gateway, "");
    }

    #[test]
    fn address_row_hides_unspecified_gateway() {
        let entry = Ipv6Address {
            address: "2001:db8::1".parse().unwrap(),
            prefix: 64,
            gateway: Some(Ipv6Addr::UNSPECIFIED),
        };

        assert_eq!(AddressRow::from_entry(&entry).gateway, "");
    }

    #[test]
    fn route_row_leaves_zero_metric_empty() {
        let route = Ipv6Route {
            destination: "2001:db8:1::".parse().unwrap(),
            prefix: 48,
            next_hop: "fe80::1".parse().unwrap(),
            metric: 0,
        };

        let row = RouteRow::from_entry(&route);

        assert_eq!(row.prefix, "48");
        assert_eq!(row.metric, "");
        assert_eq!(row.parse().unwrap(), Some(route));
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("gateway".parse::<AddressField>(), Ok(AddressField::Gateway));
        assert_eq!("next_hop".parse::<RouteField>(), Ok(RouteField::NextHop));
        assert_eq!("address".parse::<DnsField>(), Ok(DnsField::Address));

        let err = "metric".parse::<AddressField>().unwrap_err();
        assert_eq!(err.kind, RowKind::Address);
        assert_eq!(err.to_string(), "address rows have no field 'metric'");
    }

    #[test]
    fn field_names_match_display() {
        for field in RouteRow::FIELDS {
            assert_eq!(field.to_string().parse::<RouteField>(), Ok(*field));
        }
        assert_eq!(AddressRow::FIELDS.len(), 3);
    }
}
