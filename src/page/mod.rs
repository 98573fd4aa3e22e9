//! Connection editor pages.
//!
//! The IPv6 page keeps three lists of text rows (addresses, DNS servers and
//! routes) alongside the method selector and switches. Rows are expanded
//! from an [`Ip6Settings`](crate::settings::Ip6Settings) and collapsed back
//! into a new one on commit; a single bad row refuses the whole commit.

mod base;
pub mod entry;
mod error;
mod ip6;
mod list;
pub mod mac;
mod policy;
mod reconcile;
pub mod rows;
mod snapshot;

#[cfg(test)]
mod tests;

pub use base::{ConnectionPage, PageBase};
pub use entry::{EntryError, parse_address_entry, parse_dns_entry, parse_route_entry};
pub use error::{PageError, ValidationError};
pub use ip6::Ip6Page;
pub use list::{Pinned, RowId, RowList, Slot};
pub use mac::{MacAddress, MacError, parse_mac_entry};
pub use policy::{Editable, MethodPolicy};
pub use reconcile::{ConfigReconciler, PageState, Toggles};
pub use rows::{
    AddressField, AddressRow, DnsField, DnsRow, Row, RouteField, RouteRow, RowKind, UnknownField,
};
pub use snapshot::PageSnapshot;
