use super::{EntryError, parse_decimal, parse_ipv6, parse_prefix};
use crate::settings::Ipv6Route;

/// Parses the text of a route row.
///
/// Unlike an address gateway, the next hop is mandatory. An empty metric
/// means the default metric of 0.
///
/// # Errors
///
/// Fields are checked in order: destination, prefix, next hop, metric.
pub fn parse_route_entry(
    destination: &str,
    prefix: &str,
    next_hop: &str,
    metric: &str,
) -> Result<Option<Ipv6Route>, EntryError> {
    if destination.is_empty() && prefix.is_empty() && next_hop.is_empty() && metric.is_empty() {
        return Ok(None);
    }

    let dest = parse_ipv6(destination)
        .ok_or_else(|| EntryError::InvalidDestination(destination.to_string()))?;
    let prefix = parse_prefix(prefix)?;
    let hop = parse_ipv6(next_hop).ok_or_else(|| EntryError::InvalidNextHop(next_hop.to_string()))?;

    let metric = if metric.is_empty() {
        0
    } else {
        parse_decimal(metric).ok_or_else(|| EntryError::InvalidMetric(metric.to_string()))?
    };

    Ok(Some(Ipv6Route {
        destination: dest,
        prefix,
        next_hop: hop,
        metric,
    }))
}
