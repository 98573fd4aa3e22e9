//! Formatting utilities for CLI output.
//!
//! Renders page state as styled text: one section per list, with the
//! pinned header and footer rows around the entries.

use crate::page::{Editable, Ip6Page, Pinned, Row, RowList, Slot};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats subheaders with styling
pub fn format_subheader(text: &str) -> String {
    format!(
        "{}{}{}{}",
        Colors::BOLD,
        Colors::YELLOW,
        text,
        Colors::RESET
    )
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats success messages with green styling
pub fn format_success(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

/// Renders one row as `field=text` pairs in field order.
///
/// # Examples
///
/// ```
/// use ip6_editor::{cli::formatting::format_row, page::DnsRow};
///
/// let row = DnsRow { address: "2001:db8::53".to_string() };
/// assert_eq!(format_row(&row), "address=2001:db8::53");
/// ```
pub fn format_row<R: Row>(row: &R) -> String {
    R::FIELDS
        .iter()
        .map(|field| format!("{field}={}", row.text(*field)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a list with its pinned rows.
///
/// `automatic` is the position of the switch shown in the list's header,
/// if it has one.
pub fn format_list<R: Row>(
    title: &str,
    list: &RowList<R>,
    editable: bool,
    automatic: Option<bool>,
) -> String {
    let mut lines = vec![if editable {
        format_subheader(title)
    } else {
        format!("{} {}", format_subheader(title), format_description("(read-only)"))
    }];

    for slot in list.layout() {
        let line = match slot {
            Slot::Header(Pinned::AutomaticToggle) | Slot::Footer(Pinned::AutomaticToggle) => {
                format!("  automatic: {}", on_off(automatic.unwrap_or(true)))
            }
            Slot::Entry(id, row) if row.is_blank() => {
                format!("  {id} {}", format_description("(blank)"))
            }
            Slot::Entry(id, row) => format!("  {id} {}", format_row(row)),
            Slot::Header(Pinned::AddButton) | Slot::Footer(Pinned::AddButton) => {
                format!("  {}", format_description("+ add"))
            }
        };
        lines.push(line);
    }

    lines.join("\n")
}

fn format_editable(editable: Editable) -> String {
    let names: Vec<_> = [
        (editable.addresses(), "addresses"),
        (editable.dns(), "dns"),
        (editable.routes(), "routes"),
        (editable.never_default(), "never-default"),
    ]
    .into_iter()
    .filter_map(|(on, name)| on.then_some(name))
    .collect();

    if names.is_empty() {
        "nothing".to_string()
    } else {
        names.join(", ")
    }
}

/// Renders the whole page: method, switches and the three lists.
pub fn format_page(page: &Ip6Page) -> String {
    let state = page.state();
    let policy = state.policy();
    let toggles = state.toggles();
    let editable = page.editable();

    let mut sections = vec![
        format_header(Ip6Page::TITLE),
        format!(
            "  method: {} ({})",
            policy.selected().label(),
            policy.selected()
        ),
        format!("  enabled: {}", on_off(policy.is_enabled())),
        format!("  never default: {}", on_off(toggles.never_default)),
        format!("  editable: {}", format_editable(editable)),
    ];

    sections.push(format_list(
        "Addresses",
        &state.addresses,
        editable.addresses(),
        None,
    ));
    sections.push(format_list(
        "DNS",
        &state.dns,
        editable.dns(),
        Some(toggles.auto_dns),
    ));
    sections.push(format_list(
        "Routes",
        &state.routes,
        editable.routes(),
        Some(toggles.auto_routes),
    ));

    sections.join("\n")
}
