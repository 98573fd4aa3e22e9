//! Unit tests for CLI module
//!
//! Tests argument parsing and output formatting. No files are touched.

use clap::Parser;

use crate::{
    cli::{
        Cli, Command, Commands, SchemaCommand,
        formatting::{Colors, format_error, format_list, format_page, format_row},
    },
    page::{AddressRow, DnsRow, Ip6Page, Pinned, RowList},
    settings::{DnsServer, Ip6Method, Ip6Settings},
};

#[test]
fn parses_apply_with_global_config() {
    let cli = Cli::try_parse_from([
        "ip6-editor",
        "apply",
        "wired.toml",
        "page.toml",
        "--config",
        "custom.toml",
    ])
    .unwrap();

    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("custom.toml")));
    assert_eq!(
        cli.command,
        Commands::Apply {
            settings: "wired.toml".into(),
            page: "page.toml".into(),
        }
    );
}

#[test]
fn apply_requires_both_files() {
    assert!(Cli::try_parse_from(["ip6-editor", "apply", "wired.toml"]).is_err());
}

#[test]
fn format_row_lists_fields_in_order() {
    let row = AddressRow {
        address: "2001:db8::1".to_string(),
        prefix: "64".to_string(),
        gateway: String::new(),
    };

    assert_eq!(format_row(&row), "address=2001:db8::1 prefix=64 gateway=");
}

#[test]
fn format_list_shows_pinned_rows() {
    let mut list = RowList::new().with_header(Pinned::AutomaticToggle);
    list.append(DnsRow {
        address: "2001:db8::53".to_string(),
    });
    list.append_blank();

    let text = format_list("DNS", &list, true, Some(false));
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], "  automatic: off");
    assert_eq!(lines[2], "  #0 address=2001:db8::53");
    assert!(lines[3].starts_with("  #1 "));
    assert!(lines[4].contains("+ add"));
}

#[test]
fn read_only_lists_are_marked() {
    let list: RowList<DnsRow> = RowList::new();

    let text = format_list("DNS", &list, false, None);

    assert!(text.lines().next().unwrap().contains("(read-only)"));
}

#[test]
fn format_page_reports_editability() {
    let settings = Ip6Settings {
        method: Ip6Method::LinkLocalOnly,
        dns: vec![DnsServer::from("fe80::53".parse::<std::net::Ipv6Addr>().unwrap())],
        ..Ip6Settings::default()
    };

    let text = format_page(&Ip6Page::new(&settings));

    assert!(text.contains("method: "));
    assert!(text.contains("(link-local)"));
    assert!(text.contains("editable: nothing"));
    assert!(text.contains("address=fe80::53"));
}

#[test]
fn format_error_is_wrapped_in_color() {
    let text = format_error("boom");

    assert!(text.starts_with(Colors::BOLD));
    assert!(text.contains("boom"));
    assert!(text.ends_with(Colors::RESET));
}

#[test]
fn schema_is_json() {
    let output = SchemaCommand.execute().unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert!(value.get("properties").is_some());
}
