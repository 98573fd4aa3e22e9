//! Commit behaviour of the IPv6 page across all three lists.

#![allow(clippy::panic)]

use std::net::Ipv6Addr;

use futures::StreamExt;

use crate::{
    config::HiddenListPolicy,
    page::{
        AddressField, ConfigReconciler, ConnectionPage, DnsField, EntryError, Ip6Page, PageError,
        RouteField, RowKind,
    },
    settings::{DnsServer, Ip6Method, Ip6Settings, Ipv6Address, Ipv6Route},
};

fn ip(text: &str) -> Ipv6Addr {
    text.parse().unwrap()
}

fn populated() -> Ip6Settings {
    Ip6Settings {
        method: Ip6Method::Manual,
        ignore_auto_dns: true,
        ignore_auto_routes: false,
        never_default: true,
        dns: vec![
            DnsServer::from(ip("2001:4860:4860::8888")),
            DnsServer::from(ip("2001:4860:4860::8844")),
        ],
        addresses: vec![
            Ipv6Address::new(ip("2001:db8::1"), 64, None),
            Ipv6Address::new(ip("2001:db8:0:1::1"), 64, Some(ip("2001:db8:0:1::fe"))),
        ],
        routes: vec![
            Ipv6Route {
                destination: ip("2001:db8:100::"),
                prefix: 48,
                next_hop: ip("2001:db8::fe"),
                metric: 0,
            },
            Ipv6Route {
                destination: ip("::"),
                prefix: 1,
                next_hop: ip("fe80::1"),
                metric: 1024,
            },
        ],
    }
}

#[test]
fn unedited_page_round_trips() {
    for settings in [populated(), Ip6Settings::default()] {
        let reconciler = ConfigReconciler::default();
        let state = reconciler.expand(&settings);

        assert_eq!(reconciler.collapse(&state).unwrap(), settings);
    }
}

#[test]
fn loaded_unspecified_gateway_round_trips() {
    let settings: Ip6Settings = toml::from_str(
        r#"
        method = "manual"

        [[addresses]]
        address = "2001:db8::1"
        prefix = 64
        gateway = "::"
        "#,
    )
    .unwrap();
    let reconciler = ConfigReconciler::default();

    let collapsed = reconciler.collapse(&reconciler.expand(&settings)).unwrap();

    assert_eq!(collapsed, settings);
    assert_eq!(collapsed.addresses[0].gateway, None);
}

#[test]
fn expanded_rows_show_entry_text() {
    let page = Ip6Page::new(&populated());
    let state = page.state();

    let addresses: Vec<_> = state.addresses.rows().map(|(_, row)| row.clone()).collect();
    assert_eq!(addresses[0].address, "2001:db8::1");
    assert_eq!(addresses[0].prefix, "64");
    assert_eq!(addresses[0].gateway, "");
    assert_eq!(addresses[1].gateway, "2001:db8:0:1::fe");

    let routes: Vec<_> = state.routes.rows().map(|(_, row)| row.clone()).collect();
    assert_eq!(routes[0].metric, "");
    assert_eq!(routes[1].metric, "1024");
}

#[test]
fn out_of_range_prefix_refuses_commit() {
    let original = Ip6Settings {
        method: Ip6Method::Manual,
        addresses: vec![Ipv6Address::new(ip("2001:db8::1"), 64, None)],
        ..Ip6Settings::default()
    };
    let mut setting = original.clone();
    let mut page = Ip6Page::new(&setting);
    let id = page.state().addresses.rows().next().map(|(id, _)| id).unwrap();
    page.state_mut()
        .addresses
        .set_text(id, AddressField::Prefix, "129");

    let err = page.validate(&mut setting).unwrap_err();

    let failure = match err {
        PageError::Validation(failure) => failure,
        other => panic!("expected a row failure, got {other}"),
    };
    assert_eq!(failure.kind, RowKind::Address);
    assert_eq!(failure.index, 0);
    assert_eq!(failure.reason, EntryError::InvalidPrefix("129".to_string()));
    assert_eq!(setting, original);
}

#[test]
fn one_bad_row_among_many_changes_nothing() {
    let original = populated();
    let mut setting = original.clone();
    let mut page = Ip6Page::new(&setting);
    let state = page.state_mut();

    let dns = state.dns.append_blank();
    state.dns.set_text(dns, DnsField::Address, "2001:db8::53");
    let route = state.routes.rows().nth(1).map(|(id, _)| id).unwrap();
    state.routes.set_text(route, RouteField::Metric, "12abc");

    let err = page.validate(&mut setting).unwrap_err();

    assert_eq!(
        err.to_string(),
        "route row 2: IPv6 route metric '12abc' is invalid"
    );
    assert_eq!(setting, original);
}

#[test]
fn blank_dns_row_commits_empty_list() {
    let mut setting = Ip6Settings::default();
    let page = Ip6Page::new(&setting);
    assert_eq!(page.state().dns.len(), 1);

    page.validate(&mut setting).unwrap();

    assert!(setting.dns.is_empty());
}

#[test]
fn route_without_next_hop_is_rejected() {
    let mut setting = Ip6Settings::default();
    let mut page = Ip6Page::new(&setting);
    let state = page.state_mut();
    let id = state.routes.rows().next().map(|(id, _)| id).unwrap();
    state.routes.set_text(id, RouteField::Destination, "2001:db8:1::");
    state.routes.set_text(id, RouteField::Prefix, "48");

    let err = page.validate(&mut setting).unwrap_err();

    assert!(matches!(
        err,
        PageError::Validation(ref failure) if failure.reason == EntryError::InvalidNextHop(String::new())
    ));
}

#[test]
fn rows_commit_in_row_order() {
    let mut setting = populated();
    let mut page = Ip6Page::new(&setting);
    let state = page.state_mut();
    let first = state.dns.rows().next().map(|(id, _)| id).unwrap();
    let removed = state.dns.remove(first).unwrap();
    state.dns.append(removed);

    page.validate(&mut setting).unwrap();

    assert_eq!(
        setting.dns,
        [
            DnsServer::from(ip("2001:4860:4860::8844")),
            DnsServer::from(ip("2001:4860:4860::8888")),
        ]
    );
}

#[test]
fn shared_keeps_lists_by_default() {
    let settings = Ip6Settings {
        method: Ip6Method::Shared,
        routes: populated().routes,
        ..Ip6Settings::default()
    };
    let reconciler = ConfigReconciler::default();

    let collapsed = reconciler.collapse(&reconciler.expand(&settings)).unwrap();

    assert_eq!(collapsed.method, Ip6Method::Shared);
    assert_eq!(collapsed.routes.len(), 2);
}

#[test]
fn disabling_with_clear_policy_commits_empty_lists() {
    let mut setting = populated();
    let mut page =
        Ip6Page::with_reconciler(&setting, ConfigReconciler::new(HiddenListPolicy::Clear));
    page.state_mut().set_enabled(false);

    page.validate(&mut setting).unwrap();

    assert_eq!(setting.method, Ip6Method::Disabled);
    assert!(setting.addresses.is_empty());
    assert!(setting.dns.is_empty());
    assert!(setting.routes.is_empty());
    assert!(setting.never_default);
}

#[test]
fn disabling_with_retain_policy_fails_verification() {
    let mut setting = populated();
    let mut page = Ip6Page::new(&setting);
    page.state_mut().set_enabled(false);

    let err = page.validate(&mut setting).unwrap_err();

    assert!(matches!(err, PageError::Verify(_)));
    assert_eq!(setting, populated());
}

#[test]
fn editability_follows_effective_method() {
    let mut page = Ip6Page::new(&populated());
    assert!(page.editable().addresses());

    page.state_mut().select_method(Ip6Method::DhcpOnly).unwrap();
    let editable = page.editable();
    assert!(!editable.addresses());
    assert!(editable.dns());
    assert!(editable.never_default());

    page.state_mut().set_enabled(false);
    assert!(page.editable().is_empty());
}

#[tokio::test]
async fn edits_are_announced() {
    let mut page = Ip6Page::new(&Ip6Settings::default());
    let start = page.base().revision();

    page.state_mut().set_auto_routes(false);
    let id = page.state_mut().addresses.append_blank();
    page.state_mut()
        .addresses
        .set_text(id, AddressField::Address, "2001:db8::9");

    let mut changes = Box::pin(page.changes());
    assert_eq!(changes.next().await, Some(start + 3));
}
