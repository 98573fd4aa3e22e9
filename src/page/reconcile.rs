//! Conversion between a stored [`Ip6Settings`] and editable page state.
//!
//! [`ConfigReconciler::expand`] turns entries into row text;
//! [`ConfigReconciler::collapse`] parses every row back. Collapse is
//! all-or-nothing: the first bad row aborts it and nothing is produced.

use futures::stream::Stream;
use tracing::{debug, warn};

use super::{
    PageError, ValidationError,
    list::{Pinned, RowList},
    policy::{Editable, MethodPolicy},
    rows::{AddressRow, DnsRow, Row, RouteRow},
};
use crate::{
    common::Property,
    config::HiddenListPolicy,
    settings::{Ip6Method, Ip6Settings},
};

/// Positions of the page's switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggles {
    /// Use DNS servers learned automatically.
    pub auto_dns: bool,
    /// Use routes learned automatically.
    pub auto_routes: bool,
    /// Never use this connection for the default route.
    pub never_default: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self::from_settings(&Ip6Settings::default())
    }
}

impl Toggles {
    /// Switch positions shown for a stored setting.
    pub fn from_settings(settings: &Ip6Settings) -> Self {
        Self {
            auto_dns: !settings.ignore_auto_dns,
            auto_routes: !settings.ignore_auto_routes,
            never_default: settings.never_default,
        }
    }
}

/// Everything the user can edit on the page.
///
/// The three lists and the page's own setters publish to one revision
/// counter, so a single stream reports any change.
#[derive(Debug)]
pub struct PageState {
    /// Static addresses.
    pub addresses: RowList<AddressRow>,
    /// DNS servers.
    pub dns: RowList<DnsRow>,
    /// Static routes.
    pub routes: RowList<RouteRow>,
    policy: MethodPolicy,
    toggles: Toggles,
    revision: Property<u64>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(MethodPolicy::default(), Toggles::default())
    }
}

impl PageState {
    /// Empty lists with their pinned rows, sharing a fresh revision counter.
    pub fn new(policy: MethodPolicy, toggles: Toggles) -> Self {
        let revision = Property::new(0);

        Self {
            addresses: RowList::with_revision(revision.clone()),
            dns: RowList::with_revision(revision.clone()).with_header(Pinned::AutomaticToggle),
            routes: RowList::with_revision(revision.clone())
                .with_header(Pinned::AutomaticToggle),
            policy,
            toggles,
            revision,
        }
    }

    /// Method selector and enable switch.
    pub fn policy(&self) -> MethodPolicy {
        self.policy
    }

    /// Handles a selection from the method selector.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MethodNotSelectable`] for Shared and Disabled;
    /// the page is left unchanged.
    pub fn select_method(&mut self, method: Ip6Method) -> Result<(), PageError> {
        self.policy.select(method)?;
        self.notify();
        Ok(())
    }

    /// Handles the enable switch.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.policy.set_enabled(enabled);
        self.notify();
    }

    /// Lists the user may currently edit.
    pub fn editable(&self) -> Editable {
        self.policy.editable()
    }

    /// Current switch positions.
    pub fn toggles(&self) -> Toggles {
        self.toggles
    }

    /// Flips the automatic DNS switch.
    pub fn set_auto_dns(&mut self, on: bool) {
        self.toggles.auto_dns = on;
        self.notify();
    }

    /// Flips the automatic routes switch.
    pub fn set_auto_routes(&mut self, on: bool) {
        self.toggles.auto_routes = on;
        self.notify();
    }

    /// Flips the never-default switch.
    pub fn set_never_default(&mut self, on: bool) {
        self.toggles.never_default = on;
        self.notify();
    }

    /// Current revision; bumped by every edit.
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Stream of revisions, starting with the current one.
    pub fn changes(&self) -> impl Stream<Item = u64> + Send {
        self.revision.watch()
    }

    pub(crate) fn revision_handle(&self) -> Property<u64> {
        self.revision.clone()
    }

    fn notify(&self) {
        self.revision.update(|revision| *revision = revision.wrapping_add(1));
    }
}

/// Converts between settings and page state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigReconciler {
    hidden_lists: HiddenListPolicy,
}

impl ConfigReconciler {
    /// Creates a reconciler applying `hidden_lists` on collapse.
    pub fn new(hidden_lists: HiddenListPolicy) -> Self {
        Self { hidden_lists }
    }

    /// Handling of lists hidden by Shared and Disabled.
    pub fn hidden_lists(&self) -> HiddenListPolicy {
        self.hidden_lists
    }

    /// Builds page state for a stored setting.
    ///
    /// Each list gets one row per entry in stored order; an empty list gets
    /// a single blank row so there is always somewhere to type.
    pub fn expand(&self, settings: &Ip6Settings) -> PageState {
        let mut state = PageState::new(
            MethodPolicy::new(settings.method),
            Toggles::from_settings(settings),
        );

        expand_list(&mut state.addresses, &settings.addresses);
        expand_list(&mut state.dns, &settings.dns);
        expand_list(&mut state.routes, &settings.routes);

        debug!(
            method = %settings.method,
            addresses = settings.addresses.len(),
            dns = settings.dns.len(),
            routes = settings.routes.len(),
            "Expanded IPv6 setting"
        );

        state
    }

    /// Parses every row and rebuilds a complete setting.
    ///
    /// Lists are walked in address, DNS, route order and blank rows are
    /// skipped. Under [`HiddenListPolicy::Clear`] the lists of a Shared or
    /// Disabled setting come out empty, but only after every row parsed.
    ///
    /// # Errors
    ///
    /// Returns the first row that fails to parse.
    pub fn collapse(&self, state: &PageState) -> Result<Ip6Settings, ValidationError> {
        let method = state.policy.effective();
        let toggles = state.toggles;

        let mut addresses = collapse_list(&state.addresses)?;
        let mut dns = collapse_list(&state.dns)?;
        let mut routes = collapse_list(&state.routes)?;

        if self.hidden_lists == HiddenListPolicy::Clear
            && matches!(method, Ip6Method::Shared | Ip6Method::Disabled)
        {
            debug!(%method, "Clearing lists hidden by method");
            addresses.clear();
            dns.clear();
            routes.clear();
        }

        debug!(
            %method,
            addresses = addresses.len(),
            dns = dns.len(),
            routes = routes.len(),
            "Collapsed IPv6 page"
        );

        Ok(Ip6Settings {
            method,
            ignore_auto_dns: !toggles.auto_dns,
            ignore_auto_routes: !toggles.auto_routes,
            never_default: toggles.never_default,
            dns,
            addresses,
            routes,
        })
    }
}

fn expand_list<R: Row>(list: &mut RowList<R>, entries: &[R::Entry]) {
    if entries.is_empty() {
        list.append_blank();
        return;
    }

    for entry in entries {
        list.append(R::from_entry(entry));
    }
}

fn collapse_list<R: Row>(list: &RowList<R>) -> Result<Vec<R::Entry>, ValidationError> {
    let mut entries = Vec::with_capacity(list.len());

    for (index, (row, fields)) in list.rows().enumerate() {
        match fields.parse() {
            Ok(Some(entry)) => entries.push(entry),
            Ok(None) => {}
            Err(reason) => {
                warn!(
                    kind = %R::KIND,
                    row = index + 1,
                    field = reason.field(),
                    text = reason.text(),
                    "Rejected IPv6 {} entry",
                    R::KIND
                );
                return Err(ValidationError {
                    kind: R::KIND,
                    index,
                    row,
                    reason,
                });
            }
        }
    }

    Ok(entries)
}
