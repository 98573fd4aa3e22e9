use tracing::{info, instrument};

use super::{
    ConfigReconciler, ConnectionPage, PageBase, PageError, PageSnapshot, PageState,
    policy::Editable,
};
use crate::settings::Ip6Settings;

/// The IPv6 page of the connection editor.
///
/// Holds the editable state expanded from a setting. The setting itself is
/// only borrowed again by [`ConnectionPage::validate`], which replaces it
/// wholesale when every row parses and the result verifies.
#[derive(Debug)]
pub struct Ip6Page {
    base: PageBase,
    state: PageState,
    reconciler: ConfigReconciler,
}

impl Ip6Page {
    /// Title shown for the page.
    pub const TITLE: &'static str = "IPv6";

    /// Expands `settings` with the default reconciler.
    pub fn new(settings: &Ip6Settings) -> Self {
        Self::with_reconciler(settings, ConfigReconciler::default())
    }

    /// Expands `settings` with an explicit reconciler.
    pub fn with_reconciler(settings: &Ip6Settings, reconciler: ConfigReconciler) -> Self {
        Self::from_state(reconciler.expand(settings), reconciler)
    }

    /// Restores a page from a snapshot of its row text.
    pub fn from_snapshot(snapshot: &PageSnapshot, reconciler: ConfigReconciler) -> Self {
        Self::from_state(PageState::from_snapshot(snapshot), reconciler)
    }

    fn from_state(state: PageState, reconciler: ConfigReconciler) -> Self {
        let base = PageBase::new(Self::TITLE, state.revision_handle());
        base.complete_init();

        Self {
            base,
            state,
            reconciler,
        }
    }

    /// Current editable state.
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Mutable access for row edits, toggles and method changes.
    pub fn state_mut(&mut self) -> &mut PageState {
        &mut self.state
    }

    /// Lists the user may currently edit.
    pub fn editable(&self) -> Editable {
        self.state.editable()
    }

    /// Reconciler used on commit.
    pub fn reconciler(&self) -> ConfigReconciler {
        self.reconciler
    }

    /// Captures the current row text, toggles and method.
    pub fn snapshot(&self) -> PageSnapshot {
        self.state.snapshot()
    }
}

impl ConnectionPage for Ip6Page {
    type Setting = Ip6Settings;

    fn base(&self) -> &PageBase {
        &self.base
    }

    #[instrument(skip_all, fields(method = %self.state.policy().effective()))]
    fn validate(&self, setting: &mut Ip6Settings) -> Result<(), PageError> {
        let rebuilt = self.reconciler.collapse(&self.state)?;
        rebuilt.verify()?;

        info!(
            addresses = rebuilt.addresses.len(),
            dns = rebuilt.dns.len(),
            routes = rebuilt.routes.len(),
            "Applied IPv6 page"
        );
        *setting = rebuilt;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        page::rows::AddressField,
        settings::{Ip6Method, Ipv6Address, VerifyError},
    };

    #[test]
    fn page_is_initialized_after_expansion() {
        let page = Ip6Page::new(&Ip6Settings::default());

        assert!(page.is_initialized());
        assert_eq!(page.title(), "IPv6");
    }

    #[test]
    fn verify_failure_leaves_setting_untouched() {
        let mut setting = Ip6Settings::default();
        let mut page = Ip6Page::new(&setting);
        page.state_mut().select_method(Ip6Method::Manual).unwrap();

        let err = page.validate(&mut setting).unwrap_err();

        assert_eq!(
            err,
            PageError::Verify(VerifyError::MissingAddresses(Ip6Method::Manual))
        );
        assert_eq!(setting, Ip6Settings::default());
    }

    #[test]
    fn successful_commit_replaces_setting() {
        let mut setting = Ip6Settings::default();
        let mut page = Ip6Page::new(&setting);
        let state = page.state_mut();
        state.select_method(Ip6Method::Manual).unwrap();
        let id = state.addresses.rows().next().map(|(id, _)| id).unwrap();
        state.addresses.set_text(id, AddressField::Address, "2001:db8::5");
        state.addresses.set_text(id, AddressField::Prefix, "64");

        page.validate(&mut setting).unwrap();

        assert_eq!(setting.method, Ip6Method::Manual);
        assert_eq!(
            setting.addresses,
            [Ipv6Address::new("2001:db8::5".parse().unwrap(), 64, None)]
        );
    }

    #[test]
    fn page_changes_follow_state_edits() {
        let mut page = Ip6Page::new(&Ip6Settings::default());
        let before = page.base().revision();

        page.state_mut().dns.append_blank();

        assert_eq!(page.base().revision(), before + 1);
    }
}
