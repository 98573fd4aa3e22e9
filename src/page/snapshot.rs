use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    PageState, Toggles,
    policy::MethodPolicy,
    rows::{AddressRow, DnsRow, RouteRow},
};
use crate::{EditorError, Result, settings::Ip6Method};

fn default_true() -> bool {
    true
}

/// Serializable copy of everything typed into a page.
///
/// Rows are kept as raw text, so a snapshot can hold input that does not
/// parse yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Method shown by the selector.
    #[serde(default)]
    pub method: Ip6Method,

    /// Position of the enable switch.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Use DNS servers learned automatically.
    #[serde(default = "default_true")]
    pub auto_dns: bool,

    /// Use routes learned automatically.
    #[serde(default = "default_true")]
    pub auto_routes: bool,

    /// Never use this connection for the default route.
    #[serde(default)]
    pub never_default: bool,

    /// DNS rows in order.
    #[serde(default)]
    pub dns: Vec<DnsRow>,

    /// Address rows in order.
    #[serde(default)]
    pub addresses: Vec<AddressRow>,

    /// Route rows in order.
    #[serde(default)]
    pub routes: Vec<RouteRow>,
}

impl Default for PageSnapshot {
    fn default() -> Self {
        PageState::default().snapshot()
    }
}

impl PageSnapshot {
    /// Loads a snapshot from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a snapshot.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| EditorError::io(e, path))?;
        let snapshot: PageSnapshot =
            toml::from_str(&content).map_err(|e| EditorError::toml_parse(e, Some(path)))?;

        debug!(
            path = %path.display(),
            method = %snapshot.method,
            enabled = snapshot.enabled,
            "Loaded page snapshot"
        );

        Ok(snapshot)
    }
}

impl PageState {
    /// Captures row text, toggles and method.
    pub fn snapshot(&self) -> PageSnapshot {
        let toggles = self.toggles();
        let policy = self.policy();

        PageSnapshot {
            method: policy.selected(),
            enabled: policy.is_enabled(),
            auto_dns: toggles.auto_dns,
            auto_routes: toggles.auto_routes,
            never_default: toggles.never_default,
            dns: self.dns.rows().map(|(_, row)| row.clone()).collect(),
            addresses: self.addresses.rows().map(|(_, row)| row.clone()).collect(),
            routes: self.routes.rows().map(|(_, row)| row.clone()).collect(),
        }
    }

    /// Rebuilds page state from a snapshot.
    ///
    /// The switch always follows `enabled`. A Disabled method puts the
    /// selector on Automatic, so `method = "ignore"` with `enabled = true`
    /// restores an enabled Automatic page. Rows are restored exactly, blank
    /// ones included.
    pub fn from_snapshot(snapshot: &PageSnapshot) -> Self {
        let mut policy = MethodPolicy::new(snapshot.method);
        policy.set_enabled(snapshot.enabled);

        let mut state = PageState::new(
            policy,
            Toggles {
                auto_dns: snapshot.auto_dns,
                auto_routes: snapshot.auto_routes,
                never_default: snapshot.never_default,
            },
        );

        for row in &snapshot.addresses {
            state.addresses.append(row.clone());
        }
        for row in &snapshot.dns {
            state.dns.append(row.clone());
        }
        for row in &snapshot.routes {
            state.routes.append(row.clone());
        }

        state
    }
}
