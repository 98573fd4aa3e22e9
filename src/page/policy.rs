//! Which row lists the selected method lets the user edit.

use bitflags::bitflags;
use tracing::debug;

use super::PageError;
use crate::settings::Ip6Method;

bitflags! {
    /// Lists the user may edit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Editable: u8 {
        /// Static address rows.
        const ADDRESSES = 0b001;
        /// DNS server rows and the automatic-DNS switch.
        const DNS = 0b010;
        /// Route rows, the automatic-routes switch and never-default.
        const ROUTES = 0b100;
    }
}

impl Editable {
    /// Address list is editable.
    pub fn addresses(self) -> bool {
        self.contains(Self::ADDRESSES)
    }

    /// DNS list is editable.
    pub fn dns(self) -> bool {
        self.contains(Self::DNS)
    }

    /// Route list is editable.
    pub fn routes(self) -> bool {
        self.contains(Self::ROUTES)
    }

    /// The never-default toggle follows the route list.
    pub fn never_default(self) -> bool {
        self.routes()
    }
}

/// Method selector state: the selected method plus the enable switch.
///
/// The selector only places [`Ip6Method::SELECTABLE`] methods. Shared is
/// kept when it came from the loaded setting; Disabled is expressed by
/// turning the enable switch off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodPolicy {
    selected: Ip6Method,
    enabled: bool,
}

impl Default for MethodPolicy {
    fn default() -> Self {
        Self::new(Ip6Method::default())
    }
}

impl MethodPolicy {
    /// Initial state for a stored method.
    ///
    /// A disabled setting starts with the switch off and the selector on
    /// Automatic, which is what turning the switch back on yields.
    pub fn new(method: Ip6Method) -> Self {
        match method {
            Ip6Method::Disabled => Self {
                selected: Ip6Method::Automatic,
                enabled: false,
            },
            other => Self {
                selected: other,
                enabled: true,
            },
        }
    }

    /// Editability for a method, `None` for methods the selector cannot
    /// place (Shared and Disabled).
    pub fn editability(method: Ip6Method) -> Option<Editable> {
        match method {
            Ip6Method::Automatic | Ip6Method::DhcpOnly => Some(Editable::DNS | Editable::ROUTES),
            Ip6Method::Manual => Some(Editable::all()),
            Ip6Method::LinkLocalOnly => Some(Editable::empty()),
            Ip6Method::Shared | Ip6Method::Disabled => None,
        }
    }

    /// Handles a selection event from the method selector.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MethodNotSelectable`] for Shared and Disabled.
    pub fn select(&mut self, method: Ip6Method) -> Result<(), PageError> {
        if !method.is_selectable() {
            return Err(PageError::MethodNotSelectable(method));
        }
        debug!(from = %self.selected, to = %method, "IPv6 method selected");
        self.selected = method;
        Ok(())
    }

    /// Handles the enable switch.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The method shown by the selector.
    pub fn selected(&self) -> Ip6Method {
        self.selected
    }

    /// Whether the enable switch is on.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The method a commit writes.
    pub fn effective(&self) -> Ip6Method {
        if self.enabled {
            self.selected
        } else {
            Ip6Method::Disabled
        }
    }

    /// Lists the user may currently edit. Nothing is editable while the
    /// effective method has no assigned editability.
    pub fn editable(&self) -> Editable {
        Self::editability(self.effective()).unwrap_or_else(Editable::empty)
    }
}
