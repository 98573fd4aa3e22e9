//! Whole-setting consistency checks run after the page rebuilds a setting.

use thiserror::Error;

use super::{Ip6Method, Ip6Settings, MAX_PREFIX, MIN_PREFIX};

/// A rebuilt or loaded setting that is internally inconsistent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Manual configuration without any address
    #[error("method '{0}' requires at least one address")]
    MissingAddresses(Ip6Method),

    /// Static addresses on a method that does not use them
    #[error("addresses are not allowed with method '{0}'")]
    AddressesNotAllowed(Ip6Method),

    /// DNS servers on a method that does not use them
    #[error("DNS servers are not allowed with method '{0}'")]
    DnsNotAllowed(Ip6Method),

    /// Address prefix outside 1-128
    #[error("address {index} has prefix {prefix}, expected 1-128")]
    AddressPrefix {
        /// Position of the address in the setting.
        index: usize,
        /// The offending prefix length.
        prefix: u8,
    },

    /// Route prefix outside 1-128
    #[error("route {index} has prefix {prefix}, expected 1-128")]
    RoutePrefix {
        /// Position of the route in the setting.
        index: usize,
        /// The offending prefix length.
        prefix: u8,
    },
}

fn prefix_in_range(prefix: u8) -> bool {
    (MIN_PREFIX..=MAX_PREFIX).contains(&prefix)
}

impl Ip6Settings {
    /// Checks that the setting is consistent with its method.
    ///
    /// Manual needs at least one address. Link-local, shared and disabled
    /// carry neither addresses nor DNS servers.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn verify(&self) -> Result<(), VerifyError> {
        if let Some((index, entry)) = self
            .addresses
            .iter()
            .enumerate()
            .find(|(_, entry)| !prefix_in_range(entry.prefix))
        {
            return Err(VerifyError::AddressPrefix {
                index,
                prefix: entry.prefix,
            });
        }

        if let Some((index, route)) = self
            .routes
            .iter()
            .enumerate()
            .find(|(_, route)| !prefix_in_range(route.prefix))
        {
            return Err(VerifyError::RoutePrefix {
                index,
                prefix: route.prefix,
            });
        }

        match self.method {
            Ip6Method::Manual if self.addresses.is_empty() => {
                Err(VerifyError::MissingAddresses(self.method))
            }
            Ip6Method::LinkLocalOnly | Ip6Method::Shared | Ip6Method::Disabled => {
                if !self.dns.is_empty() {
                    return Err(VerifyError::DnsNotAllowed(self.method));
                }
                if !self.addresses.is_empty() {
                    return Err(VerifyError::AddressesNotAllowed(self.method));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
