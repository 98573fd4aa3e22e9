//! Reading and writing settings files.

use std::{fs, path::Path};

use tracing::debug;

use super::Ip6Settings;
use crate::{EditorError, Result};

impl Ip6Settings {
    /// Loads a setting from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid setting.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| EditorError::io(e, path))?;
        let settings: Ip6Settings =
            toml::from_str(&content).map_err(|e| EditorError::toml_parse(e, Some(path)))?;

        debug!(
            path = %path.display(),
            method = %settings.method,
            addresses = settings.addresses.len(),
            dns = settings.dns.len(),
            routes = settings.routes.len(),
            "Loaded IPv6 setting"
        );

        Ok(settings)
    }

    /// Renders the setting as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Writes the setting to a TOML file, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        fs::write(path, content).map_err(|e| EditorError::io(e, path))?;
        debug!(path = %path.display(), "Wrote IPv6 setting");
        Ok(())
    }
}
