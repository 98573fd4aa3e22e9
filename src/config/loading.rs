use std::{fs, path::Path};

use tracing::{debug, info};

use super::{ConfigPaths, EditorConfig};
use crate::{EditorError, Result};

impl EditorConfig {
    /// Loads the main configuration file, or defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or the file exists but is not valid.
    pub fn load() -> Result<EditorConfig> {
        let path = ConfigPaths::main_config()?;

        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(EditorConfig::default());
        }

        Self::from_file(&path)
    }

    /// Loads configuration from a specific TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file cannot be read
    /// - The TOML content is invalid
    pub fn from_file(path: &Path) -> Result<EditorConfig> {
        let content = fs::read_to_string(path).map_err(|e| EditorError::io(e, path))?;
        let config: EditorConfig =
            toml::from_str(&content).map_err(|e| EditorError::toml_parse(e, Some(path)))?;

        info!(path = %path.display(), "Loaded editor configuration");
        Ok(config)
    }
}
