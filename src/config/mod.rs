//! Editor configuration schema.
//!
//! Defines the configuration structure for the IPv6 editor: logging and the
//! commit policies of the page. All configurations are serializable to and
//! from TOML.

mod editor;
mod general;
mod loading;
mod paths;

#[cfg(test)]
mod tests;

pub use editor::{EditorSettings, HiddenListPolicy};
pub use general::{GeneralConfig, LogLevel, UnknownLogLevel};
pub use paths::ConfigPaths;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the editor.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct EditorConfig {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Page behaviour.
    #[serde(default)]
    pub editor: EditorSettings,
}
