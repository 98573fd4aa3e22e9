mod log_level;

pub use log_level::{LogLevel, UnknownLogLevel};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// General configuration settings.
///
/// Contains global settings that affect the overall behavior of the
/// application, such as logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct GeneralConfig {
    /// Logging level for the application.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Also write logs to a daily rotated file in the log directory.
    #[serde(default)]
    pub log_to_file: bool,
}
