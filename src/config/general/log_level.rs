use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Verbosity of the editor's log output.
///
/// The name doubles as the default `EnvFilter` directive, so `RUST_LOG`
/// only needs to be set to override it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Failed file operations only.
    Error,

    /// Also every row field a commit rejected.
    Warn,

    /// Also loaded configuration and applied pages.
    #[default]
    Info,

    /// Also expand and collapse summaries.
    Debug,

    /// Everything, including span entry and exit.
    Trace,
}

/// A log level name that is not one of the five levels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown log level '{0}'")]
pub struct UnknownLogLevel(pub String);

impl LogLevel {
    /// Lowercase name, as written in `config.toml`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = UnknownLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(UnknownLogLevel(s.to_string())),
        }
    }
}
