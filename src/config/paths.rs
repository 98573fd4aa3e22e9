use std::{
    env,
    ffi::OsString,
    fs,
    io::{Error, ErrorKind},
    path::PathBuf,
};

const APP_DIR: &str = "ip6-editor";

/// Locations of the editor's configuration and log files.
///
/// Both follow the XDG Base Directory specification.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Directory holding `config.toml`.
    ///
    /// `$XDG_CONFIG_HOME/ip6-editor`, or `$HOME/.config/ip6-editor`.
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is set
    pub fn config_dir() -> Result<PathBuf, Error> {
        xdg_base("XDG_CONFIG_HOME", ".config").map(|base| base.join(APP_DIR))
    }

    /// Directory for data the editor writes, created on demand.
    ///
    /// `$XDG_DATA_HOME/ip6-editor`, or `$HOME/.local/share/ip6-editor`.
    ///
    /// # Errors
    /// Returns an error if neither `XDG_DATA_HOME` nor `HOME` is set, or the
    /// directory cannot be created
    pub fn data_dir() -> Result<PathBuf, Error> {
        let dir = xdg_base("XDG_DATA_HOME", ".local/share")?.join(APP_DIR);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Directory for rotated log files, created on demand.
    ///
    /// # Errors
    /// Returns error if the data directory cannot be determined or created
    pub fn log_dir() -> Result<PathBuf, Error> {
        let dir = Self::data_dir()?.join("logs");
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Path of the main configuration file.
    ///
    /// # Errors
    /// Returns an error if the configuration directory cannot be determined
    pub fn main_config() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}

fn xdg_base(var: &str, home_fallback: &str) -> Result<PathBuf, Error> {
    resolve_base(env::var_os(var), env::var_os("HOME"), home_fallback).ok_or_else(|| {
        Error::new(
            ErrorKind::NotFound,
            format!("Neither {var} nor HOME environment variable found"),
        )
    })
}

// An empty variable counts as unset.
pub(super) fn resolve_base(
    xdg: Option<OsString>,
    home: Option<OsString>,
    home_fallback: &str,
) -> Option<PathBuf> {
    xdg.filter(|base| !base.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            home.filter(|home| !home.is_empty())
                .map(|home| PathBuf::from(home).join(home_fallback))
        })
}
