use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Parsed command line.
#[derive(Parser, Debug)]
#[command(name = "ip6-editor")]
#[command(about = "Edit and validate IPv6 connection settings")]
#[command(version)]
pub struct Cli {
    /// Configuration file to use instead of the default location.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the editable rows for a settings file.
    Show {
        /// IPv6 settings file (TOML).
        settings: PathBuf,
    },
    /// Validate a page snapshot and print the resulting settings.
    Check {
        /// Page snapshot file (TOML).
        page: PathBuf,
    },
    /// Commit a page snapshot into a settings file.
    Apply {
        /// IPv6 settings file to rewrite.
        settings: PathBuf,
        /// Page snapshot file (TOML).
        page: PathBuf,
    },
    /// Print the JSON schema of the configuration file.
    Schema,
}
