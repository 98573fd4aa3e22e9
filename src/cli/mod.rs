//! Command-line interface for inspecting and committing IPv6 pages.
//!
//! Each subcommand maps onto one page operation: `show` expands a settings
//! file, `check` collapses a page snapshot, `apply` commits a snapshot into
//! a settings file and `schema` prints the configuration schema.

mod args;
mod commands;
pub mod formatting;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use args::{Cli, Commands};
pub use commands::{ApplyCommand, CheckCommand, SchemaCommand, ShowCommand};
pub use service::CliService;
pub use types::{CliError, Command, CommandResult};
