//! ip6-editor - inspect and commit IPv6 connection pages from the shell.

use std::{error::Error, process};

use clap::Parser;
use ip6_editor::{
    cli::{Cli, CliService, formatting::format_error},
    config::EditorConfig,
    tracing_config,
};
use tracing::debug;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EditorConfig::from_file(path)?,
        None => EditorConfig::load()?,
    };

    let level = config.general.log_level;
    let guard = if config.general.log_to_file {
        Some(tracing_config::init_with_file(level)?)
    } else {
        tracing_config::init(level)?;
        None
    };

    debug!(command = ?cli.command, "Running command");
    let result = CliService::new(config).execute(&cli.command);

    match result {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            drop(guard);
            process::exit(1);
        }
    }
}
