use std::path::{Path, PathBuf};

use crate::{
    cli::{Command, CommandResult, formatting::format_page},
    page::{ConfigReconciler, Ip6Page},
    settings::Ip6Settings,
};

/// Expands a settings file and prints the page it would produce.
///
/// # Example Usage
///
/// ```bash
/// ip6-editor show /etc/ip6/wired.toml
/// ```
pub struct ShowCommand {
    settings: PathBuf,
    reconciler: ConfigReconciler,
}

impl ShowCommand {
    /// Creates the command for one settings file.
    pub fn new(settings: &Path, reconciler: ConfigReconciler) -> Self {
        Self {
            settings: settings.to_path_buf(),
            reconciler,
        }
    }
}

impl Command for ShowCommand {
    fn execute(&self) -> CommandResult {
        let settings = Ip6Settings::from_file(&self.settings)?;
        let page = Ip6Page::with_reconciler(&settings, self.reconciler);

        Ok(format_page(&page))
    }
}
