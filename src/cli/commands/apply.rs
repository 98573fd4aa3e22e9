use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    cli::{Command, CommandResult, formatting::format_success},
    page::{ConfigReconciler, ConnectionPage, Ip6Page, PageSnapshot},
    settings::Ip6Settings,
};

/// Commits a page snapshot into a settings file.
///
/// The file is rewritten only when every row parses and the rebuilt
/// setting verifies; otherwise it is left as it was.
///
/// # Example Usage
///
/// ```bash
/// ip6-editor apply wired.toml page.toml
/// ```
pub struct ApplyCommand {
    settings: PathBuf,
    page: PathBuf,
    reconciler: ConfigReconciler,
}

impl ApplyCommand {
    /// Creates the command for a settings file and a snapshot file.
    pub fn new(settings: &Path, page: &Path, reconciler: ConfigReconciler) -> Self {
        Self {
            settings: settings.to_path_buf(),
            page: page.to_path_buf(),
            reconciler,
        }
    }
}

impl Command for ApplyCommand {
    fn execute(&self) -> CommandResult {
        let mut settings = Ip6Settings::from_file(&self.settings)?;
        let snapshot = PageSnapshot::from_file(&self.page)?;
        let page = Ip6Page::from_snapshot(&snapshot, self.reconciler);

        page.validate(&mut settings)?;
        settings.write_to(&self.settings)?;

        info!(path = %self.settings.display(), "Settings file updated");
        Ok(format_success(&format!(
            "Applied {} address(es), {} DNS server(s), {} route(s) to {}",
            settings.addresses.len(),
            settings.dns.len(),
            settings.routes.len(),
            self.settings.display()
        )))
    }
}
