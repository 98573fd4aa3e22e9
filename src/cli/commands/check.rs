use std::path::{Path, PathBuf};

use crate::{
    cli::{Command, CommandResult},
    page::{ConfigReconciler, ConnectionPage, Ip6Page, PageSnapshot},
    settings::Ip6Settings,
};

/// Commits a page snapshot into an empty setting and prints the result.
///
/// Nothing is written; this is a dry run of `apply`.
///
/// # Example Usage
///
/// ```bash
/// ip6-editor check page.toml
/// ```
pub struct CheckCommand {
    page: PathBuf,
    reconciler: ConfigReconciler,
}

impl CheckCommand {
    /// Creates the command for one snapshot file.
    pub fn new(page: &Path, reconciler: ConfigReconciler) -> Self {
        Self {
            page: page.to_path_buf(),
            reconciler,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self) -> CommandResult {
        let snapshot = PageSnapshot::from_file(&self.page)?;
        let page = Ip6Page::from_snapshot(&snapshot, self.reconciler);

        let mut settings = Ip6Settings::default();
        page.validate(&mut settings)?;

        Ok(settings.to_toml_string()?)
    }
}
