use super::{
    ApplyCommand, CheckCommand, Command, CommandResult, Commands, SchemaCommand, ShowCommand,
};
use crate::{config::EditorConfig, page::ConfigReconciler};

/// Runs parsed subcommands against one loaded configuration.
pub struct CliService {
    config: EditorConfig,
}

impl CliService {
    /// Creates a service using `config` for every command.
    pub fn new(config: EditorConfig) -> Self {
        Self { config }
    }

    /// The configuration commands run with.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Reconciler configured from the `[editor]` section.
    pub fn reconciler(&self) -> ConfigReconciler {
        ConfigReconciler::new(self.config.editor.hidden_lists)
    }

    /// Executes a subcommand.
    ///
    /// # Errors
    /// Returns the command's error unchanged.
    pub fn execute(&self, command: &Commands) -> CommandResult {
        match command {
            Commands::Show { settings } => ShowCommand::new(settings, self.reconciler()).execute(),
            Commands::Check { page } => CheckCommand::new(page, self.reconciler()).execute(),
            Commands::Apply { settings, page } => {
                ApplyCommand::new(settings, page, self.reconciler()).execute()
            }
            Commands::Schema => SchemaCommand.execute(),
        }
    }
}
