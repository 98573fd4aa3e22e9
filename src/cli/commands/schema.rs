use crate::{
    cli::{CliError, Command, CommandResult},
    config::EditorConfig,
};

/// Prints the JSON schema of the configuration file.
pub struct SchemaCommand;

impl Command for SchemaCommand {
    fn execute(&self) -> CommandResult {
        let schema = schemars::schema_for!(EditorConfig);

        serde_json::to_string_pretty(&schema).map_err(|e| CliError::OutputError(e.to_string()))
    }
}
