use thiserror::Error;

use crate::{EditorError, page::PageError};

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// Loading or writing a file failed.
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// The page refused to commit.
    ///
    /// Nothing was written; the message names the offending row or the
    /// setting rule that failed.
    #[error("commit refused: {0}")]
    Rejected(#[from] PageError),

    /// Output could not be rendered.
    #[error("Output error: {0}")]
    OutputError(String),
}

/// Type alias for command execution results.
///
/// Commands return the text to print on success.
pub type CommandResult = Result<String, CliError>;

/// Trait defining the interface for all CLI commands.
///
/// Commands receive their inputs through their constructors.
pub trait Command {
    /// Runs the command.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for unreadable files, refused commits and
    /// rendering failures.
    fn execute(&self) -> CommandResult;
}
