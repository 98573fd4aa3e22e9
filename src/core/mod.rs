use std::path::Path;

use thiserror::Error;

use crate::page::PageError;

/// Error types for the IPv6 editor.
///
/// This enum represents all possible errors that can occur while loading
/// configuration, reading and writing settings or snapshot files, and
/// committing page edits.
#[derive(Error, Debug)]
pub enum EditorError {
    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: std::path::PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error (for compatibility)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// TOML serialization error
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// The page refused to commit its rows
    #[error(transparent)]
    Page(#[from] PageError),
}

/// A specialized `Result` type for editor operations.
///
/// This type alias simplifies error handling by defaulting the error type
/// to `EditorError` for all editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;

impl EditorError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        EditorError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error with file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying I/O error
    /// * `path` - Path to the file being read or written
    pub fn io(error: impl std::fmt::Display, path: &Path) -> Self {
        EditorError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
