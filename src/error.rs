//! Error types and handling infrastructure for kedit.
//!
//! Only fatal conditions travel through [`Result`]: terminal control, geometry queries,
//! opening a file for reading and configuration problems. Failures the user can recover
//! from (a failed save, a cancelled prompt) are reported through the status message and
//! never surface as an `Err`.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for kedit operations.
#[derive(Error, Debug)]
pub enum EditorError {
    /// Opening or reading the document failed for a reason without its own variant
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The file named on the command line does not exist; fatal at startup
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("Path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// Permission denied accessing file
    #[error("Permission denied accessing file: {path}")]
    PermissionDenied { path: PathBuf },

    /// Terminal mode, geometry or key input errors
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Configuration file errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for kedit operations.
pub type Result<T> = std::result::Result<T, EditorError>;

impl EditorError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Map an io::Error raised while opening `path`, keeping the path for the common cases.
    pub fn from_open(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path: path.into() },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path: path.into() },
            _ => Self::file_error("Failed to open file", err),
        }
    }
}

// Automatic conversion from io::Error to EditorError
impl From<std::io::Error> for EditorError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileError {
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}
