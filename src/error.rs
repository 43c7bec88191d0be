//! Error types for log directory, file and write operations

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while managing or writing debug logs
#[derive(Error, Debug)]
pub enum LogError {
    /// The current working directory could not be determined
    #[error("failed to resolve current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// The log directory could not be created
    #[error("failed to create log directory {}: {source}", path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log directory does not exist after the creation attempt
    #[error("log directory {} does not exist", path.display())]
    DirectoryMissing { path: PathBuf },

    /// The log directory could not be listed during a retention sweep
    #[error("failed to list log directory {}: {source}", path.display())]
    ListingFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A new log file could not be created
    #[error("failed to create log file {}: {source}", path.display())]
    FileCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be appended to the log file
    #[error("failed to write log file {}: {source}", path.display())]
    FileWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Append was called before a target file was set
    #[error("no target log file set")]
    NoTargetFile,
}

pub type Result<T> = std::result::Result<T, LogError>;
