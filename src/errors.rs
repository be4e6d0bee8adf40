use std::{io, path::PathBuf};

/// Shared error type used by the core crate and the command crate.
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    /// File system I/O failure.
    #[error("I/O error while accessing {0}")]
    Io(PathBuf, #[source] io::Error),

    /// The source directory does not exist or is not a directory.
    #[error("not found or not a directory: {0}")]
    NotFound(PathBuf),

    /// An operation was rejected due to argument issues.
    #[error("invalid command input: {0}")]
    InvalidInput(String),

    /// A conflict prevented the operation from proceeding.
    #[error("resource conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound(path.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self::Io(path.into(), error)
    }
}

/// Shared result alias for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
