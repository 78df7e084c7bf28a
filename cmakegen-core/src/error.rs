use std::path::PathBuf;

use thiserror::Error;

/// Result type for filesystem operations in cmakegen.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that abort a generation run.
#[derive(Debug, Error)]
pub enum Error {
    /// A required directory (such as the scan root) does not exist.
    #[error("'{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    /// Listing a directory failed.
    #[error("failed to read '{}'", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating a directory or writing a file failed.
    #[error("failed to write '{}'", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn read_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailure {
            path: path.into(),
            source,
        }
    }

    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }

    /// The path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path }
            | Self::ReadFailure { path, .. }
            | Self::WriteFailure { path, .. } => path,
        }
    }
}
