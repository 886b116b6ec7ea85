//! Typed error handling for deadclass.
//!
//! Malformed stylesheet or document text is never an error (permissive
//! parsing yields fewer matches instead); the only failures surfaced here are
//! I/O, configuration, and contract violations at the API boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for deadclass operations.
#[derive(Error, Debug)]
pub enum DeadclassError {
    /// I/O error when reading stylesheet or document files
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Caller violated an API contract (e.g. audit without a stylesheet)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DeadclassError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error (the audit can continue).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for deadclass results.
pub type DeadclassResult<T> = Result<T, DeadclassError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> DeadclassResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> DeadclassResult<T> {
        self.map_err(|e| DeadclassError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let err = DeadclassError::io(
            PathBuf::from("/site/style.css"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert!(matches!(err, DeadclassError::Io { .. }));
        assert_eq!(err.path(), Some(&PathBuf::from("/site/style.css")));
        assert!(err.to_string().contains("/site/style.css"));
    }

    #[test]
    fn test_invalid_argument() {
        let err = DeadclassError::invalid_argument("no stylesheet loaded");
        assert!(err.to_string().contains("no stylesheet loaded"));
        assert!(err.path().is_none());
    }

    #[test]
    fn test_is_recoverable() {
        assert!(DeadclassError::config("/x/deadclass.toml", "bad toml").is_recoverable());
        assert!(!DeadclassError::invalid_argument("bad").is_recoverable());
    }

    #[test]
    fn test_io_result_ext() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let converted = result.with_path("/missing/index.html");
        assert!(converted.is_err());
    }
}
