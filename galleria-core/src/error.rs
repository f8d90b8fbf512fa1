//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for Galleria
//!
//! The library core is tolerant: recovering or deleting an unknown id is a
//! no-op, not a failure. `AppError` covers the strict lookups, input
//! validation that must fail closed, and the configuration/terminal boundary.

use std::{io, path::PathBuf};
use thiserror::Error;

use crate::model::{album::AlbumId, file_record::FileId};

/// Unified error type for all library and application operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Strict lookup of a file id that is not in the store.
    #[error("File not found: {0}")]
    FileNotFound(FileId),

    /// Strict lookup of an album id that no longer resolves.
    #[error("Album not found: {0}")]
    AlbumNotFound(AlbumId),

    /// Input validation errors. State is left unchanged.
    #[error("Invalid input: {field} - {message}")]
    InvalidInput {
        field: String, // "file_name", "album_name", ...
        message: String,
    },

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Terminal setup, teardown or draw failure.
    #[error("Terminal error: {operation}: {source}")]
    Terminal {
        operation: &'static str,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    /// Create an input validation error
    pub fn invalid_input<S1: Into<String>, S2: Into<String>>(field: S1, message: S2) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a config I/O error for `path`
    pub fn config_io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// Create a terminal error for the step that failed
    pub const fn terminal(operation: &'static str, source: io::Error) -> Self {
        Self::Terminal { operation, source }
    }

    /// True for the strict-lookup variants.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound(_) | Self::AlbumNotFound(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = AppError::invalid_input("album_name", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input: album_name - must not be empty"
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_classification() {
        let err = AppError::FileNotFound(FileId::from("42"));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "File not found: 42");
    }

    #[test]
    fn test_terminal_error_names_failed_step() {
        let err = AppError::terminal(
            "enable raw mode",
            io::Error::new(io::ErrorKind::Unsupported, "not a tty"),
        );
        assert_eq!(err.to_string(), "Terminal error: enable raw mode: not a tty");
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.is_not_found());
    }
}
