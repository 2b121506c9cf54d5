use std::path::{Path, PathBuf};

use thiserror::Error;

/// Unified error type for the chatcast workspace.
///
/// Wraps I/O failures with path context, CSV decode errors, value/timestamp
/// parse failures, data invariant violations, argument validation errors, and
/// backend-tagged failures from the forecasting library. Every failure is
/// fatal and propagates to the caller; there is no retry or recovery layer.
#[derive(Debug, Error)]
pub enum ChatcastError {
    /// An underlying filesystem operation failed.
    #[error("io error on {path}: {source}")]
    Io {
        /// Path the operation was acting on.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader or writer reported a decode/encode failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A field value could not be parsed into the expected type.
    #[error("parse error in column `{column}`: {value:?}: {msg}")]
    Parse {
        /// Column the offending value came from.
        column: String,
        /// The raw value as read from the source.
        value: String,
        /// Human-readable reason.
        msg: String,
    },

    /// Issues with the shape or content of the data (duplicates, non-positive
    /// values under a log transform, missing values where a dense series is
    /// required, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The forecasting backend returned an error.
    #[error("{backend} backend failed: {msg}")]
    Backend {
        /// Backend name that failed.
        backend: String,
        /// Human-readable error message.
        msg: String,
    },
}

impl ChatcastError {
    /// Helper: wrap an I/O error with the path it occurred on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Helper: build a `Parse` error for a column/value pair.
    pub fn parse(
        column: impl Into<String>,
        value: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self::Parse {
            column: column.into(),
            value: value.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Data` error from a description.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Helper: build an `InvalidArg` error from a description.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Backend` error tagged with the backend name.
    pub fn backend(backend: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Backend {
            backend: backend.into(),
            msg: msg.into(),
        }
    }
}
