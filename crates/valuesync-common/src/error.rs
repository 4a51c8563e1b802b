//! Unified error types for the valuesync workspace.
//!
//! A fetch failure and a body-decode failure are distinct variants but the
//! same kind of error to callers: both mean a manifest could not be
//! retrieved, and both abort the run before any file is touched.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A remote manifest fetch failed (network, timeout, or HTTP status).
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        /// URL that could not be retrieved.
        url: String,
        /// Underlying transport or protocol error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A fetched response body was not valid UTF-8.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// URL whose response body could not be decoded.
        url: String,
        /// Underlying decode error.
        source: std::string::FromUtf8Error,
    },

    /// An I/O operation on a local file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, SyncError>;
