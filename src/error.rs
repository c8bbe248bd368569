//! Error types for matrix generation.
//!
//! This module defines [`MatrixError`], the error type returned by every
//! fallible operation in the crate, and a [`Result`] alias for convenience.
//!
//! Nothing here is recoverable: the binary wraps the first error with
//! `anyhow` context, reports the whole chain and exits non-zero so the CI
//! step fails. Display messages name the failing path; the underlying
//! cause is exposed through `source()`.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for matrix generation.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// The manifest data directory is missing or is not a directory.
    #[error("Manifest directory not found: {path}")]
    ManifestDirNotFound { path: PathBuf },

    /// Walking the manifest directory failed part way through.
    #[error("Failed to walk manifest directory {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The output file could not be opened or appended to.
    #[error("Failed to write output file {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Matrix serialization failed.
    #[error("Failed to encode matrix")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;
