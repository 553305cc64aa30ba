//! Error types for shipcheck operations.
//!
//! This module defines [`ShipcheckError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Rules never surface errors to the scanner: a failed artifact read is
//!   converted into a warning finding at the rule boundary
//! - Use `ShipcheckError` for failures that stop a command (bad config,
//!   invalid deployment stage)
//! - Use `anyhow::Error` (via `ShipcheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for shipcheck operations.
#[derive(Debug, Error)]
pub enum ShipcheckError {
    /// Scan configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the scan configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Scan configuration parsed but holds invalid values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Deployment stage configuration rejected (missing production keys,
    /// insecure defaults, unknown stage).
    #[error("Invalid stage configuration: {message}")]
    ConfigurationInvalid { message: String },

    /// An artifact exists but could not be read.
    #[error("Could not read {path}: {source}")]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rule id that is not part of the rule set.
    #[error("Unknown rule: {id}")]
    UnknownRule { id: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for shipcheck operations.
pub type Result<T> = std::result::Result<T, ShipcheckError>;
