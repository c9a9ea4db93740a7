//! Error types for loadbench-core

use thiserror::Error;

/// Core error type
///
/// Per-request transport failures are deliberately absent: they are data,
/// folded into the failure counter of a [`crate::TestResult`], never errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Caller-fixable input problem (missing/invalid scriptId, vus, duration)
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown script id
    #[error("not found: {0}")]
    NotFound(String),

    /// External runner unavailable or exited non-zero
    #[error("execution error: {0}")]
    Execution(String),

    /// Artifact write/read or telemetry sink failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    /// Create an execution error
    pub fn execution(msg: impl Into<String>) -> Self {
        Error::Execution(msg.into())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
