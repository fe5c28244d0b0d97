//! Failure taxonomy for the issue core.
//!
//! Every failure a handler can produce maps to exactly one variant, so a
//! transport layer can render "bad input", "not found", "conflict", or
//! "temporarily unavailable" without string matching. Storage failures are
//! never retried or swallowed here; the caller owns retry policy.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// A single field-scoped validation violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending command field, e.g. "title"
    pub field: String,
    /// Human-readable rule description
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All violations collected for one command, never just the first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// True if any violation is scoped to the given field.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

/// Infrastructure failure from the repository boundary.
///
/// The core treats the cause as opaque; whatever the driver reports is
/// carried along unchanged.
#[derive(Debug, Error)]
#[error("storage unavailable: {0}")]
pub struct StorageError(#[from] pub anyhow::Error);

impl StorageError {
    pub fn new(cause: impl Into<anyhow::Error>) -> Self {
        Self(cause.into())
    }
}

/// Top-level failure type returned by the command executor.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed identifier passed directly to a handler, bypassing command
    /// validation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// One or more field rules violated; carries every violation
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// The referenced issue does not exist
    #[error("issue not found: {0}")]
    NotFound(String),

    /// Mutation attempted on an archived issue
    #[error("issue {0} is archived and cannot be modified")]
    Conflict(String),

    /// The caller's cancellation signal fired before the operation finished
    #[error("operation cancelled")]
    Cancelled,

    /// The repository call failed for infrastructure reasons
    #[error(transparent)]
    Storage(#[from] StorageError),
}
