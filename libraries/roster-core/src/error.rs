//! Core error types for Roster
use std::fmt::Display;
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Error kinds produced while serving a user operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Input that could not be parsed (path id, request body)
    #[error("{0}")]
    MalformedInput(String),

    /// Input that parsed but broke a validation rule
    #[error("{0}")]
    ValidationFailed(String),

    /// No user with the given id (kept as text so negative path ids fit)
    #[error("User not found")]
    NotFound(String),
}

impl RosterError {
    /// Create a malformed input error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationFailed(msg.into())
    }

    /// Create a not found error for `id`
    pub fn not_found(id: impl Display) -> Self {
        Self::NotFound(id.to_string())
    }

    /// Whether this error is a `NotFound`
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
