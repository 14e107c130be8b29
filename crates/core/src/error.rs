//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The query surface is deliberately permissive: unknown product codes and
/// empty search terms are valid inputs with empty/partial results. The only
/// failure the domain recognizes is a request whose selection field is
/// structurally wrong.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The request payload did not have the required shape.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
