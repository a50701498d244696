//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// lookups, stock rules, conflicts). Parsing and presentation concerns belong
/// elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// No item matched the lookup.
    #[error("not found")]
    NotFound,

    /// More than one item matched a lookup that needs exactly one.
    #[error("{0} items match")]
    MultipleMatches(usize),

    /// A quantity larger than the stock on hand was requested.
    #[error("insufficient stock of {name}: {available} available, {requested} requested")]
    InsufficientStock {
        name: String,
        available: u32,
        requested: u32,
    },

    /// Two items would end up sharing an identity (or an id) ambiguously.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A count went past what the store can represent.
    #[error("count overflow")]
    CountOverflow,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn insufficient_stock(name: impl Into<String>, available: u32, requested: u32) -> Self {
        Self::InsufficientStock {
            name: name.into(),
            available,
            requested,
        }
    }
}
