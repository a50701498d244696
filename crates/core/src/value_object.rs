//! Value object trait: equality by value, not identity.

use crate::error::DomainError;

/// A validated value built from user-supplied text.
///
/// Value objects are **immutable** and **compared by value**: two names with
/// the same text are the same name. Construction goes through [`parse`] so an
/// invalid value can never exist.
///
/// [`parse`]: ValueObject::parse
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + Sized {
    /// Human-readable constraint, reported verbatim when validation fails.
    const CONSTRAINTS: &'static str;

    /// Returns true if `raw` satisfies the constraints.
    fn is_valid(raw: &str) -> bool;

    /// Builds the value from already-validated text.
    fn from_valid(raw: &str) -> Self;

    /// Validates and builds the value. Surrounding whitespace is ignored.
    fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if Self::is_valid(trimmed) {
            Ok(Self::from_valid(trimmed))
        } else {
            Err(DomainError::validation(Self::CONSTRAINTS))
        }
    }
}
