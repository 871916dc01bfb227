//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (parsing,
/// validation, lookups, conflicts). IO failures belong to the layer doing the IO.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input text could not be parsed into the expected value (e.g. a quantity).
    #[error("invalid {what}: {input:?}")]
    Parse { what: &'static str, input: String },

    /// A value failed validation (e.g. an empty item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The requested item is not stocked.
    #[error("not found")]
    NotFound,

    /// A listing or export was requested while the inventory holds nothing.
    #[error("inventory is empty")]
    EmptyInventory,

    /// The operation clashes with existing state (e.g. create-only add on a known name).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn parse(what: &'static str, input: impl Into<String>) -> Self {
        Self::Parse {
            what,
            input: input.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_message_quotes_the_rejected_input() {
        let err = DomainError::parse("quantity", "abc");
        assert_eq!(err.to_string(), "invalid quantity: \"abc\"");
    }

    #[test]
    fn not_found_is_detected() {
        assert!(DomainError::not_found().is_not_found());
        assert!(!DomainError::EmptyInventory.is_not_found());
    }
}
