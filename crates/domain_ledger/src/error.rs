//! Domain error types for the credit ledger

use thiserror::Error;

use core_kernel::{CustomerId, MoneyError};

/// Errors raised by ledger domain operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("validation failed on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("customer not found: {0}")]
    CustomerNotFound(CustomerId),

    #[error("statement period contains no transactions")]
    EmptyStatement,

    #[error("statement period is inverted: start is after end")]
    InvertedPeriod,

    #[error("customer has no phone number on record")]
    MissingPhone,

    #[error("money error: {0}")]
    Money(#[from] MoneyError),
}

impl LedgerError {
    /// Shorthand for a field validation failure
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = LedgerError::validation("amount", "must be positive");
        assert_eq!(err.to_string(), "validation failed on amount: must be positive");
    }
}
