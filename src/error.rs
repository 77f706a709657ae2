//! Custom error types for expense-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::amount::AmountParseError;

/// The main error type for expense-cli operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV encoding/decoding errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Ledger storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// An amount field that does not parse as a decimal number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl ExpenseError {
    /// Check if this is an invalid-amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<AmountParseError> for ExpenseError {
    fn from(err: AmountParseError) -> Self {
        match err {
            AmountParseError::InvalidFormat(value) => Self::InvalidAmount(value),
        }
    }
}

/// Result type alias for expense-cli operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Storage("test error".into());
        assert_eq!(err.to_string(), "Storage error: test error");
    }

    #[test]
    fn test_invalid_amount_error() {
        let err: ExpenseError = AmountParseError::InvalidFormat("abc".into()).into();
        assert_eq!(err.to_string(), "Invalid amount: abc");
        assert!(err.is_invalid_amount());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let expense_err: ExpenseError = io_err.into();
        assert!(matches!(expense_err, ExpenseError::Io(_)));
    }
}
