//! Custom error types for spendbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendbook operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backing-store errors (missing, corrupt, or unwritable artifacts)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Remote sheet fetch errors (network, HTTP status, bad URL)
    #[error("Remote fetch error: {0}")]
    RemoteFetch(String),

    /// Remote sheet text in which no usable header row could be located
    #[error("Sheet parse error: {0}")]
    SheetParse(String),
}

impl LedgerError {
    /// Validation error for a blank item name
    pub fn blank_item() -> Self {
        Self::Validation("item name must not be blank".into())
    }

    /// Validation error for a non-positive price
    pub fn non_positive_price() -> Self {
        Self::Validation("price must be greater than zero".into())
    }

    /// Validation error for a negative amount
    pub fn negative_amount(field: &str) -> Self {
        Self::Validation(format!("{} must not be negative", field))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<reqwest::Error> for LedgerError {
    fn from(err: reqwest::Error) -> Self {
        Self::RemoteFetch(err.to_string())
    }
}

/// Result type alias for spendbook operations
pub type LedgerResult<T> = Result<T, LedgerError>;
