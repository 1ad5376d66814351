//! Core error types for the wallet view.
//!
//! The display pipeline itself never fails: malformed records are reported
//! through diagnostics instead. These types cover the places that can fail,
//! which are the balance/price suppliers and configuration loading.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the wallet view.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Supplier failed to provide data: {0}")]
    Supplier(String),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Validation errors for balance records and user supplied values.
///
/// Kept `Clone` so that a record-level failure can be stored in render
/// diagnostics without giving up the original error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Field '{0}' must not be blank")]
    EmptyField(String),

    #[error("Amount is not numeric: {0}")]
    InvalidAmount(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
