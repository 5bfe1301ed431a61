//! Error types for the AbanRemit ledger
//!
//! This module defines all error types that can occur while operating on the
//! wallet ledger. Errors are descriptive enough to be shown to a user as-is
//! (they double as the failure message of an operation).
//!
//! # Error Categories
//!
//! - **Validation Errors**: Non-positive amounts, missing fields, self-transfers
//! - **Balance Errors**: A debit that would take a wallet below zero
//! - **Lookup Errors**: Unknown user, wallet, recipient, currency or fee entry
//! - **Session Errors**: No active session, bad credentials, missing permission
//! - **I/O and Parsing Errors**: Script, config and export failures

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
///
/// Every operation on the ledger returns `Result<_, LedgerError>`. All
/// variants except the I/O family describe a rejected operation that left
/// the ledger unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Caller-supplied input is unusable (non-positive amount, missing field, ...)
    #[error("Validation failed: {message}")]
    Validation {
        /// Description of the validation failure
        message: String,
    },

    /// A debit of `requested` exceeds the wallet balance
    #[error("Insufficient balance in wallet {wallet}: available {available}, requested {requested}")]
    InsufficientBalance {
        /// Wallet that would have been debited
        wallet: String,
        /// Balance at the time of the check
        available: Decimal,
        /// Amount plus fee that was requested
        requested: Decimal,
    },

    /// Lookup of a user, wallet, currency or fee entry failed
    #[error("{entity} not found: {key}")]
    NotFound {
        /// Kind of record that was looked up
        entity: String,
        /// Key used for the lookup
        key: String,
    },

    /// An operation that needs an active session was called without one
    #[error("No active session")]
    Unauthenticated,

    /// Login did not match any user
    #[error("Invalid phone number or password")]
    InvalidCredentials,

    /// The active user's role does not allow the operation
    #[error("User {user} is not permitted to perform {operation}")]
    PermissionDenied {
        /// Id of the acting user
        user: String,
        /// Operation that was refused
        operation: String,
    },

    /// A unique key (phone, wallet, user id, currency code) is already taken
    #[error("{entity} already exists: {key}")]
    Conflict {
        /// Kind of record
        entity: String,
        /// Duplicated key
        key: String,
    },

    /// OTP or PIN confirmation did not match
    #[error("Incorrect {channel}")]
    VerificationFailed {
        /// Verification channel ("OTP" or "PIN")
        channel: String,
    },

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation} for wallet {wallet}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Wallet being updated
        wallet: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration failure
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        LedgerError::Validation {
            message: message.into(),
        }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(wallet: &str, available: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientBalance {
            wallet: wallet.to_string(),
            available,
            requested,
        }
    }

    /// Create a NotFound error
    pub fn not_found(entity: &str, key: &str) -> Self {
        LedgerError::NotFound {
            entity: entity.to_string(),
            key: key.to_string(),
        }
    }

    /// Create a PermissionDenied error
    pub fn permission_denied(user: &str, operation: &str) -> Self {
        LedgerError::PermissionDenied {
            user: user.to_string(),
            operation: operation.to_string(),
        }
    }

    /// Create a Conflict error
    pub fn conflict(entity: &str, key: &str) -> Self {
        LedgerError::Conflict {
            entity: entity.to_string(),
            key: key.to_string(),
        }
    }

    /// Create a VerificationFailed error
    pub fn verification_failed(channel: &str) -> Self {
        LedgerError::VerificationFailed {
            channel: channel.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, wallet: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            wallet: wallet.to_string(),
        }
    }

    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        LedgerError::Config {
            message: message.into(),
        }
    }

    /// Whether the error was a business rejection rather than an I/O failure
    ///
    /// Business rejections are recoverable: the ledger is unchanged and the
    /// caller may continue with the next operation.
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            LedgerError::IoError { .. }
                | LedgerError::ParseError { .. }
                | LedgerError::Config { .. }
        )
    }
}
