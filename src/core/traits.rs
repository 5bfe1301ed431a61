//! Core traits for the ledger's external seams
//!
//! This module defines the trait abstractions the engine depends on, so that
//! time and identity verification can be swapped out (fixed clocks in tests,
//! a real out-of-band verifier in a production system).

use crate::types::LedgerError;
use chrono::{DateTime, Utc};

/// Source of the current time for transaction dates, ids and references
pub trait Clock {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Confirmation channel checked before a financial action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationChannel {
    /// One-time password sent at login
    Otp,
    /// Transaction PIN
    Pin,
}

impl VerificationChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationChannel::Otp => "OTP",
            VerificationChannel::Pin => "PIN",
        }
    }
}

/// Trait for confirming a user-entered code
///
/// Verification is a gate in front of the transaction processor; the
/// processor itself never consults it.
pub trait CodeVerifier {
    /// Check `code` for `channel`
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::VerificationFailed` when the code does not match.
    fn verify(&self, channel: VerificationChannel, code: &str) -> Result<(), LedgerError>;
}
