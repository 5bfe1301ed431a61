//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `user`: Users, roles, KYC status and partial updates
//! - `transaction`: Ledger records, intents and outcomes
//! - `notification`: Per-user event messages
//! - `currency`: Selectable currencies
//! - `fee`: Fee and commission tables
//! - `error`: Error types for the ledger

pub mod currency;
pub mod error;
pub mod fee;
pub mod notification;
pub mod transaction;
pub mod user;

pub use currency::Currency;
pub use error::LedgerError;
pub use fee::{CommissionConfig, FeeConfig, FeeType};
pub use notification::Notification;
pub use transaction::{
    Outcome, PaymentMethod, Transaction, TransactionCategory, TransactionId, TransactionIntent,
    TransactionKind, TransactionStatus,
};
pub use user::{KycStatus, Role, User, UserId, UserUpdate, WalletId};
