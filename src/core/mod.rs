//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - Seams for the clock and the verification gate
//! - `clock` - Clocks and `TXN-YYYYMMDD-NNN` reference generation
//! - `fee_calculator` - Fixed fee rules
//! - `ledger_store` - Users, transactions, notifications and admin tables
//! - `session` - The authenticated user
//! - `notifications` - Event message builders
//! - `verification` - OTP and PIN checks
//! - `engine` - Transaction processing orchestration

pub mod clock;
pub mod engine;
pub mod fee_calculator;
pub mod ledger_store;
pub mod notifications;
pub mod session;
pub mod traits;
pub mod verification;

pub use clock::{FixedClock, ReferenceGenerator, SystemClock};
pub use engine::LedgerEngine;
pub use fee_calculator::{calculate_fee, FeeKind};
pub use ledger_store::{LedgerStore, Seed};
pub use session::SessionManager;
pub use traits::{Clock, CodeVerifier, VerificationChannel};
pub use verification::StaticCodeVerifier;
