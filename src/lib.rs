//! AbanRemit wallet ledger
//! # Overview
//!
//! This library provides the in-memory ledger behind a mobile-money wallet:
//! sessions, balances, an append-only transaction ledger and per-user
//! notifications, driven either directly through [`LedgerEngine`] or by
//! replaying a CSV action script.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (User, Transaction, Notification, ...)
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Transaction processing orchestration
//!   - [`core::ledger_store`] - Owner of users, ledger, notifications and currencies
//!   - [`core::session`] - The authenticated user
//!   - [`core::fee_calculator`] - Fixed fee rules
//! - [`io`] - Action-script parsing and CSV/receipt exports
//! - [`config`] - TOML configuration; [`seed`] - demo dataset
//! - [`runner`] - Script replay pipeline used by the binary
//! - [`cli`] - CLI arguments parsing
//!
//! # Transaction Types
//!
//! - **Deposit**: Credit the acting wallet, minus a 1.5% fee
//! - **Agent deposit**: An agent funds a customer wallet from their own float
//! - **Withdrawal**: Debit amount plus a fixed 100 fee
//! - **Transfer / Send money**: Move the amount to another wallet; the 1.8% fee is burned
//! - **Airtime**: Debit without fee
//!
//! Every debit requires `amount + fee <= balance`; a rejected operation
//! leaves the ledger unchanged.

pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod runner;
pub mod seed;
pub mod types;

pub use config::{load_config, AppConfig};
pub use core::{LedgerEngine, LedgerStore};
pub use io::write_users_csv;
pub use runner::{run_script, RunSummary, ScriptRunner};
pub use types::{
    Currency, KycStatus, LedgerError, Notification, Outcome, PaymentMethod, Role, Transaction,
    TransactionIntent, TransactionKind, TransactionStatus, User, UserUpdate,
};
