//! Transaction-related types for the AbanRemit ledger
//!
//! This module defines ledger records, their kinds and statuses, and the
//! intent a caller submits to the transaction processor.

use super::user::{UserId, WalletId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ledger record identifier
pub type TransactionId = String;

/// Kinds of ledger events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Credit the acting wallet (or, for agents, a target wallet)
    Deposit,

    /// Debit the acting wallet, counted in `total_withdrawn`
    Withdrawal,

    /// Wallet-to-wallet transfer, counted in `total_transfers`
    Transfer,

    /// Send money to a phone number, counted in `total_transfers`
    SendMoney,

    /// Airtime purchase debited from the acting wallet
    Airtime,

    /// KYC review marker; never produced by the processor
    KycUpdate,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Transfer => "transfer",
            TransactionKind::SendMoney => "send_money",
            TransactionKind::Airtime => "airtime",
            TransactionKind::KycUpdate => "kyc_update",
        }
    }

    /// Whether this kind takes `amount + fee` out of the acting wallet
    pub fn is_debit(&self) -> bool {
        matches!(
            self,
            TransactionKind::Withdrawal
                | TransactionKind::Transfer
                | TransactionKind::SendMoney
                | TransactionKind::Airtime
        )
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment channel used for a deposit or withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Mpesa,
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Mpesa => "mpesa",
            PaymentMethod::Card => "card",
        }
    }

    /// Parse a method name, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "mpesa" | "m-pesa" => Some(PaymentMethod::Mpesa),
            "card" => Some(PaymentMethod::Card),
            _ => None,
        }
    }
}

/// Outcome status recorded on a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Successful,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Successful => "successful",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
        }
    }
}

/// Filter used by the admin transaction views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionCategory {
    Deposits,
    Withdrawals,
    /// Both `transfer` and `send_money`
    Transfers,
}

impl TransactionCategory {
    pub fn includes(&self, kind: TransactionKind) -> bool {
        match self {
            TransactionCategory::Deposits => kind == TransactionKind::Deposit,
            TransactionCategory::Withdrawals => kind == TransactionKind::Withdrawal,
            TransactionCategory::Transfers => {
                matches!(kind, TransactionKind::Transfer | TransactionKind::SendMoney)
            }
        }
    }
}

/// Immutable ledger record
///
/// Created exactly once per successful financial operation and never
/// updated or removed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique id, derived from the creation time and a ledger sequence
    pub id: TransactionId,

    /// Creation time (minute precision in exports)
    pub date: DateTime<Utc>,

    /// Acting user
    pub user_id: UserId,

    /// Acting user's display name at the time of the event
    pub user_name: String,

    pub kind: TransactionKind,

    pub method: Option<PaymentMethod>,

    /// Airtime carrier, display only
    pub network: Option<String>,

    /// Principal amount (excluding fee)
    pub amount: Decimal,

    pub fee: Decimal,

    pub status: TransactionStatus,

    /// Human-readable reference (`TXN-YYYYMMDD-NNN`)
    pub reference: String,

    pub sender_wallet: Option<WalletId>,

    pub recipient_wallet: Option<WalletId>,
}

/// A request to commit one ledger event for the active user
///
/// The fee is computed by the caller (see
/// [`crate::core::fee_calculator::calculate_fee`]) and the reference is
/// supplied by the caller (see [`crate::core::LedgerEngine::next_reference`]).
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionIntent {
    pub kind: TransactionKind,
    pub method: Option<PaymentMethod>,
    pub amount: Decimal,
    pub fee: Decimal,
    pub reference: String,

    /// Agent-mediated deposit target
    pub target_user_id: Option<UserId>,

    /// Recipient for `send_money` (and phone-addressed `transfer`)
    pub recipient_phone: Option<String>,

    /// Recipient wallet, annotation only
    pub recipient_wallet: Option<WalletId>,

    /// Airtime carrier, display only
    pub network: Option<String>,
}

impl TransactionIntent {
    pub fn new(
        kind: TransactionKind,
        amount: Decimal,
        fee: Decimal,
        reference: impl Into<String>,
    ) -> Self {
        TransactionIntent {
            kind,
            method: None,
            amount,
            fee,
            reference: reference.into(),
            target_user_id: None,
            recipient_phone: None,
            recipient_wallet: None,
            network: None,
        }
    }

    pub fn with_method(mut self, method: PaymentMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_target_user(mut self, user_id: impl Into<UserId>) -> Self {
        self.target_user_id = Some(user_id.into());
        self
    }

    pub fn with_recipient_phone(mut self, phone: impl Into<String>) -> Self {
        self.recipient_phone = Some(phone.into());
        self
    }

    pub fn with_recipient_wallet(mut self, wallet: impl Into<WalletId>) -> Self {
        self.recipient_wallet = Some(wallet.into());
        self
    }

    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }
}

/// Result of a committed operation
///
/// `message` is the user-facing success text for the acting user.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub transaction: Transaction,
    pub message: String,
}
