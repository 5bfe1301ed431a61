//! User-related types for the AbanRemit ledger
//!
//! A user is both an identity (phone + password login) and a wallet
//! (balance plus cumulative counters).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Internal user identifier (e.g. `usr-001`)
pub type UserId = String;

/// Human-readable wallet identifier (e.g. `WLT-2024-0001`)
pub type WalletId = String;

/// Role of a user in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular wallet holder
    User,
    /// May fund other users' wallets from their own float
    Agent,
    /// Operates the admin console
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Agent => "agent",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Know-your-customer verification status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    Pending,
    Approved,
    Rejected,
}

impl KycStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::Pending => "pending",
            KycStatus::Approved => "approved",
            KycStatus::Rejected => "rejected",
        }
    }

    /// Parse a status name, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pending" => Some(KycStatus::Pending),
            "approved" => Some(KycStatus::Approved),
            "rejected" => Some(KycStatus::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for KycStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A wallet holder
///
/// Users are created from seed data at start-up, mutated in place by every
/// financial operation and never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique internal id
    pub id: UserId,

    /// Unique login key
    pub phone: String,

    /// Plaintext password (demo only)
    pub password: String,

    /// Display name
    pub name: String,

    pub role: Role,

    /// Unique human-readable wallet identifier
    pub wallet_id: WalletId,

    /// Current wallet balance
    ///
    /// Never driven below zero by a ledger operation.
    pub balance: Decimal,

    /// Sum of all deposit amounts credited to this wallet
    #[serde(default)]
    pub total_deposits: Decimal,

    /// Sum of all withdrawal amounts (excluding fees)
    #[serde(default)]
    pub total_withdrawn: Decimal,

    /// Sum of all transfer and send-money amounts (excluding fees)
    #[serde(default)]
    pub total_transfers: Decimal,

    pub kyc_status: KycStatus,

    /// Preferred currency code; left blank in configuration to inherit the
    /// configured default
    #[serde(default)]
    pub currency: String,
}

/// Partial update applied by admin flows
///
/// Every `Some` field replaces the corresponding field of the target user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub balance: Option<Decimal>,
    pub kyc_status: Option<KycStatus>,
    pub currency: Option<String>,
}

impl UserUpdate {
    /// Whether the update carries no changes
    pub fn is_empty(&self) -> bool {
        *self == UserUpdate::default()
    }

    /// Merge the update into `user`
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(phone) = &self.phone {
            user.phone = phone.clone();
        }
        if let Some(password) = &self.password {
            user.password = password.clone();
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(balance) = self.balance {
            user.balance = balance;
        }
        if let Some(kyc_status) = self.kyc_status {
            user.kyc_status = kyc_status;
        }
        if let Some(currency) = &self.currency {
            user.currency = currency.clone();
        }
    }
}
