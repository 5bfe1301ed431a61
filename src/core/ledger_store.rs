//! Ledger storage
//!
//! This module provides the `LedgerStore` which exclusively owns the four
//! in-memory collections of the system:
//! - users, keyed by user id
//! - the append-only transaction ledger
//! - notifications
//! - currencies, plus the admin fee and commission tables
//!
//! Read access is public. Writes are crate-private and go through
//! [`crate::core::LedgerEngine`], which validates every operation before
//! touching the store.

use crate::core::clock::parse_reference;
use crate::types::{
    CommissionConfig, Currency, FeeConfig, KycStatus, LedgerError, Notification, Role,
    Transaction, TransactionCategory, User, UserId,
};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Initial contents of a store
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub users: Vec<User>,
    /// Newest first, as displayed
    pub transactions: Vec<Transaction>,
    pub currencies: Vec<Currency>,
    pub fees: Vec<FeeConfig>,
    pub commissions: Vec<CommissionConfig>,
}

/// In-memory owner of users, transactions, notifications and currencies
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    /// Map of user ids to users
    users: HashMap<UserId, User>,

    /// Ledger records, oldest first (listings reverse this)
    transactions: Vec<Transaction>,

    /// Notifications, oldest first (listings reverse this)
    notifications: Vec<Notification>,

    currencies: Vec<Currency>,
    fees: Vec<FeeConfig>,
    commissions: Vec<CommissionConfig>,

    /// Highest `TXN-YYYYMMDD-NNN` sequence recorded per day
    reference_days: HashMap<NaiveDate, u32>,

    /// Monotonic counter used to make generated ids unique
    sequence: u64,
}

impl LedgerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed data
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Conflict` if two seed users share an id, phone
    /// or wallet, or two currencies share a code.
    pub fn from_seed(seed: Seed) -> Result<Self, LedgerError> {
        let mut store = LedgerStore::new();
        for user in seed.users {
            store.insert_user(user)?;
        }
        for currency in seed.currencies {
            store.add_currency(currency)?;
        }
        for transaction in seed.transactions.into_iter().rev() {
            store.append_transaction(transaction);
        }
        store.fees = seed.fees;
        store.commissions = seed.commissions;
        Ok(store)
    }

    /// Add a user, enforcing unique id, phone and wallet
    pub fn insert_user(&mut self, user: User) -> Result<(), LedgerError> {
        if self.users.contains_key(&user.id) {
            return Err(LedgerError::conflict("User", &user.id));
        }
        if self.find_by_phone(&user.phone).is_some() {
            return Err(LedgerError::conflict("Phone number", &user.phone));
        }
        if self.find_by_wallet(&user.wallet_id).is_some() {
            return Err(LedgerError::conflict("Wallet", &user.wallet_id));
        }
        self.users.insert(user.id.clone(), user);
        Ok(())
    }

    // ---- users ----

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub(crate) fn user_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.get_mut(id)
    }

    pub fn find_by_phone(&self, phone: &str) -> Option<&User> {
        self.users.values().find(|user| user.phone == phone)
    }

    pub fn find_by_wallet(&self, wallet_id: &str) -> Option<&User> {
        self.users.values().find(|user| user.wallet_id == wallet_id)
    }

    /// User whose phone and password both match
    pub fn find_by_credentials(&self, phone: &str, password: &str) -> Option<&User> {
        self.users
            .values()
            .find(|user| user.phone == phone && user.password == password)
    }

    /// All users sorted by id
    pub fn users(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self.users.values().collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        users
    }

    pub fn users_by_role(&self, role: Role) -> Vec<&User> {
        self.users()
            .into_iter()
            .filter(|user| user.role == role)
            .collect()
    }

    /// Users awaiting a KYC decision (pending or previously rejected)
    pub fn kyc_review_queue(&self) -> Vec<&User> {
        self.users()
            .into_iter()
            .filter(|user| matches!(user.kyc_status, KycStatus::Pending | KycStatus::Rejected))
            .collect()
    }

    // ---- transactions ----

    /// All ledger records, newest first
    pub fn transactions(&self) -> Vec<&Transaction> {
        self.transactions.iter().rev().collect()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn transactions_for_user(&self, user_id: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .rev()
            .filter(|tx| tx.user_id == user_id)
            .collect()
    }

    pub fn transactions_in_category(&self, category: TransactionCategory) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .rev()
            .filter(|tx| category.includes(tx.kind))
            .collect()
    }

    /// The `limit` most recent records, newest first
    pub fn audit_trail(&self, limit: usize) -> Vec<&Transaction> {
        self.transactions.iter().rev().take(limit).collect()
    }

    pub fn find_transaction(&self, reference: &str) -> Option<&Transaction> {
        self.transactions
            .iter()
            .rev()
            .find(|tx| tx.reference == reference)
    }

    pub(crate) fn append_transaction(&mut self, transaction: Transaction) {
        if let Some((day, sequence)) = parse_reference(&transaction.reference) {
            let highest = self.reference_days.entry(day).or_insert(0);
            *highest = (*highest).max(sequence);
        }
        self.transactions.push(transaction);
    }

    /// Highest reference sequence recorded for `day`, or 0
    pub fn highest_reference_sequence(&self, day: NaiveDate) -> u32 {
        self.reference_days.get(&day).copied().unwrap_or(0)
    }

    // ---- notifications ----

    /// All notifications, newest first
    pub fn notifications(&self) -> Vec<&Notification> {
        self.notifications.iter().rev().collect()
    }

    pub fn notifications_for(&self, user_id: &str) -> Vec<&Notification> {
        self.notifications
            .iter()
            .rev()
            .filter(|n| n.user_id == user_id)
            .collect()
    }

    pub fn unread_count(&self, user_id: &str) -> usize {
        self.notifications
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .count()
    }

    pub(crate) fn push_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    // ---- currencies ----

    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    pub fn enabled_currencies(&self) -> Vec<&Currency> {
        self.currencies.iter().filter(|c| c.enabled).collect()
    }

    pub fn currency(&self, code: &str) -> Option<&Currency> {
        let code = code.trim().to_uppercase();
        self.currencies.iter().find(|c| c.code == code)
    }

    /// Append a currency, rejecting duplicate codes
    pub(crate) fn add_currency(&mut self, currency: Currency) -> Result<(), LedgerError> {
        if self.currency(&currency.code).is_some() {
            return Err(LedgerError::conflict("Currency", &currency.code));
        }
        self.currencies.push(currency);
        Ok(())
    }

    /// Flip the enabled flag of `code`
    ///
    /// Returns the new flag, or `None` if no currency matched.
    pub(crate) fn toggle_currency(&mut self, code: &str) -> Option<bool> {
        let code = code.trim().to_uppercase();
        let currency = self.currencies.iter_mut().find(|c| c.code == code)?;
        currency.enabled = !currency.enabled;
        Some(currency.enabled)
    }

    // ---- fee tables ----

    pub fn fees(&self) -> &[FeeConfig] {
        &self.fees
    }

    pub fn commissions(&self) -> &[CommissionConfig] {
        &self.commissions
    }

    /// Flip the active flag of fee entry `id`
    pub(crate) fn toggle_fee(&mut self, id: &str) -> Option<bool> {
        let fee = self.fees.iter_mut().find(|f| f.id == id)?;
        fee.active = !fee.active;
        Some(fee.active)
    }

    /// Next value of the store-wide id sequence
    pub(crate) fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }
}
