//! Demo dataset loaded when no configuration overrides it
//!
//! Four users (one per role plus a second customer awaiting KYC review),
//! eight historical ledger records, and the admin currency, fee and
//! commission tables.

use crate::core::ledger_store::Seed;
use crate::types::{
    CommissionConfig, Currency, FeeConfig, FeeType, KycStatus, PaymentMethod, Role, Transaction,
    TransactionKind, TransactionStatus, User,
};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

/// The complete demo seed
pub fn demo_seed() -> Seed {
    Seed {
        users: demo_users(),
        transactions: demo_transactions(),
        currencies: demo_currencies(),
        fees: demo_fees(),
        commissions: demo_commissions(),
    }
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    phone: &str,
    password: &str,
    name: &str,
    role: Role,
    wallet_id: &str,
    balances: [i64; 4],
    kyc_status: KycStatus,
) -> User {
    let [balance, deposits, withdrawn, transfers] = balances.map(Decimal::from);
    User {
        id: id.to_string(),
        phone: phone.to_string(),
        password: password.to_string(),
        name: name.to_string(),
        role,
        wallet_id: wallet_id.to_string(),
        balance,
        total_deposits: deposits,
        total_withdrawn: withdrawn,
        total_transfers: transfers,
        kyc_status,
        currency: "KES".to_string(),
    }
}

pub fn demo_users() -> Vec<User> {
    vec![
        user(
            "usr-001",
            "0700000001",
            "user1234",
            "John Doe",
            Role::User,
            "WLT-2024-0001",
            [15000, 45200, 28300, 12500],
            KycStatus::Approved,
        ),
        user(
            "usr-002",
            "0700000002",
            "agent1234",
            "Sarah Kamau",
            Role::Agent,
            "WLT-2024-0002",
            [85000, 250000, 180000, 95000],
            KycStatus::Approved,
        ),
        user(
            "usr-003",
            "0700000003",
            "admin1234",
            "Admin",
            Role::Admin,
            "WLT-2024-0003",
            [0, 0, 0, 0],
            KycStatus::Approved,
        ),
        user(
            "usr-004",
            "0700000004",
            "user5678",
            "Jane Mwangi",
            Role::User,
            "WLT-2024-0004",
            [3200, 9000, 4800, 1000],
            KycStatus::Pending,
        ),
    ]
}

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    date: DateTime<Utc>,
    user_id: &str,
    user_name: &str,
    kind: TransactionKind,
    method: Option<PaymentMethod>,
    amount: i64,
    fee: i64,
    status: TransactionStatus,
    reference: &str,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        date,
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        kind,
        method,
        network: None,
        amount: Decimal::from(amount),
        fee: Decimal::from(fee),
        status,
        reference: reference.to_string(),
        sender_wallet: None,
        recipient_wallet: None,
    }
}

/// Historical records, newest first as displayed
///
/// The `user_name` column of some rows names the counterparty rather than
/// the owning user; it is kept as recorded.
#[rustfmt::skip]
pub fn demo_transactions() -> Vec<Transaction> {
    use PaymentMethod::{Card, Mpesa};
    use TransactionKind::*;
    use TransactionStatus::*;

    vec![
        record("txn-001", at(10, 14, 23), "usr-001", "John Doe", Deposit, Some(Mpesa), 5000, 75, Completed, "TXN-20240210-001"),
        record("txn-002", at(9, 11, 5), "usr-001", "John Doe", Withdrawal, Some(Mpesa), 3000, 100, Completed, "TXN-20240209-001"),
        record("txn-003", at(9, 9, 30), "usr-002", "Sarah Kamau", Deposit, Some(Card), 50000, 750, Successful, "TXN-20240209-002"),
        record("txn-004", at(8, 16, 45), "usr-001", "John Doe", Transfer, None, 2500, 45, Completed, "TXN-20240208-001"),
        record("txn-005", at(10, 10, 0), "usr-001", "Jane Mwangi", Withdrawal, Some(Mpesa), 20000, 100, Completed, "TXN-20240210-002"),
        record("txn-006", at(9, 8, 15), "usr-002", "Paul Kimani", Deposit, Some(Mpesa), 50000, 750, Successful, "TXN-20240209-003"),
        record("txn-007", at(8, 14, 0), "usr-001", "Account Review", KycUpdate, None, 0, 0, Pending, "TXN-20240208-002"),
        record("txn-008", at(7, 12, 30), "usr-001", "Alice Otieno", Transfer, None, 15000, 270, Failed, "TXN-20240207-001"),
    ]
}

pub fn demo_currencies() -> Vec<Currency> {
    let mut tzs = Currency::new("TZS", "Tanzanian Shilling", "TSh");
    tzs.enabled = false;
    vec![
        Currency::new("KES", "Kenyan Shilling", "KSh"),
        Currency::new("USD", "US Dollar", "$"),
        Currency::new("UGX", "Ugandan Shilling", "USh"),
        tzs,
    ]
}

fn fee(
    id: &str,
    transaction_type: &str,
    fee_type: FeeType,
    amount: Decimal,
    active: bool,
) -> FeeConfig {
    FeeConfig {
        id: id.to_string(),
        transaction_type: transaction_type.to_string(),
        fee_type,
        fee_amount: amount,
        active,
    }
}

pub fn demo_fees() -> Vec<FeeConfig> {
    vec![
        fee("fee-1", "Deposit", FeeType::Percentage, Decimal::new(15, 1), false),
        fee("fee-2", "Withdrawal", FeeType::Fixed, Decimal::from(100), true),
        fee("fee-3", "Bank Transfer", FeeType::Percentage, Decimal::from(2), false),
        fee("fee-4", "Mobile Money Transfer", FeeType::Percentage, Decimal::new(18, 1), false),
    ]
}

pub fn demo_commissions() -> Vec<CommissionConfig> {
    [
        ("com-1", "Referral Bonus", 10),
        ("com-2", "Load Wallet Commission", 2),
        ("com-3", "Transaction Commission", 1),
    ]
    .into_iter()
    .map(|(id, commission_type, rate)| CommissionConfig {
        id: id.to_string(),
        commission_type: commission_type.to_string(),
        rate: Decimal::from(rate),
    })
    .collect()
}
