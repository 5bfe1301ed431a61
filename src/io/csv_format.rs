//! CSV format handling for action scripts and ledger exports
//!
//! This module centralizes all CSV format concerns, providing:
//! - ScriptRecord structure for deserialization of action-script rows
//! - Conversion from script rows to typed `ScriptStep`s
//! - User table, statement and receipt serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{KycStatus, LedgerError, PaymentMethod, Transaction, User};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Date format used by statement and receipt exports (minute precision)
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// CSV record structure for deserialization
///
/// Matches the action-script columns:
/// `action,phone,password,amount,method,counterparty,detail,pin`.
/// Every column but `action` is optional; which ones are required depends on
/// the action.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ScriptRecord {
    pub action: String,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub amount: Option<String>,
    pub method: Option<String>,
    /// Recipient phone, agent phone or wallet id, depending on the action
    pub counterparty: Option<String>,
    /// Airtime network or KYC status
    pub detail: Option<String>,
    /// PIN checked before the action is applied
    pub pin: Option<String>,
}

/// One operation requested by an action script
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptAction {
    Login { phone: String, password: String },
    Logout,
    Deposit { amount: Decimal, method: PaymentMethod },
    Withdraw { amount: Decimal, method: PaymentMethod },
    WithdrawToAgent { amount: Decimal, agent_phone: String },
    Transfer { amount: Decimal, recipient_phone: String },
    SendMoney { amount: Decimal, recipient_phone: String },
    SendToWallet { amount: Decimal, wallet_id: String },
    Airtime { amount: Decimal, network: Option<String> },
    AgentDeposit {
        amount: Decimal,
        wallet_id: String,
        method: Option<PaymentMethod>,
    },
    Statement,
    Freeze { wallet_id: String },
    Kyc { wallet_id: String, status: KycStatus },
}

/// A script action together with its optional PIN confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptStep {
    pub action: ScriptAction,
    pub pin: Option<String>,
}

fn present(field: Option<String>) -> Option<String> {
    field
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required(field: Option<String>, name: &str, action: &str) -> Result<String, String> {
    present(field).ok_or_else(|| format!("'{}' is missing the {} column", action, name))
}

fn parse_amount(field: Option<String>, action: &str) -> Result<Decimal, String> {
    let raw = required(field, "amount", action)?;
    Decimal::from_str(&raw).map_err(|_| format!("Invalid amount '{}' for '{}'", raw, action))
}

fn parse_method(raw: &str, action: &str) -> Result<PaymentMethod, String> {
    PaymentMethod::parse(raw)
        .ok_or_else(|| format!("Invalid payment method '{}' for '{}'", raw, action))
}

/// Convert a ScriptRecord to a ScriptStep
///
/// This function:
/// - Parses the action name (case-insensitive)
/// - Parses amounts into Decimals and methods into `PaymentMethod`
/// - Checks that every column the action needs is present
///
/// Amount sign is not checked here; the engine rejects non-positive amounts.
///
/// # Arguments
///
/// * `record` - The deserialized CSV record
///
/// # Returns
///
/// Result containing either:
/// - Ok(ScriptStep) - Successfully converted step
/// - Err(String) - Error message describing the conversion failure
pub fn convert_script_record(record: ScriptRecord) -> Result<ScriptStep, String> {
    let action_name = record.action.trim().to_lowercase();
    let action = action_name.as_str();
    let pin = present(record.pin);

    let parsed = match action {
        "login" => ScriptAction::Login {
            phone: required(record.phone, "phone", action)?,
            password: required(record.password, "password", action)?,
        },
        "logout" => ScriptAction::Logout,
        "deposit" | "withdraw" | "withdrawal" => {
            let amount = parse_amount(record.amount, action)?;
            let method = parse_method(&required(record.method, "method", action)?, action)?;
            if action == "deposit" {
                ScriptAction::Deposit { amount, method }
            } else {
                ScriptAction::Withdraw { amount, method }
            }
        }
        "withdraw_agent" => ScriptAction::WithdrawToAgent {
            amount: parse_amount(record.amount, action)?,
            agent_phone: required(record.counterparty, "counterparty", action)?,
        },
        "transfer" => ScriptAction::Transfer {
            amount: parse_amount(record.amount, action)?,
            recipient_phone: required(record.counterparty, "counterparty", action)?,
        },
        "send_money" => ScriptAction::SendMoney {
            amount: parse_amount(record.amount, action)?,
            recipient_phone: required(record.counterparty, "counterparty", action)?,
        },
        "send_to_wallet" => ScriptAction::SendToWallet {
            amount: parse_amount(record.amount, action)?,
            wallet_id: required(record.counterparty, "counterparty", action)?,
        },
        "airtime" => ScriptAction::Airtime {
            amount: parse_amount(record.amount, action)?,
            network: present(record.detail),
        },
        "agent_deposit" => ScriptAction::AgentDeposit {
            amount: parse_amount(record.amount, action)?,
            wallet_id: required(record.counterparty, "counterparty", action)?,
            method: present(record.method)
                .map(|raw| parse_method(&raw, action))
                .transpose()?,
        },
        "statement" => ScriptAction::Statement,
        "freeze" => ScriptAction::Freeze {
            wallet_id: required(record.counterparty, "counterparty", action)?,
        },
        "kyc" => {
            let wallet_id = required(record.counterparty, "counterparty", action)?;
            let raw = required(record.detail, "detail", action)?;
            let status = KycStatus::parse(&raw)
                .ok_or_else(|| format!("Invalid KYC status '{}'", raw))?;
            ScriptAction::Kyc { wallet_id, status }
        }
        _ => return Err(format!("Invalid action: '{}'", record.action)),
    };

    Ok(ScriptStep {
        action: parsed,
        pin,
    })
}

/// Write the user table to CSV format
///
/// Columns: id, wallet, name, role, balance, total_deposits,
/// total_withdrawn, total_transfers, kyc_status. Users are sorted by id for
/// deterministic output.
///
/// # Errors
///
/// Returns `LedgerError::IoError` or `LedgerError::ParseError` if writing fails.
pub fn write_users_csv(users: &[&User], output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record([
        "id",
        "wallet",
        "name",
        "role",
        "balance",
        "total_deposits",
        "total_withdrawn",
        "total_transfers",
        "kyc_status",
    ])?;

    let mut sorted = users.to_vec();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));

    for user in sorted {
        writer.write_record(&[
            user.id.clone(),
            user.wallet_id.clone(),
            user.name.clone(),
            user.role.to_string(),
            format!("{:.2}", user.balance),
            format!("{:.2}", user.total_deposits),
            format!("{:.2}", user.total_withdrawn),
            format!("{:.2}", user.total_transfers),
            user.kyc_status.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a statement export: `date,reference,type,amount,fee,status`
///
/// Rows are written in the order given (newest first when taken from the
/// ledger).
pub fn write_statement_csv(
    transactions: &[&Transaction],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["date", "reference", "type", "amount", "fee", "status"])?;
    for tx in transactions {
        writer.write_record(&[
            tx.date.format(EXPORT_DATE_FORMAT).to_string(),
            tx.reference.clone(),
            tx.kind.as_str().to_string(),
            format!("{:.2}", tx.amount),
            format!("{:.2}", tx.fee),
            tx.status.as_str().to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a plain-text receipt for one transaction
pub fn write_receipt(tx: &Transaction, output: &mut dyn Write) -> Result<(), LedgerError> {
    writeln!(output, "AbanRemit Transaction Receipt")?;
    writeln!(output, "Reference: {}", tx.reference)?;
    writeln!(output, "Date: {}", tx.date.format(EXPORT_DATE_FORMAT))?;
    writeln!(output, "Type: {}", tx.kind)?;
    if let Some(method) = tx.method {
        writeln!(output, "Method: {}", method.as_str())?;
    }
    if let Some(network) = &tx.network {
        writeln!(output, "Network: {}", network)?;
    }
    writeln!(output, "Amount: {:.2}", tx.amount)?;
    writeln!(output, "Fee: {:.2}", tx.fee)?;
    writeln!(output, "Total: {:.2}", tx.amount + tx.fee)?;
    if let Some(wallet) = &tx.sender_wallet {
        writeln!(output, "From: {}", wallet)?;
    }
    if let Some(wallet) = &tx.recipient_wallet {
        writeln!(output, "To: {}", wallet)?;
    }
    writeln!(output, "Status: {}", tx.status.as_str())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::types::{TransactionKind, TransactionStatus};
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    fn record(action: &str) -> ScriptRecord {
        ScriptRecord {
            action: action.to_string(),
            ..Default::default()
        }
    }

    fn with(
        mut record: ScriptRecord,
        amount: &str,
        method: &str,
        counterparty: &str,
    ) -> ScriptRecord {
        record.amount = Some(amount.to_string());
        record.method = Some(method.to_string());
        record.counterparty = Some(counterparty.to_string());
        record
    }

    #[test]
    fn test_convert_login() {
        let mut row = record("LOGIN");
        row.phone = Some(" 0700000001 ".to_string());
        row.password = Some("user1234".to_string());

        let step = convert_script_record(row).unwrap();
        assert_eq!(
            step.action,
            ScriptAction::Login {
                phone: "0700000001".to_string(),
                password: "user1234".to_string(),
            }
        );
        assert_eq!(step.pin, None);
    }

    #[rstest]
    #[case::deposit("deposit", ScriptAction::Deposit { amount: Decimal::from(1000), method: PaymentMethod::Mpesa })]
    #[case::withdraw("withdraw", ScriptAction::Withdraw { amount: Decimal::from(1000), method: PaymentMethod::Mpesa })]
    #[case::withdraw_agent("withdraw_agent", ScriptAction::WithdrawToAgent { amount: Decimal::from(1000), agent_phone: "0700000002".to_string() })]
    #[case::send_money("send_money", ScriptAction::SendMoney { amount: Decimal::from(1000), recipient_phone: "0700000002".to_string() })]
    #[case::transfer("transfer", ScriptAction::Transfer { amount: Decimal::from(1000), recipient_phone: "0700000002".to_string() })]
    #[case::send_to_wallet("send_to_wallet", ScriptAction::SendToWallet { amount: Decimal::from(1000), wallet_id: "0700000002".to_string() })]
    #[case::agent_deposit("agent_deposit", ScriptAction::AgentDeposit { amount: Decimal::from(1000), wallet_id: "0700000002".to_string(), method: Some(PaymentMethod::Mpesa) })]
    fn test_convert_amount_actions(#[case] action: &str, #[case] expected: ScriptAction) {
        let row = with(record(action), "1000", "mpesa", "0700000002");
        assert_eq!(convert_script_record(row).unwrap().action, expected);
    }

    #[test]
    fn test_convert_keeps_pin_and_network() {
        let mut row = record("airtime");
        row.amount = Some("100".to_string());
        row.detail = Some("Safaricom".to_string());
        row.pin = Some("1234".to_string());

        let step = convert_script_record(row).unwrap();
        assert_eq!(
            step.action,
            ScriptAction::Airtime {
                amount: Decimal::from(100),
                network: Some("Safaricom".to_string()),
            }
        );
        assert_eq!(step.pin.as_deref(), Some("1234"));
    }

    #[test]
    fn test_convert_kyc() {
        let mut row = record("kyc");
        row.counterparty = Some("WLT-2024-0004".to_string());
        row.detail = Some("Approved".to_string());

        assert_eq!(
            convert_script_record(row).unwrap().action,
            ScriptAction::Kyc {
                wallet_id: "WLT-2024-0004".to_string(),
                status: KycStatus::Approved,
            }
        );
    }

    #[rstest]
    #[case::invalid_action(record("teleport"), "Invalid action")]
    #[case::missing_amount(record("deposit"), "missing the amount column")]
    #[case::invalid_amount(with(record("deposit"), "abc", "mpesa", ""), "Invalid amount")]
    #[case::invalid_method(with(record("withdraw"), "10", "paypal", ""), "Invalid payment method")]
    #[case::missing_recipient(with(record("send_money"), "10", "", " "), "missing the counterparty column")]
    #[case::missing_password(ScriptRecord { phone: Some("0700".to_string()), ..record("login") }, "missing the password column")]
    #[case::invalid_kyc(ScriptRecord { counterparty: Some("W".to_string()), detail: Some("maybe".to_string()), ..record("kyc") }, "Invalid KYC status")]
    fn test_convert_errors(#[case] row: ScriptRecord, #[case] expected_error: &str) {
        let err = convert_script_record(row).unwrap_err();
        assert!(err.contains(expected_error), "unexpected error: {}", err);
    }

    #[test]
    fn test_write_users_csv_sorted_two_decimals() {
        let users = seed::demo_users();
        let mut refs: Vec<&User> = users.iter().collect();
        refs.reverse();

        let mut output = Vec::new();
        write_users_csv(&refs, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "id,wallet,name,role,balance,total_deposits,total_withdrawn,total_transfers,kyc_status"
        );
        assert_eq!(
            lines[1],
            "usr-001,WLT-2024-0001,John Doe,user,15000.00,45200.00,28300.00,12500.00,approved"
        );
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_write_users_csv_empty() {
        let mut output = Vec::new();
        write_users_csv(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap().lines().count(), 1);
    }

    fn sample_transaction() -> Transaction {
        Transaction {
            id: "txn-1".to_string(),
            date: Utc.with_ymd_and_hms(2024, 2, 10, 14, 23, 45).unwrap(),
            user_id: "usr-001".to_string(),
            user_name: "John Doe".to_string(),
            kind: TransactionKind::SendMoney,
            method: None,
            network: None,
            amount: Decimal::from(2500),
            fee: Decimal::from(45),
            status: TransactionStatus::Completed,
            reference: "TXN-20240210-003".to_string(),
            sender_wallet: Some("WLT-2024-0001".to_string()),
            recipient_wallet: Some("WLT-2024-0002".to_string()),
        }
    }

    #[test]
    fn test_write_statement_csv() {
        let tx = sample_transaction();
        let mut output = Vec::new();
        write_statement_csv(&[&tx], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "date,reference,type,amount,fee,status");
        assert_eq!(
            lines[1],
            "2024-02-10 14:23,TXN-20240210-003,send_money,2500.00,45.00,completed"
        );
    }

    #[test]
    fn test_write_receipt() {
        let tx = sample_transaction();
        let mut output = Vec::new();
        write_receipt(&tx, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Reference: TXN-20240210-003"));
        assert!(text.contains("Total: 2545.00"));
        assert!(text.contains("To: WLT-2024-0002"));
        assert!(!text.contains("Method:"));
    }
}
