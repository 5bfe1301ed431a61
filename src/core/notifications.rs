//! Notification message builders
//!
//! Every committed operation produces one message for the acting user and,
//! when a counterparty is credited, one for the counterparty. The acting
//! user's message doubles as the operation's success text.

use crate::types::{TransactionKind, User};
use rust_decimal::Decimal;

/// Tag used for statement-download notifications
pub const STATEMENT_TAG: &str = "statement";

/// Render an amount with thousands separators (`2500` -> `2,500`)
///
/// Trailing fractional zeros are dropped.
pub fn format_amount(amount: Decimal) -> String {
    let normalized = amount.normalize();
    let text = normalized.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if normalized.is_sign_negative() && !normalized.is_zero() {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

fn money(user: &User, amount: Decimal) -> String {
    format!("{} {}", user.currency, format_amount(amount))
}

/// Message for the acting user of a self-directed operation
pub fn actor_message(actor: &User, kind: TransactionKind, amount: Decimal) -> String {
    match kind {
        TransactionKind::Deposit => format!(
            "{} deposited to wallet {}",
            money(actor, amount),
            actor.wallet_id
        ),
        TransactionKind::Withdrawal => format!(
            "{} withdrawn from wallet {}",
            money(actor, amount),
            actor.wallet_id
        ),
        TransactionKind::SendMoney => format!(
            "Money sent - {} from wallet {}",
            money(actor, amount),
            actor.wallet_id
        ),
        TransactionKind::Airtime => format!(
            "Airtime purchased - {} from wallet {}",
            money(actor, amount),
            actor.wallet_id
        ),
        TransactionKind::Transfer | TransactionKind::KycUpdate => format!(
            "Transaction - {} from wallet {}",
            money(actor, amount),
            actor.wallet_id
        ),
    }
}

/// Message for the sender of a transfer with a resolved recipient
pub fn transfer_sent_message(sender: &User, recipient: &User, amount: Decimal) -> String {
    format!(
        "{} sent to {} ({})",
        money(sender, amount),
        recipient.name,
        recipient.wallet_id
    )
}

/// Message for the recipient of a transfer or send-money
///
/// Amounts are quoted in the sender's currency.
pub fn received_message(sender: &User, amount: Decimal) -> String {
    format!(
        "{} received from {} ({})",
        money(sender, amount),
        sender.name,
        sender.wallet_id
    )
}

/// Message for an agent who funded a customer wallet
pub fn agent_deposit_message(agent: &User, target: &User, amount: Decimal) -> String {
    format!(
        "{} deposited to {} ({})",
        money(agent, amount),
        target.name,
        target.wallet_id
    )
}

/// Message for the customer whose wallet an agent funded
pub fn agent_credit_message(agent: &User, amount: Decimal) -> String {
    format!(
        "{} received from agent {} ({})",
        money(agent, amount),
        agent.name,
        agent.wallet_id
    )
}

pub fn statement_message(user: &User, fee: Decimal) -> String {
    format!(
        "Statement downloaded - {} deducted from wallet {}",
        money(user, fee),
        user.wallet_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{KycStatus, Role};
    use rstest::rstest;

    fn user(name: &str, wallet: &str) -> User {
        User {
            id: "usr-x".to_string(),
            phone: "0700".to_string(),
            password: "pw".to_string(),
            name: name.to_string(),
            role: Role::User,
            wallet_id: wallet.to_string(),
            balance: Decimal::ZERO,
            total_deposits: Decimal::ZERO,
            total_withdrawn: Decimal::ZERO,
            total_transfers: Decimal::ZERO,
            kyc_status: KycStatus::Approved,
            currency: "KES".to_string(),
        }
    }

    #[rstest]
    #[case(Decimal::from(0), "0")]
    #[case(Decimal::from(50), "50")]
    #[case(Decimal::from(2500), "2,500")]
    #[case(Decimal::from(123456), "123,456")]
    #[case(Decimal::from(1234567), "1,234,567")]
    #[case(Decimal::new(250050, 2), "2,500.5")]
    #[case(Decimal::new(100000, 2), "1,000")]
    #[case(Decimal::from(-2500), "-2,500")]
    fn test_format_amount(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }

    #[test]
    fn test_actor_messages() {
        let john = user("John Doe", "WLT-2024-0001");
        assert_eq!(
            actor_message(&john, TransactionKind::Deposit, Decimal::from(5000)),
            "KES 5,000 deposited to wallet WLT-2024-0001"
        );
        assert_eq!(
            actor_message(&john, TransactionKind::Airtime, Decimal::from(100)),
            "Airtime purchased - KES 100 from wallet WLT-2024-0001"
        );
    }

    #[test]
    fn test_counterparty_messages() {
        let agent = user("Sarah Kamau", "WLT-2024-0002");
        let john = user("John Doe", "WLT-2024-0001");
        assert_eq!(
            agent_deposit_message(&agent, &john, Decimal::from(5000)),
            "KES 5,000 deposited to John Doe (WLT-2024-0001)"
        );
        assert_eq!(
            agent_credit_message(&agent, Decimal::from(5000)),
            "KES 5,000 received from agent Sarah Kamau (WLT-2024-0002)"
        );
        assert_eq!(
            received_message(&john, Decimal::from(2500)),
            "KES 2,500 received from John Doe (WLT-2024-0001)"
        );
    }
}
