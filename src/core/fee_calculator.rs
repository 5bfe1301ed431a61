//! Fee calculation
//!
//! Pure mapping from (amount, fee kind) to the fee charged on top of the
//! amount. Rates are fixed; the admin fee table is not consulted.

use rust_decimal::{Decimal, RoundingStrategy};

/// Fixed charge for downloading a statement, debited outside this calculator
pub const STATEMENT_DOWNLOAD_FEE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Fee for withdrawals, regardless of amount
pub const WITHDRAWAL_FEE: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// 1.5%
const DEPOSIT_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// 1.8%, applied to both transfer and send-money
const TRANSFER_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 1);

/// Fee categories understood by [`calculate_fee`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeKind {
    Deposit,
    Withdrawal,
    /// Covers both `transfer` and `send_money`
    Transfer,
}

/// Compute the fee for `amount`
///
/// Percentage fees are rounded half-up to the nearest whole currency unit.
///
/// # Examples
///
/// ```
/// use abanremit_ledger::core::fee_calculator::{calculate_fee, FeeKind};
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_fee(Decimal::from(1000), FeeKind::Transfer), Decimal::from(18));
/// ```
pub fn calculate_fee(amount: Decimal, kind: FeeKind) -> Decimal {
    match kind {
        FeeKind::Deposit => percentage(amount, DEPOSIT_RATE),
        FeeKind::Withdrawal => WITHDRAWAL_FEE,
        FeeKind::Transfer => percentage(amount, TRANSFER_RATE),
    }
}

fn percentage(amount: Decimal, rate: Decimal) -> Decimal {
    (amount * rate / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
