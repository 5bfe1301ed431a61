//! Fee and commission rate tables shown in the admin console
//!
//! These tables are configuration data. The transaction processor charges
//! fees through [`crate::core::fee_calculator`], not through these entries.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How a fee entry is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeType {
    /// `fee_amount` percent of the transaction amount
    Percentage,
    /// `fee_amount` currency units regardless of amount
    Fixed,
}

/// One row of the fee table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeConfig {
    pub id: String,
    pub transaction_type: String,
    pub fee_type: FeeType,
    pub fee_amount: Decimal,
    pub active: bool,
}

impl FeeConfig {
    /// Fee this entry would charge on `amount`, rounded half-up to whole units
    pub fn apply(&self, amount: Decimal) -> Decimal {
        match self.fee_type {
            FeeType::Percentage => (amount * self.fee_amount / Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            FeeType::Fixed => self.fee_amount,
        }
    }
}

/// One row of the commission table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionConfig {
    pub id: String,
    pub commission_type: String,
    /// Percentage rate
    pub rate: Decimal,
}
