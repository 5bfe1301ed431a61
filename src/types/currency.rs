//! Currency definitions selectable by users

use serde::{Deserialize, Serialize};

/// A currency users may pick as their preferred display currency
///
/// Balances are single-currency; no conversion is modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO-style code, stored upper-case
    pub code: String,
    pub name: String,
    pub symbol: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl Currency {
    /// Build an enabled currency, upper-casing the code
    ///
    /// An empty symbol falls back to the code.
    pub fn new(code: &str, name: &str, symbol: &str) -> Self {
        let code = code.trim().to_uppercase();
        let symbol = if symbol.trim().is_empty() {
            code.clone()
        } else {
            symbol.trim().to_string()
        };
        Currency {
            code,
            name: name.trim().to_string(),
            symbol,
            enabled: true,
        }
    }
}
