//! Ledger configuration loading from a TOML file
//!
//! Every table is optional. Omitted tables fall back to the built-in demo
//! seed, so an empty file (or no file at all) yields the demo ledger.
//!
//! ```toml
//! default_currency = "KES"
//!
//! [verification]
//! otp = "123456"
//! pin = "1234"
//!
//! [[currencies]]
//! code = "KES"
//! name = "Kenyan Shilling"
//! symbol = "KSh"
//! ```

use crate::core::ledger_store::Seed;
use crate::core::verification::{DEMO_OTP, DEMO_PIN};
use crate::seed;
use crate::types::{CommissionConfig, Currency, FeeConfig, LedgerError, User};
use serde::Deserialize;
use std::path::Path;

/// Codes accepted by the OTP and PIN gates
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    pub otp: String,
    pub pin: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        VerificationConfig {
            otp: DEMO_OTP.to_string(),
            pin: DEMO_PIN.to_string(),
        }
    }
}

/// Configuration structure representing the entire TOML file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Currency assigned to users that do not name one
    pub default_currency: String,

    pub verification: VerificationConfig,

    /// Replaces the demo users; the demo ledger history is dropped with them
    pub users: Option<Vec<User>>,

    pub currencies: Option<Vec<Currency>>,
    pub fees: Option<Vec<FeeConfig>>,
    pub commissions: Option<Vec<CommissionConfig>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            default_currency: "KES".to_string(),
            verification: VerificationConfig::default(),
            users: None,
            currencies: None,
            fees: None,
            commissions: None,
        }
    }
}

impl AppConfig {
    /// Check cross-table consistency
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Config` if the default currency is not
    /// registered or a verification code is blank.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.verification.otp.trim().is_empty() || self.verification.pin.trim().is_empty() {
            return Err(LedgerError::config("verification codes must not be empty"));
        }
        let default_code = self.default_currency.trim().to_uppercase();
        let registered = self
            .currency_table()
            .iter()
            .any(|currency| currency.code == default_code);
        if !registered {
            return Err(LedgerError::config(format!(
                "default currency {} is not registered",
                default_code
            )));
        }
        Ok(())
    }

    fn currency_table(&self) -> Vec<Currency> {
        match &self.currencies {
            Some(currencies) => currencies
                .iter()
                .map(|c| Currency {
                    code: c.code.trim().to_uppercase(),
                    ..c.clone()
                })
                .collect(),
            None => seed::demo_currencies(),
        }
    }

    /// Seed data described by this configuration
    pub fn seed(&self) -> Seed {
        let default_currency = self.default_currency.trim().to_uppercase();
        let (users, transactions) = match &self.users {
            Some(users) => (users.clone(), Vec::new()),
            None => (seed::demo_users(), seed::demo_transactions()),
        };
        let users = users
            .into_iter()
            .map(|mut user| {
                if user.currency.trim().is_empty() {
                    user.currency = default_currency.clone();
                }
                user
            })
            .collect();

        Seed {
            users,
            transactions,
            currencies: self.currency_table(),
            fees: self.fees.clone().unwrap_or_else(seed::demo_fees),
            commissions: self
                .commissions
                .clone()
                .unwrap_or_else(seed::demo_commissions),
        }
    }
}

/// Loads ledger configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the configuration file
///
/// # Returns
/// * `Ok(AppConfig)` - Successfully parsed and validated configuration
/// * `Err(LedgerError::Config)` - Failed to read, parse or validate the file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, LedgerError> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        LedgerError::config(format!(
            "Failed to read config file {}: {e}",
            path.as_ref().display()
        ))
    })?;
    parse_config(&contents)
}

/// Parse and validate configuration from TOML text
pub fn parse_config(contents: &str) -> Result<AppConfig, LedgerError> {
    let config: AppConfig = toml::from_str(contents)
        .map_err(|e| LedgerError::config(format!("Failed to parse config: {e}")))?;
    config.validate()?;
    Ok(config)
}
