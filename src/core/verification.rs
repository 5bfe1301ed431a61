//! Static-code identity verification
//!
//! The demo confirms actions with fixed OTP and PIN codes. This carries no
//! security guarantee; a production deployment must put a real out-of-band
//! verifier behind [`CodeVerifier`].

use crate::core::traits::{CodeVerifier, VerificationChannel};
use crate::types::LedgerError;

pub const DEMO_OTP: &str = "123456";
pub const DEMO_PIN: &str = "1234";

/// Verifier comparing against configured constant codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCodeVerifier {
    otp: String,
    pin: String,
}

impl StaticCodeVerifier {
    pub fn new(otp: impl Into<String>, pin: impl Into<String>) -> Self {
        StaticCodeVerifier {
            otp: otp.into(),
            pin: pin.into(),
        }
    }
}

impl Default for StaticCodeVerifier {
    fn default() -> Self {
        Self::new(DEMO_OTP, DEMO_PIN)
    }
}

impl CodeVerifier for StaticCodeVerifier {
    fn verify(&self, channel: VerificationChannel, code: &str) -> Result<(), LedgerError> {
        let expected = match channel {
            VerificationChannel::Otp => &self.otp,
            VerificationChannel::Pin => &self.pin,
        };
        if code.trim() == expected {
            Ok(())
        } else {
            Err(LedgerError::verification_failed(channel.as_str()))
        }
    }
}
