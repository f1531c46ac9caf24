//! Application configuration model.
//!
//! Every field has a default so a partial (or missing) `config.toml` still
//! yields a usable configuration.

use crate::order::Money;
use crate::otp::OtpPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub booking: BookingSettings,
    pub checkout: CheckoutSettings,
    pub admin: AdminSettings,
    pub logging: LoggingSettings,
}

/// Location of the booking backend (OTP and order endpoints).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            timeout_secs: 10,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BookingSettings {
    /// Advance collected at booking time, in minor units.
    pub advance_amount_minor: u64,
    pub currency: String,
    pub resend_cooldown_secs: u32,
    pub min_otp_length: usize,
    /// How long to wait for the hosted checkout to report back; `0` waits
    /// forever.
    pub payment_timeout_secs: u64,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            advance_amount_minor: 9900,
            currency: "INR".to_string(),
            resend_cooldown_secs: 60,
            min_otp_length: 3,
            payment_timeout_secs: 900,
        }
    }
}

impl BookingSettings {
    pub fn advance(&self) -> Money {
        Money::new(self.advance_amount_minor, self.currency.clone())
    }

    pub fn otp_policy(&self) -> OtpPolicy {
        OtpPolicy {
            resend_cooldown_secs: self.resend_cooldown_secs,
            min_code_length: self.min_otp_length,
        }
    }

    pub fn payment_timeout(&self) -> Option<Duration> {
        (self.payment_timeout_secs > 0).then(|| Duration::from_secs(self.payment_timeout_secs))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CheckoutSettings {
    pub key_id: String,
    pub script_url: String,
    pub merchant_name: String,
    pub theme_color: String,
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self {
            key_id: String::new(),
            script_url: "https://checkout.razorpay.com/v1/checkout.js".to_string(),
            merchant_name: "AC Services Booking".to_string(),
            theme_color: "#0ea5e9".to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AdminSettings {
    pub base_url: String,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api/admin".to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
