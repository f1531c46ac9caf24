use serde::{Deserialize, Serialize};
use strum::Display;

/// Verification status of the phone number attached to a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum OtpStatus {
    /// No code has been requested for the current phone number.
    #[default]
    Unsent,
    /// A code was dispatched and is awaiting verification.
    Sent,
    /// The customer proved control of the phone number.
    Verified,
}

/// Tunables for an [`OtpSession`](super::OtpSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpPolicy {
    /// Seconds that must elapse before another code may be requested.
    pub resend_cooldown_secs: u32,
    /// Minimum length of a submitted code, after trimming.
    pub min_code_length: usize,
}

impl Default for OtpPolicy {
    fn default() -> Self {
        Self {
            resend_cooldown_secs: 60,
            min_code_length: 3,
        }
    }
}
