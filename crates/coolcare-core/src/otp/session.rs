//! Phone verification state machine.

use super::cooldown::ResendCooldown;
use super::gateway::OtpGateway;
use super::model::{OtpPolicy, OtpStatus};
use crate::booking::is_valid_phone;
use crate::error::BookingError;
use std::sync::Arc;

/// Tracks verification of one phone number: `Unsent -> Sent -> Verified`.
///
/// - `Sent -> Sent` happens on a resend once the cooldown has elapsed.
/// - Any state returns to `Unsent` on [`reset`](Self::reset) or when the
///   phone number changes.
///
/// Operations take `&mut self`, so at most one dispatch or verification
/// request is in flight per session.
pub struct OtpSession {
    gateway: Arc<dyn OtpGateway>,
    policy: OtpPolicy,
    phone: Option<String>,
    status: OtpStatus,
    cooldown: ResendCooldown,
}

impl OtpSession {
    pub fn new(gateway: Arc<dyn OtpGateway>, policy: OtpPolicy) -> Self {
        Self {
            gateway,
            policy,
            phone: None,
            status: OtpStatus::Unsent,
            cooldown: ResendCooldown::new(),
        }
    }

    pub fn status(&self) -> OtpStatus {
        self.status
    }

    pub fn is_verified(&self) -> bool {
        self.status == OtpStatus::Verified
    }

    /// The phone number the current code was sent to, if any.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn resend_cooldown_seconds(&self) -> u32 {
        self.cooldown.remaining_secs()
    }

    pub fn policy(&self) -> OtpPolicy {
        self.policy
    }

    /// Requests a code for `phone`.
    ///
    /// Fails without contacting the collaborator when the number is invalid,
    /// when it is already verified, or while the resend cooldown is running.
    /// A successful dispatch moves the session to `Sent` and arms the
    /// cooldown.
    pub async fn send_code(&mut self, phone: &str) -> Result<(), BookingError> {
        if !is_valid_phone(phone) {
            return Err(BookingError::invalid_phone(phone));
        }

        // A different number invalidates whatever was sent before.
        self.phone_changed(phone);

        if self.status == OtpStatus::Verified {
            return Err(BookingError::invalid_state("send a code", "phone is verified"));
        }
        if self.cooldown.is_active() {
            return Err(BookingError::CooldownActive {
                remaining_secs: self.cooldown.remaining_secs(),
            });
        }

        let reply = self.gateway.send_code(phone).await.map_err(|e| {
            tracing::warn!(target: "otp", "OTP dispatch unreachable: {}", e);
            BookingError::OtpDispatchFailed {
                message: e.to_string(),
            }
        })?;

        if !reply.success {
            let message = reply
                .message
                .unwrap_or_else(|| "OTP service returned error".to_string());
            tracing::warn!(target: "otp", "OTP dispatch rejected: {}", message);
            return Err(BookingError::OtpDispatchFailed { message });
        }

        self.phone = Some(phone.to_string());
        self.status = OtpStatus::Sent;
        self.cooldown.arm(self.policy.resend_cooldown_secs);
        tracing::info!(target: "otp", "OTP sent to {}", mask_phone(phone));
        Ok(())
    }

    /// Submits `submitted` for verification.
    ///
    /// Requires the `Sent` state and a code of at least
    /// [`OtpPolicy::min_code_length`] characters after trimming; neither check
    /// contacts the collaborator. A rejection or an unreachable collaborator
    /// leaves the session in `Sent` so the customer can retry.
    pub async fn verify_code(&mut self, submitted: &str) -> Result<(), BookingError> {
        let code = submitted.trim();

        if self.status != OtpStatus::Sent {
            return Err(BookingError::invalid_state(
                "verify a code",
                format!("OTP is {}", self.status),
            ));
        }
        // A code is never empty, whatever the configured minimum.
        let min_length = self.policy.min_code_length.max(1);
        if code.chars().count() < min_length {
            return Err(BookingError::CodeTooShort { min_length });
        }
        let Some(phone) = self.phone.clone() else {
            return Err(BookingError::invalid_state("verify a code", "no phone on record"));
        };

        let reply = self.gateway.verify_code(&phone, code).await.map_err(|e| {
            tracing::warn!(target: "otp", "OTP verification unreachable: {}", e);
            BookingError::VerificationUnavailable {
                message: e.to_string(),
            }
        })?;

        if !reply.success {
            return Err(BookingError::InvalidCode {
                message: reply.message.unwrap_or_default(),
            });
        }

        self.status = OtpStatus::Verified;
        self.cooldown.cancel();
        tracing::info!(target: "otp", "Phone {} verified", mask_phone(&phone));
        Ok(())
    }

    /// Resets to `Unsent` if `phone` differs from the number on record.
    ///
    /// Returns whether a reset happened.
    pub fn phone_changed(&mut self, phone: &str) -> bool {
        match self.phone.as_deref() {
            Some(current) if current != phone => {
                tracing::debug!(target: "otp", "Phone number changed, invalidating OTP session");
                self.reset();
                true
            }
            _ => false,
        }
    }

    /// Returns to `Unsent`, forgetting the phone number and stopping the
    /// cooldown.
    pub fn reset(&mut self) {
        self.phone = None;
        self.status = OtpStatus::Unsent;
        self.cooldown.cancel();
    }
}

impl std::fmt::Debug for OtpSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtpSession")
            .field("phone", &self.phone)
            .field("status", &self.status)
            .field("resend_cooldown_seconds", &self.resend_cooldown_seconds())
            .finish()
    }
}

fn mask_phone(phone: &str) -> String {
    let visible = phone.len().saturating_sub(4);
    format!("{}{}", "*".repeat(visible), &phone[visible..])
}
