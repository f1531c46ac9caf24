//! Error types for the Coolcare application.
//!
//! Three families live here:
//!
//! - [`BookingError`]: everything the booking workflow can report back to a
//!   customer. All variants are recoverable; the workflow always returns to
//!   an editable state.
//! - [`GatewayError`]: transport-level failures of an external collaborator
//!   (OTP service, order service, checkout script host, admin API).
//! - [`CoolcareError`]: infrastructure and back-office errors (repositories,
//!   configuration, form validation).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures surfaced by the booking workflow and its components.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BookingError {
    /// The phone number is not exactly 10 ASCII digits.
    #[error("Invalid phone number: '{phone}'")]
    InvalidPhone { phone: String },

    /// A code was sent recently; resending is blocked until the cooldown ends.
    #[error("Resend blocked for another {remaining_secs}s")]
    CooldownActive { remaining_secs: u32 },

    /// The collaborator refused or failed to dispatch a code.
    #[error("OTP dispatch failed: {message}")]
    OtpDispatchFailed { message: String },

    /// The submitted code is empty or shorter than the minimum length.
    #[error("OTP code too short (minimum {min_length} characters)")]
    CodeTooShort { min_length: usize },

    /// The collaborator rejected the submitted code.
    #[error("Invalid OTP code: {message}")]
    InvalidCode { message: String },

    /// The verification collaborator could not be reached.
    #[error("OTP verification unavailable: {message}")]
    VerificationUnavailable { message: String },

    /// One or more required booking fields are empty.
    #[error("Booking form incomplete, missing: {}", .missing.join(", "))]
    IncompleteForm { missing: Vec<String> },

    /// An order was requested before the phone number was verified.
    #[error("Phone number has not been verified")]
    PhoneNotVerified,

    /// The third-party checkout library could not be loaded.
    #[error("Checkout script failed to load: {message}")]
    ScriptLoadFailed { message: String },

    /// The order-creation collaborator failed or rejected the order.
    #[error("Order creation failed: {message}")]
    OrderCreationFailed { message: String },

    /// The hosted checkout reported a failure or was abandoned.
    #[error("Payment failed: {reason}")]
    PaymentFailed { reason: String },

    /// The operation is not allowed in the current workflow state.
    #[error("Cannot {operation} while {state}")]
    InvalidState {
        operation: &'static str,
        state: String,
    },
}

impl BookingError {
    pub fn invalid_phone(phone: impl Into<String>) -> Self {
        Self::InvalidPhone {
            phone: phone.into(),
        }
    }

    pub fn invalid_state(operation: &'static str, state: impl ToString) -> Self {
        Self::InvalidState {
            operation,
            state: state.to_string(),
        }
    }

    /// Human-readable message suitable for showing next to the booking form.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidPhone { .. } => "Please enter a valid 10-digit phone number.".to_string(),
            Self::CooldownActive { remaining_secs } => {
                format!("Please wait {remaining_secs}s before requesting a new OTP.")
            }
            Self::OtpDispatchFailed { .. } => {
                "Could not send OTP. Check backend or phone number.".to_string()
            }
            Self::CodeTooShort { .. } => "Please enter the OTP sent to your phone.".to_string(),
            Self::InvalidCode { message } if !message.is_empty() => message.clone(),
            Self::InvalidCode { .. } => "Invalid OTP".to_string(),
            Self::VerificationUnavailable { .. } => {
                "OTP verification failed. Try again.".to_string()
            }
            Self::IncompleteForm { .. } => {
                "Please fill name, email, date and time before paying.".to_string()
            }
            Self::PhoneNotVerified => {
                "Please verify your phone number with OTP before paying.".to_string()
            }
            Self::ScriptLoadFailed { .. } | Self::OrderCreationFailed { .. } => {
                "Payment initiation failed. Please try again.".to_string()
            }
            Self::PaymentFailed { .. } => "Payment failed or was cancelled.".to_string(),
            Self::InvalidState { .. } => "Please wait for the current step to finish.".to_string(),
        }
    }

    /// Every booking error leaves the workflow in a state from which the
    /// customer can retry.
    pub fn is_retryable(&self) -> bool {
        true
    }
}

/// Transport-level failure of an external collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatewayError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The collaborator answered with a non-success HTTP status.
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// A shared error type for infrastructure and back-office operations.
#[derive(Error, Debug, Clone, Serialize)]
pub enum CoolcareError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// An entity with the same ID is already stored
    #[error("Entity already exists: {entity_type} '{id}'")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },

    /// Form or field validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// External collaborator error
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoolcareError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    pub fn already_exists(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity_type,
            id: id.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for CoolcareError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for CoolcareError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CoolcareError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for CoolcareError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CoolcareError>`.
pub type Result<T> = std::result::Result<T, CoolcareError>;
