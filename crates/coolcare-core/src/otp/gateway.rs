//! OTP collaborator port.

use crate::error::GatewayError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Reply of the OTP service to a dispatch or verification request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OtpReply {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OtpReply {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// An abstract OTP dispatch and verification service.
///
/// Implementations contact an SMS gateway (or a backend fronting one). A
/// `GatewayError` means the service could not be reached or answered
/// garbage; an explicit refusal is an `Ok(OtpReply { success: false, .. })`.
#[async_trait]
pub trait OtpGateway: Send + Sync {
    /// Sends a fresh code to `phone`.
    async fn send_code(&self, phone: &str) -> Result<OtpReply, GatewayError>;

    /// Checks `code` against the last code sent to `phone`.
    async fn verify_code(&self, phone: &str, code: &str) -> Result<OtpReply, GatewayError>;
}
