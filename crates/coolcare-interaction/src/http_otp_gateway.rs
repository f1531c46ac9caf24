//! HttpOtpGateway - OTP dispatch and verification over the booking backend.
//!
//! Endpoints (relative to the API base URL):
//! - `POST /otp/send` with `{ "phone": ... }`
//! - `POST /otp/verify` with `{ "phone": ..., "code": ... }`
//!
//! Both answer `{ "success": bool, "message"?: string }`.

use crate::http::{build_client, endpoint, send_json};
use async_trait::async_trait;
use coolcare_core::GatewayError;
use coolcare_core::config::ApiSettings;
use coolcare_core::otp::{OtpGateway, OtpReply};
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SendOtpRequest<'a> {
    phone: &'a str,
}

#[derive(Debug, Serialize)]
struct VerifyOtpRequest<'a> {
    phone: &'a str,
    code: &'a str,
}

#[derive(Clone)]
pub struct HttpOtpGateway {
    client: Client,
    base_url: String,
}

impl HttpOtpGateway {
    pub fn new(settings: &ApiSettings) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_client(settings.timeout())?,
            base_url: settings.base_url.clone(),
        })
    }
}

#[async_trait]
impl OtpGateway for HttpOtpGateway {
    async fn send_code(&self, phone: &str) -> Result<OtpReply, GatewayError> {
        let request = self
            .client
            .post(endpoint(&self.base_url, "otp/send"))
            .json(&SendOtpRequest { phone });
        let reply: OtpReply = send_json(request).await?;
        tracing::debug!(target: "otp", "otp/send answered success={}", reply.success);
        Ok(reply)
    }

    async fn verify_code(&self, phone: &str, code: &str) -> Result<OtpReply, GatewayError> {
        let request = self
            .client
            .post(endpoint(&self.base_url, "otp/verify"))
            .json(&VerifyOtpRequest { phone, code });
        let reply: OtpReply = send_json(request).await?;
        tracing::debug!(target: "otp", "otp/verify answered success={}", reply.success);
        Ok(reply)
    }
}
