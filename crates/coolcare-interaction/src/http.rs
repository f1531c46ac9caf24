//! Shared request plumbing for the HTTP collaborators.

use coolcare_core::GatewayError;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub(crate) fn build_client(timeout: Duration) -> Result<Client, GatewayError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| GatewayError::Transport(format!("Failed to build HTTP client: {}", e)))
}

/// Joins `base` and `path` with exactly one slash between them.
pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Sends `request` and fails with `GatewayError::Status` on a non-2xx reply.
pub(crate) async fn send(request: RequestBuilder) -> Result<Response, GatewayError> {
    let response = request
        .send()
        .await
        .map_err(|e| GatewayError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(GatewayError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Sends `request` and decodes a JSON reply.
pub(crate) async fn send_json<R: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<R, GatewayError> {
    send(request)
        .await?
        .json::<R>()
        .await
        .map_err(|e| GatewayError::Decode(e.to_string()))
}
