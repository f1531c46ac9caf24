//! Where the hosted checkout library comes from.

use crate::http::{build_client, send};
use async_trait::async_trait;
use coolcare_core::GatewayError;
use reqwest::Client;
use std::time::Duration;

/// A fetched copy of the checkout library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedScript {
    pub url: String,
    pub size_bytes: usize,
}

/// Fetches the checkout library. Called at most once per successful load.
#[async_trait]
pub trait ScriptSource: Send + Sync {
    async fn fetch(&self) -> Result<LoadedScript, GatewayError>;
}

/// Downloads the library from its CDN URL.
#[derive(Clone)]
pub struct HttpScriptSource {
    client: Client,
    url: String,
}

impl HttpScriptSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_client(timeout)?,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ScriptSource for HttpScriptSource {
    async fn fetch(&self) -> Result<LoadedScript, GatewayError> {
        let bytes = send(self.client.get(&self.url))
            .await?
            .bytes()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if bytes.is_empty() {
            return Err(GatewayError::Decode(format!("{} returned an empty script", self.url)));
        }
        Ok(LoadedScript {
            url: self.url.clone(),
            size_bytes: bytes.len(),
        })
    }
}
