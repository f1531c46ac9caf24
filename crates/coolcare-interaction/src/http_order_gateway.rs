//! HttpOrderGateway - order creation over the booking backend.
//!
//! `POST /orders` with the serialized `OrderRequest`; the reply is the
//! payment provider's order (`{ id, amount?, currency? }`).

use crate::http::{build_client, endpoint, send_json};
use async_trait::async_trait;
use coolcare_core::GatewayError;
use coolcare_core::config::ApiSettings;
use coolcare_core::order::{CreatedOrder, OrderGateway, OrderRequest};
use reqwest::Client;

#[derive(Clone)]
pub struct HttpOrderGateway {
    client: Client,
    base_url: String,
}

impl HttpOrderGateway {
    pub fn new(settings: &ApiSettings) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_client(settings.timeout())?,
            base_url: settings.base_url.clone(),
        })
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn create_order(&self, request: &OrderRequest) -> Result<CreatedOrder, GatewayError> {
        let builder = self
            .client
            .post(endpoint(&self.base_url, "orders"))
            .json(request);
        let order: CreatedOrder = send_json(builder).await?;
        tracing::info!(target: "checkout", "Order {} created", order.id);
        Ok(order)
    }
}
