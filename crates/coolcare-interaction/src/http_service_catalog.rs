//! HttpServiceCatalog - the admin service list behind the back-office REST API.
//!
//! Endpoints (relative to the admin base URL):
//! - `GET /services`
//! - `POST /services`
//! - `PUT /services/{id}`
//! - `DELETE /services/{id}`

use crate::http::{build_client, endpoint, send, send_json};
use async_trait::async_trait;
use coolcare_core::admin::ServiceOffering;
use coolcare_core::error::{CoolcareError, Result};
use coolcare_core::repository::{Entity, Repository};
use coolcare_core::GatewayError;
use reqwest::Client;
use std::time::Duration;

#[derive(Clone)]
pub struct HttpServiceCatalog {
    client: Client,
    base_url: String,
}

impl HttpServiceCatalog {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into(),
        })
    }

    fn item_url(&self, id: &str) -> String {
        endpoint(&self.base_url, &format!("services/{}", id))
    }
}

/// Maps a 404 for `id` to `NotFound`; everything else stays a gateway error.
fn not_found_for(id: &str) -> impl FnOnce(GatewayError) -> CoolcareError + '_ {
    move |err| match err {
        GatewayError::Status { status: 404, .. } => {
            CoolcareError::not_found(ServiceOffering::ENTITY_TYPE, id)
        }
        other => other.into(),
    }
}

#[async_trait]
impl Repository<ServiceOffering> for HttpServiceCatalog {
    async fn list(&self) -> Result<Vec<ServiceOffering>> {
        let services: Vec<ServiceOffering> =
            send_json(self.client.get(endpoint(&self.base_url, "services"))).await?;
        tracing::debug!(target: "admin", "Fetched {} services", services.len());
        Ok(services)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ServiceOffering>> {
        // The API has no single-item GET.
        let services = self.list().await?;
        Ok(services.into_iter().find(|service| service.id == id))
    }

    async fn add(&self, entity: ServiceOffering) -> Result<ServiceOffering> {
        let request = self
            .client
            .post(endpoint(&self.base_url, "services"))
            .json(&entity);
        let created: ServiceOffering = send_json(request).await.map_err(|err| match err {
            GatewayError::Status { status: 409, .. } => {
                CoolcareError::already_exists(ServiceOffering::ENTITY_TYPE, entity.id.clone())
            }
            other => other.into(),
        })?;
        tracing::info!(target: "admin", "Created service '{}'", created.id);
        Ok(created)
    }

    async fn update(&self, entity: ServiceOffering) -> Result<ServiceOffering> {
        let request = self.client.put(self.item_url(&entity.id)).json(&entity);
        let updated = send_json(request).await.map_err(not_found_for(&entity.id))?;
        tracing::info!(target: "admin", "Updated service '{}'", entity.id);
        Ok(updated)
    }

    async fn remove(&self, id: &str) -> Result<()> {
        send(self.client.delete(self.item_url(id)))
            .await
            .map_err(not_found_for(id))?;
        tracing::info!(target: "admin", "Deleted service '{}'", id);
        Ok(())
    }
}
