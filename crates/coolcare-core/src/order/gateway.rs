//! Order-creation collaborator port.

use super::model::{CreatedOrder, OrderRequest};
use crate::error::GatewayError;
use async_trait::async_trait;

/// An abstract order-creation service (typically a backend that registers
/// the order with the payment provider and returns the provider's order id).
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Creates an order for `request`.
    ///
    /// # Returns
    ///
    /// - `Ok(CreatedOrder)`: the provider order to hand to checkout
    /// - `Err(GatewayError)`: the service was unreachable or refused the order
    async fn create_order(&self, request: &OrderRequest) -> Result<CreatedOrder, GatewayError>;
}
