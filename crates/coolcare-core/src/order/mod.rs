//! Advance-payment order domain module.
//!
//! # Module Structure
//!
//! - `model`: `Money`, `OrderRequest`, `CreatedOrder`, `OrderConfirmation`
//! - `builder`: assembles an `OrderRequest` from a verified booking
//! - `gateway`: port to the external order-creation service

mod builder;
mod gateway;
mod model;

pub use builder::OrderRequestBuilder;
pub use gateway::OrderGateway;
pub use model::{CreatedOrder, Money, OrderConfirmation, OrderRequest};
