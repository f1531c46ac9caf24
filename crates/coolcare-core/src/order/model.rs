//! Order domain model.

use crate::booking::BookingDraft;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount in the currency's minor unit (paise for INR).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub minor_units: u64,
    /// ISO 4217 currency code.
    pub currency: String,
}

impl Money {
    pub fn new(minor_units: u64, currency: impl Into<String>) -> Self {
        Self {
            minor_units,
            currency: currency.into(),
        }
    }

    pub fn inr(minor_units: u64) -> Self {
        Self::new(minor_units, "INR")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02} {}",
            self.minor_units / 100,
            self.minor_units % 100,
            self.currency
        )
    }
}

/// Request body sent to the order-creation collaborator.
///
/// Only [`OrderRequestBuilder`](super::OrderRequestBuilder) creates these, and
/// the fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    advance_amount_minor_units: u64,
    currency: String,
    metadata: BookingDraft,
}

impl OrderRequest {
    pub(crate) fn new(advance: Money, metadata: BookingDraft) -> Self {
        Self {
            advance_amount_minor_units: advance.minor_units,
            currency: advance.currency,
            metadata,
        }
    }

    pub fn advance(&self) -> Money {
        Money::new(self.advance_amount_minor_units, self.currency.clone())
    }

    /// Snapshot of the booking form taken when the request was built.
    pub fn metadata(&self) -> &BookingDraft {
        &self.metadata
    }
}

/// Order returned by the order-creation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub id: String,
    /// Amount in minor units, when the collaborator echoes it.
    #[serde(default)]
    pub amount: Option<u64>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl CreatedOrder {
    /// The amount to charge, falling back to the requested advance for any
    /// part the collaborator left out.
    pub fn charge(&self, request: &OrderRequest) -> Money {
        let advance = request.advance();
        Money::new(
            self.amount.unwrap_or(advance.minor_units),
            self.currency.clone().unwrap_or(advance.currency),
        )
    }
}

/// Terminal artifact of a successful booking run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: String,
    pub payment_id: String,
    pub amount: Money,
    pub customer: BookingDraft,
}
