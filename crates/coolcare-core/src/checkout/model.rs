//! Checkout options and outcomes.

use crate::booking::BookingDraft;
use crate::config::CheckoutSettings;
use crate::order::{CreatedOrder, OrderRequest};
use serde::{Deserialize, Serialize};

/// Customer details pre-filled in the hosted checkout.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Prefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutTheme {
    pub color: String,
}

/// Everything the checkout library constructor needs except the callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOptions {
    /// Publishable key of the merchant account.
    pub key: String,
    /// Amount in minor units.
    pub amount: u64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub order_id: String,
    pub prefill: Prefill,
    pub theme: CheckoutTheme,
}

impl CheckoutOptions {
    /// Builds the options for `order`, pre-filling the customer from the
    /// request's booking snapshot.
    pub fn for_order(
        settings: &CheckoutSettings,
        order: &CreatedOrder,
        request: &OrderRequest,
    ) -> Self {
        let charge = order.charge(request);
        let customer: &BookingDraft = request.metadata();
        Self {
            key: settings.key_id.clone(),
            amount: charge.minor_units,
            currency: charge.currency,
            name: settings.merchant_name.clone(),
            description: format!("Booking advance for {}", customer.service),
            order_id: order.id.clone(),
            prefill: Prefill {
                name: customer.customer_name.clone(),
                email: customer.email.clone(),
                contact: customer.phone.clone(),
            },
            theme: CheckoutTheme {
                color: settings.theme_color.clone(),
            },
        }
    }
}

/// Payload of a completed payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSuccess {
    pub payment_id: String,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub signature: Option<String>,
}

impl PaymentSuccess {
    pub fn new(payment_id: impl Into<String>) -> Self {
        Self {
            payment_id: payment_id.into(),
            order_id: None,
            signature: None,
        }
    }
}

/// Payload of a `payment.failed` report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutFailure {
    pub reason: String,
    #[serde(default)]
    pub code: Option<String>,
}

impl CheckoutFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            code: None,
        }
    }
}

/// How a hosted checkout ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckoutOutcome {
    Paid(PaymentSuccess),
    Failed(CheckoutFailure),
    /// The adapter released its callbacks without firing either.
    Abandoned,
    /// No callback arrived within the payment timeout.
    TimedOut,
}
