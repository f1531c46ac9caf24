//! Hand-written collaborator doubles shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use coolcare_application::{BookingWorkflow, WorkflowSettings};
use coolcare_core::booking::DraftField;
use coolcare_core::checkout::{
    CheckoutAdapter, CheckoutCallbacks, CheckoutFailure, CheckoutOptions, PaymentSuccess,
};
use coolcare_core::order::{CreatedOrder, OrderGateway, OrderRequest};
use coolcare_core::otp::{OtpGateway, OtpReply};
use coolcare_core::{BookingError, GatewayError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const PHONE: &str = "9876543210";

// Mock OtpGateway: succeeds unless a reply is queued
#[derive(Default)]
pub struct MockOtpGateway {
    pub sent: Mutex<Vec<String>>,
    pub verified: Mutex<Vec<(String, String)>>,
    pub send_replies: Mutex<VecDeque<Result<OtpReply, GatewayError>>>,
    pub verify_replies: Mutex<VecDeque<Result<OtpReply, GatewayError>>>,
}

impl MockOtpGateway {
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn verified_count(&self) -> usize {
        self.verified.lock().unwrap().len()
    }

    pub fn queue_verify(&self, reply: Result<OtpReply, GatewayError>) {
        self.verify_replies.lock().unwrap().push_back(reply);
    }
}

#[async_trait]
impl OtpGateway for MockOtpGateway {
    async fn send_code(&self, phone: &str) -> Result<OtpReply, GatewayError> {
        self.sent.lock().unwrap().push(phone.to_string());
        self.send_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(OtpReply::ok()))
    }

    async fn verify_code(&self, phone: &str, code: &str) -> Result<OtpReply, GatewayError> {
        self.verified
            .lock()
            .unwrap()
            .push((phone.to_string(), code.to_string()));
        self.verify_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(OtpReply::ok()))
    }
}

// Mock OrderGateway: answers order_1 for 99.00 INR unless a reply is queued
#[derive(Default)]
pub struct MockOrderGateway {
    pub requests: Mutex<Vec<OrderRequest>>,
    pub replies: Mutex<VecDeque<Result<CreatedOrder, GatewayError>>>,
    /// How long `create_order` takes before answering.
    pub latency: Mutex<Option<Duration>>,
}

impl MockOrderGateway {
    pub fn queue(&self, reply: Result<CreatedOrder, GatewayError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn set_latency(&self, latency: Option<Duration>) {
        *self.latency.lock().unwrap() = latency;
    }
}

#[async_trait]
impl OrderGateway for MockOrderGateway {
    async fn create_order(&self, request: &OrderRequest) -> Result<CreatedOrder, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        let latency = *self.latency.lock().unwrap();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        self.replies.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(CreatedOrder {
                id: "order_1".to_string(),
                amount: Some(9900),
                currency: Some("INR".to_string()),
            })
        })
    }
}

// Mock CheckoutAdapter: keeps the callbacks of the last `open` for the test to fire
#[derive(Default)]
pub struct MockCheckout {
    pub loads: Mutex<usize>,
    pub load_failures: Mutex<VecDeque<String>>,
    pub opened: Mutex<Vec<CheckoutOptions>>,
    pub callbacks: Mutex<Option<CheckoutCallbacks>>,
}

impl MockCheckout {
    pub fn pay(&self, payment_id: &str) {
        self.take_callbacks().on_success(PaymentSuccess::new(payment_id));
    }

    pub fn decline(&self, reason: &str) {
        self.take_callbacks().on_failure(CheckoutFailure::new(reason));
    }

    /// Closes the hosted UI without reporting anything.
    pub fn abandon(&self) {
        drop(self.take_callbacks());
    }

    pub fn listener_gone(&self) -> bool {
        self.callbacks
            .lock()
            .unwrap()
            .as_ref()
            .map(CheckoutCallbacks::is_closed)
            .unwrap_or(true)
    }

    pub fn last_options(&self) -> CheckoutOptions {
        self.opened.lock().unwrap().last().cloned().unwrap()
    }

    fn take_callbacks(&self) -> CheckoutCallbacks {
        self.callbacks.lock().unwrap().take().expect("checkout was not opened")
    }
}

#[async_trait]
impl CheckoutAdapter for MockCheckout {
    async fn ensure_loaded(&self) -> Result<(), BookingError> {
        *self.loads.lock().unwrap() += 1;
        match self.load_failures.lock().unwrap().pop_front() {
            Some(message) => Err(BookingError::ScriptLoadFailed { message }),
            None => Ok(()),
        }
    }

    fn open(&self, options: CheckoutOptions, callbacks: CheckoutCallbacks) {
        self.opened.lock().unwrap().push(options);
        *self.callbacks.lock().unwrap() = Some(callbacks);
    }
}

pub struct Harness {
    pub otp: Arc<MockOtpGateway>,
    pub orders: Arc<MockOrderGateway>,
    pub checkout: Arc<MockCheckout>,
    pub workflow: BookingWorkflow,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_settings(WorkflowSettings::default())
    }

    pub fn with_settings(settings: WorkflowSettings) -> Self {
        let otp = Arc::new(MockOtpGateway::default());
        let orders = Arc::new(MockOrderGateway::default());
        let checkout = Arc::new(MockCheckout::default());
        let workflow =
            BookingWorkflow::new(otp.clone(), orders.clone(), checkout.clone(), settings);
        Self {
            otp,
            orders,
            checkout,
            workflow,
        }
    }

    /// Fills every field of the form with valid values.
    pub fn fill_form(&mut self) {
        let fields = [
            (DraftField::CustomerName, "Rahul Verma"),
            (DraftField::Email, "rahul@example.com"),
            (DraftField::Phone, PHONE),
            (DraftField::Date, "2025-10-28"),
            (DraftField::Time, "10:00"),
        ];
        for (field, value) in fields {
            self.workflow.edit(field, value).unwrap();
        }
    }

    /// Fills the form and verifies the phone.
    pub async fn verified(mut self) -> Self {
        self.fill_form();
        self.workflow.request_code().await.unwrap();
        self.workflow.verify_code("1234").await.unwrap();
        self
    }
}
