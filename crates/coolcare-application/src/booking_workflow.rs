//! Booking workflow controller.
//!
//! Owns one booking attempt from the first keystroke to the payment
//! confirmation:
//!
//! ```text
//! Editing -> OtpPending -> OtpVerified -> OrderCreating -> AwaitingPayment -> Confirmed
//! ```
//!
//! Failures never end the workflow. A failed step publishes
//! [`WorkflowEvent::Failed`] and hands control back to the state it started
//! from (or to `OtpVerified` once the order stage has been entered), where
//! the operation can be retried.

use coolcare_core::BookingError;
use coolcare_core::booking::{BookingDraft, DraftField, ServiceKind};
use coolcare_core::checkout::{
    CheckoutAdapter, CheckoutCallbacks, CheckoutOptions, CheckoutOutcome, PendingCheckout,
};
use coolcare_core::config::{AppConfig, CheckoutSettings};
use coolcare_core::order::{
    CreatedOrder, Money, OrderConfirmation, OrderGateway, OrderRequest, OrderRequestBuilder,
};
use coolcare_core::otp::{OtpGateway, OtpPolicy, OtpSession, OtpStatus};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use strum::Display;
use tokio::sync::broadcast;

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    #[default]
    #[strum(to_string = "editing")]
    Editing,
    #[strum(to_string = "waiting for the OTP")]
    OtpPending,
    #[strum(to_string = "phone verified")]
    OtpVerified,
    #[strum(to_string = "creating the order")]
    OrderCreating,
    #[strum(to_string = "awaiting payment")]
    AwaitingPayment,
    #[strum(to_string = "confirmed")]
    Confirmed,
}

impl WorkflowState {
    /// Whether the booking form may still be changed.
    pub fn is_editable(self) -> bool {
        matches!(self, Self::Editing | Self::OtpPending | Self::OtpVerified)
    }
}

/// Notifications published by [`BookingWorkflow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkflowEvent {
    StateChanged {
        from: WorkflowState,
        to: WorkflowState,
    },
    /// A step failed in `during`; the workflow continues from `resumed`.
    Failed {
        during: WorkflowState,
        resumed: WorkflowState,
        error: BookingError,
    },
    Confirmed(OrderConfirmation),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSettings {
    pub advance: Money,
    pub otp_policy: OtpPolicy,
    pub checkout: CheckoutSettings,
    /// How long to wait for the checkout outcome; `None` waits indefinitely.
    pub payment_timeout: Option<Duration>,
}

impl WorkflowSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            advance: config.booking.advance(),
            otp_policy: config.booking.otp_policy(),
            checkout: config.checkout.clone(),
            payment_timeout: config.booking.payment_timeout(),
        }
    }
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// The order handed to the hosted checkout and the channel its outcome
/// arrives on.
#[derive(Debug)]
struct InFlightPayment {
    request: OrderRequest,
    order: CreatedOrder,
    pending: PendingCheckout,
}

/// State machine for a single booking attempt.
///
/// Every operation takes `&mut self`, so at most one collaborator call is
/// outstanding per workflow. Dropping the workflow stops the OTP resend
/// cooldown and detaches any open checkout; late checkout callbacks are
/// ignored.
///
/// # Example
///
/// ```ignore
/// let mut workflow = BookingWorkflow::new(otp, orders, checkout, WorkflowSettings::default());
/// workflow.edit(DraftField::Phone, "9876543210")?;
/// workflow.request_code().await?;
/// workflow.verify_code("1234").await?;
/// workflow.submit_payment().await?;
/// let confirmation = workflow.await_payment().await?;
/// ```
pub struct BookingWorkflow {
    orders: Arc<dyn OrderGateway>,
    checkout: Arc<dyn CheckoutAdapter>,
    settings: WorkflowSettings,
    order_builder: OrderRequestBuilder,
    state: WorkflowState,
    draft: BookingDraft,
    otp: OtpSession,
    payment: Option<InFlightPayment>,
    confirmation: Option<OrderConfirmation>,
    last_error: Option<BookingError>,
    events: broadcast::Sender<WorkflowEvent>,
}

impl BookingWorkflow {
    pub fn new(
        otp_gateway: Arc<dyn OtpGateway>,
        orders: Arc<dyn OrderGateway>,
        checkout: Arc<dyn CheckoutAdapter>,
        settings: WorkflowSettings,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            orders,
            checkout,
            order_builder: OrderRequestBuilder::new(settings.advance.clone()),
            otp: OtpSession::new(otp_gateway, settings.otp_policy),
            settings,
            state: WorkflowState::Editing,
            draft: BookingDraft::default(),
            payment: None,
            confirmation: None,
            last_error: None,
            events,
        }
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn otp_status(&self) -> OtpStatus {
        self.otp.status()
    }

    pub fn resend_cooldown_seconds(&self) -> u32 {
        self.otp.resend_cooldown_seconds()
    }

    pub fn confirmation(&self) -> Option<&OrderConfirmation> {
        self.confirmation.as_ref()
    }

    /// The error of the most recent operation, cleared when the next one starts.
    pub fn last_error(&self) -> Option<&BookingError> {
        self.last_error.as_ref()
    }

    pub fn settings(&self) -> &WorkflowSettings {
        &self.settings
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WorkflowEvent> {
        self.events.subscribe()
    }

    // ============================================================================
    // Form editing
    // ============================================================================

    /// Updates one field of the booking form. Returns whether the value changed.
    ///
    /// Changing the phone number invalidates any code sent or verified for
    /// the previous number and returns the workflow to `Editing`.
    pub fn edit(
        &mut self,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<bool, BookingError> {
        self.last_error = None;
        self.ensure_editable("edit the booking")?;

        let changed = self.draft.set_field(field, value);
        if changed && field == DraftField::Phone && self.otp.status() != OtpStatus::Unsent {
            tracing::debug!(target: "workflow", "Phone edited, discarding OTP progress");
            self.otp.reset();
            self.transition(WorkflowState::Editing);
        }
        Ok(changed)
    }

    pub fn select_service(&mut self, service: ServiceKind) -> Result<(), BookingError> {
        self.last_error = None;
        self.ensure_editable("change the service")?;
        self.draft.service = service;
        Ok(())
    }

    // ============================================================================
    // Phone verification
    // ============================================================================

    /// Sends (or resends) a code to the phone number in the form.
    pub async fn request_code(&mut self) -> Result<(), BookingError> {
        self.last_error = None;
        let from = self.state;
        if !matches!(from, WorkflowState::Editing | WorkflowState::OtpPending) {
            return Err(self.fail(from, from, BookingError::invalid_state("send a code", from)));
        }

        match self.otp.send_code(&self.draft.phone).await {
            Ok(()) => {
                self.transition(WorkflowState::OtpPending);
                Ok(())
            }
            Err(err) => Err(self.fail(from, from, err)),
        }
    }

    pub async fn verify_code(&mut self, code: &str) -> Result<(), BookingError> {
        self.last_error = None;
        let from = self.state;
        if from != WorkflowState::OtpPending {
            return Err(self.fail(from, from, BookingError::invalid_state("verify a code", from)));
        }

        match self.otp.verify_code(code).await {
            Ok(()) => {
                self.transition(WorkflowState::OtpVerified);
                Ok(())
            }
            Err(err) => Err(self.fail(from, from, err)),
        }
    }

    // ============================================================================
    // Payment
    // ============================================================================

    /// Creates the advance order and opens the hosted checkout.
    ///
    /// On success the workflow is `AwaitingPayment`; the outcome is collected
    /// with [`await_payment`](Self::await_payment) or
    /// [`poll_payment`](Self::poll_payment). A failed order creation or
    /// script load returns the workflow to `OtpVerified` without touching
    /// the verification, so the call can simply be repeated.
    pub async fn submit_payment(&mut self) -> Result<(), BookingError> {
        self.last_error = None;
        self.recover_interrupted_submit();
        let from = self.state;
        if !from.is_editable() {
            return Err(self.fail(from, from, BookingError::invalid_state("submit payment", from)));
        }

        let request = match self.order_builder.build(&self.draft, self.otp.status()) {
            Ok(request) => request,
            Err(err) => return Err(self.fail(from, from, err)),
        };

        self.transition(WorkflowState::OrderCreating);
        let order = match self.orders.create_order(&request).await {
            Ok(order) => order,
            Err(e) => {
                let err = BookingError::OrderCreationFailed {
                    message: e.to_string(),
                };
                return Err(self.fail(
                    WorkflowState::OrderCreating,
                    WorkflowState::OtpVerified,
                    err,
                ));
            }
        };
        if let Err(err) = self.checkout.ensure_loaded().await {
            return Err(self.fail(WorkflowState::OrderCreating, WorkflowState::OtpVerified, err));
        }

        let options = CheckoutOptions::for_order(&self.settings.checkout, &order, &request);
        let (callbacks, pending) = CheckoutCallbacks::pair();
        tracing::info!(
            target: "workflow",
            "Order {} created, opening checkout for {}",
            order.id,
            order.charge(&request)
        );
        self.payment = Some(InFlightPayment {
            request,
            order,
            pending,
        });
        self.transition(WorkflowState::AwaitingPayment);
        self.checkout.open(options, callbacks);
        Ok(())
    }

    /// Waits for the hosted checkout to report back and applies the outcome.
    ///
    /// Abandonment (callbacks dropped unfired) and the configured payment
    /// timeout are reported as `PaymentFailed`. Cancelling this future
    /// leaves the checkout pending.
    pub async fn await_payment(&mut self) -> Result<OrderConfirmation, BookingError> {
        self.last_error = None;
        let from = self.state;
        if from != WorkflowState::AwaitingPayment {
            let err = BookingError::invalid_state("wait for payment", from);
            return Err(self.fail(from, from, err));
        }

        let timeout = self.settings.payment_timeout;
        let outcome = match self.payment.as_mut() {
            Some(payment) => payment.pending.wait(timeout).await,
            None => CheckoutOutcome::Abandoned,
        };
        self.settle(outcome)
    }

    /// Applies the checkout outcome if it has already arrived.
    pub fn poll_payment(&mut self) -> Option<Result<OrderConfirmation, BookingError>> {
        if self.state != WorkflowState::AwaitingPayment {
            return None;
        }
        let outcome = match self.payment.as_mut() {
            Some(payment) => payment.pending.try_outcome()?,
            None => CheckoutOutcome::Abandoned,
        };
        self.last_error = None;
        Some(self.settle(outcome))
    }

    fn settle(&mut self, outcome: CheckoutOutcome) -> Result<OrderConfirmation, BookingError> {
        let payment = self.payment.take();
        let (success, payment) = match (outcome, payment) {
            (CheckoutOutcome::Paid(success), Some(payment)) => (success, payment),
            (outcome, _) => {
                let err = BookingError::PaymentFailed {
                    reason: failure_reason(&outcome),
                };
                return Err(self.fail(
                    WorkflowState::AwaitingPayment,
                    WorkflowState::OtpVerified,
                    err,
                ));
            }
        };

        let confirmation = OrderConfirmation {
            amount: payment.order.charge(&payment.request),
            order_id: payment.order.id,
            payment_id: success.payment_id,
            customer: payment.request.metadata().clone(),
        };
        tracing::info!(
            target: "workflow",
            "Booking confirmed: order {} paid with {}",
            confirmation.order_id,
            confirmation.payment_id
        );
        self.confirmation = Some(confirmation.clone());
        self.transition(WorkflowState::Confirmed);
        self.emit(WorkflowEvent::Confirmed(confirmation.clone()));
        Ok(confirmation)
    }

    // ============================================================================
    // Teardown
    // ============================================================================

    /// Discards the form, the OTP session and any in-flight order, and
    /// returns to `Editing`. Allowed in every state.
    ///
    /// An already open checkout cannot be closed from here; its callbacks are
    /// simply no longer listened to.
    pub fn reset(&mut self) {
        if self.payment.take().is_some() {
            tracing::debug!(target: "workflow", "Detached from open checkout");
        }
        self.draft = BookingDraft::default();
        self.otp.reset();
        self.confirmation = None;
        self.last_error = None;
        self.transition(WorkflowState::Editing);
        self.emit(WorkflowEvent::Reset);
    }

    /// Acknowledges a confirmed booking and starts over.
    ///
    /// Returns the confirmation, or `None` when the workflow is not `Confirmed`.
    pub fn dismiss_confirmation(&mut self) -> Option<OrderConfirmation> {
        if self.state != WorkflowState::Confirmed {
            return None;
        }
        let confirmation = self.confirmation.take();
        self.reset();
        confirmation
    }

    // ============================================================================
    // Internals
    // ============================================================================

    fn ensure_editable(&mut self, operation: &'static str) -> Result<(), BookingError> {
        self.recover_interrupted_submit();
        let state = self.state;
        if state.is_editable() {
            Ok(())
        } else {
            Err(self.fail(state, state, BookingError::invalid_state(operation, state)))
        }
    }

    /// `OrderCreating` only lasts for the duration of a `submit_payment`
    /// call. Seeing it on entry to another `&mut self` operation means that
    /// call was dropped mid-flight, so fall back to the verified state.
    fn recover_interrupted_submit(&mut self) {
        if self.state == WorkflowState::OrderCreating {
            tracing::warn!(target: "workflow", "Payment submission was interrupted, resuming");
            self.payment = None;
            self.transition(WorkflowState::OtpVerified);
        }
    }

    fn transition(&mut self, to: WorkflowState) {
        let from = self.state;
        if from == to {
            return;
        }
        self.state = to;
        tracing::debug!(target: "workflow", "{:?} -> {:?}", from, to);
        self.emit(WorkflowEvent::StateChanged { from, to });
    }

    /// Records `error`, publishes it and moves to `resumed`. Returns the error
    /// for the caller to propagate.
    fn fail(
        &mut self,
        during: WorkflowState,
        resumed: WorkflowState,
        error: BookingError,
    ) -> BookingError {
        tracing::warn!(target: "workflow", "Failed while {}: {}", during, error);
        self.last_error = Some(error.clone());
        self.emit(WorkflowEvent::Failed {
            during,
            resumed,
            error: error.clone(),
        });
        self.transition(resumed);
        error
    }

    fn emit(&self, event: WorkflowEvent) {
        // No subscribers is not an error.
        let _ = self.events.send(event);
    }
}

fn failure_reason(outcome: &CheckoutOutcome) -> String {
    match outcome {
        CheckoutOutcome::Failed(failure) => match &failure.code {
            Some(code) => format!("{} ({})", failure.reason, code),
            None => failure.reason.clone(),
        },
        CheckoutOutcome::Abandoned => {
            "Checkout was closed before the payment completed".to_string()
        }
        CheckoutOutcome::TimedOut => "Payment was not completed in time".to_string(),
        CheckoutOutcome::Paid(_) => "No order is awaiting payment".to_string(),
    }
}
