//! One-shot checkout completion callbacks.

use super::model::{CheckoutFailure, CheckoutOutcome, PaymentSuccess};
use std::time::Duration;
use tokio::sync::oneshot;

/// The `onSuccess` / `onFailure` pair handed to a checkout adapter.
///
/// Both methods consume `self`, so at most one of them can fire per
/// [`CheckoutAdapter::open`](super::CheckoutAdapter::open) call.
#[derive(Debug)]
pub struct CheckoutCallbacks {
    sender: oneshot::Sender<CheckoutOutcome>,
}

impl CheckoutCallbacks {
    /// Creates a callback pair and the receiving end the workflow waits on.
    pub fn pair() -> (Self, PendingCheckout) {
        let (sender, receiver) = oneshot::channel();
        (Self { sender }, PendingCheckout { receiver })
    }

    pub fn on_success(self, payment: PaymentSuccess) {
        self.deliver(CheckoutOutcome::Paid(payment));
    }

    pub fn on_failure(self, failure: CheckoutFailure) {
        self.deliver(CheckoutOutcome::Failed(failure));
    }

    /// Whether the workflow stopped listening (for example after a reset).
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    fn deliver(self, outcome: CheckoutOutcome) {
        if self.sender.send(outcome).is_err() {
            tracing::debug!(
                target: "checkout",
                "Checkout outcome dropped, workflow no longer listening"
            );
        }
    }
}

/// Receiving side of a [`CheckoutCallbacks`] pair.
#[derive(Debug)]
pub struct PendingCheckout {
    receiver: oneshot::Receiver<CheckoutOutcome>,
}

impl PendingCheckout {
    /// Waits for the checkout to finish.
    ///
    /// Resolves to `Abandoned` if the callbacks are dropped unfired and to
    /// `TimedOut` if `timeout` elapses first. Dropping the returned future
    /// keeps the checkout pending, so the wait can be resumed; once an
    /// outcome has been returned the checkout must not be waited on again.
    pub async fn wait(&mut self, timeout: Option<Duration>) -> CheckoutOutcome {
        let received = match timeout {
            Some(limit) => match tokio::time::timeout(limit, &mut self.receiver).await {
                Ok(received) => received,
                Err(_) => return CheckoutOutcome::TimedOut,
            },
            None => (&mut self.receiver).await,
        };
        received.unwrap_or(CheckoutOutcome::Abandoned)
    }

    /// Returns the outcome if one has already been delivered.
    pub fn try_outcome(&mut self) -> Option<CheckoutOutcome> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(CheckoutOutcome::Abandoned),
        }
    }
}
