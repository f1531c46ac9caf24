mod common;

use common::{Harness, PHONE};
use coolcare_application::{WorkflowEvent, WorkflowSettings, WorkflowState};
use coolcare_core::booking::{BookingDraft, DraftField, ServiceKind};
use coolcare_core::order::{CreatedOrder, Money};
use coolcare_core::otp::{OtpReply, OtpStatus};
use coolcare_core::{BookingError, GatewayError};
use std::time::Duration;
use tokio::sync::broadcast::Receiver;

fn drain(events: &mut Receiver<WorkflowEvent>) -> Vec<WorkflowEvent> {
    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event);
    }
    seen
}

fn changed(from: WorkflowState, to: WorkflowState) -> WorkflowEvent {
    WorkflowEvent::StateChanged { from, to }
}

#[tokio::test]
async fn test_valid_phone_is_sent_and_verified() {
    let mut h = Harness::new();
    h.workflow.edit(DraftField::Phone, PHONE).unwrap();

    h.workflow.request_code().await.unwrap();
    assert_eq!(h.workflow.state(), WorkflowState::OtpPending);
    assert_eq!(h.workflow.otp_status(), OtpStatus::Sent);

    h.workflow.verify_code("1234").await.unwrap();
    assert_eq!(h.workflow.state(), WorkflowState::OtpVerified);
    assert_eq!(h.workflow.otp_status(), OtpStatus::Verified);
    assert_eq!(
        *h.otp.verified.lock().unwrap(),
        vec![(PHONE.to_string(), "1234".to_string())]
    );
}

#[tokio::test]
async fn test_invalid_phone_never_reaches_gateway() {
    let mut h = Harness::new();
    h.workflow.edit(DraftField::Phone, "123").unwrap();

    let err = h.workflow.request_code().await.unwrap_err();
    assert_eq!(
        err,
        BookingError::InvalidPhone {
            phone: "123".to_string()
        }
    );
    assert_eq!(h.otp.sent_count(), 0);
    assert_eq!(h.workflow.state(), WorkflowState::Editing);
}

#[tokio::test]
async fn test_full_booking_is_confirmed() {
    let mut h = Harness::new().verified().await;
    let mut events = h.workflow.subscribe();

    h.workflow.submit_payment().await.unwrap();
    assert_eq!(h.workflow.state(), WorkflowState::AwaitingPayment);

    let options = h.checkout.last_options();
    assert_eq!(options.order_id, "order_1");
    assert_eq!(options.amount, 9900);
    assert_eq!(options.currency, "INR");
    assert_eq!(options.prefill.contact, PHONE);
    assert_eq!(options.description, "Booking advance for AC Installation");

    h.checkout.pay("pay_1");
    let confirmation = h.workflow.await_payment().await.unwrap();

    assert_eq!(confirmation.order_id, "order_1");
    assert_eq!(confirmation.payment_id, "pay_1");
    assert_eq!(confirmation.amount, Money::inr(9900));
    assert_eq!(confirmation.customer.customer_name, "Rahul Verma");
    assert_eq!(h.workflow.state(), WorkflowState::Confirmed);
    assert_eq!(h.workflow.confirmation(), Some(&confirmation));

    assert_eq!(
        drain(&mut events),
        vec![
            changed(WorkflowState::OtpVerified, WorkflowState::OrderCreating),
            changed(WorkflowState::OrderCreating, WorkflowState::AwaitingPayment),
            changed(WorkflowState::AwaitingPayment, WorkflowState::Confirmed),
            WorkflowEvent::Confirmed(confirmation),
        ]
    );
}

#[tokio::test]
async fn test_order_failure_allows_retry_without_reverifying() {
    let mut h = Harness::new().verified().await;
    h.orders
        .queue(Err(GatewayError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        }));
    let mut events = h.workflow.subscribe();

    let err = h.workflow.submit_payment().await.unwrap_err();
    assert!(matches!(err, BookingError::OrderCreationFailed { .. }));
    assert_eq!(h.workflow.state(), WorkflowState::OtpVerified);
    assert_eq!(h.workflow.last_error(), Some(&err));
    assert_eq!(
        drain(&mut events),
        vec![
            changed(WorkflowState::OtpVerified, WorkflowState::OrderCreating),
            WorkflowEvent::Failed {
                during: WorkflowState::OrderCreating,
                resumed: WorkflowState::OtpVerified,
                error: err,
            },
            changed(WorkflowState::OrderCreating, WorkflowState::OtpVerified),
        ]
    );

    h.workflow.submit_payment().await.unwrap();
    assert_eq!(h.workflow.state(), WorkflowState::AwaitingPayment);
    assert_eq!(h.workflow.last_error(), None);
    assert_eq!(h.orders.request_count(), 2);
    assert_eq!(h.otp.verified_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_submit_can_be_retried_without_reverifying() {
    let mut h = Harness::new().verified().await;
    h.orders.set_latency(Some(Duration::from_secs(30)));

    let dropped = tokio::time::timeout(Duration::from_secs(1), h.workflow.submit_payment()).await;
    assert!(dropped.is_err());
    assert_eq!(h.workflow.state(), WorkflowState::OrderCreating);

    h.orders.set_latency(None);
    h.workflow.submit_payment().await.unwrap();
    assert_eq!(h.workflow.state(), WorkflowState::AwaitingPayment);
    assert_eq!(h.orders.request_count(), 2);
    assert_eq!(h.otp.verified_count(), 1);

    h.checkout.pay("pay_1");
    let confirmation = h.workflow.await_payment().await.unwrap();
    assert_eq!(confirmation.order_id, "order_1");
}

#[tokio::test(start_paused = true)]
async fn test_form_is_editable_after_dropped_submit() {
    let mut h = Harness::new().verified().await;
    h.orders.set_latency(Some(Duration::from_secs(30)));

    let dropped = tokio::time::timeout(Duration::from_secs(1), h.workflow.submit_payment()).await;
    assert!(dropped.is_err());

    assert!(h.workflow.edit(DraftField::Time, "11:30").unwrap());
    assert_eq!(h.workflow.state(), WorkflowState::OtpVerified);
    assert_eq!(h.workflow.otp_status(), OtpStatus::Verified);
    assert_eq!(h.workflow.draft().time, "11:30");
}

#[tokio::test]
async fn test_order_without_amount_charges_configured_advance() {
    let mut h = Harness::new().verified().await;
    h.orders.queue(Ok(CreatedOrder {
        id: "order_2".to_string(),
        amount: None,
        currency: None,
    }));

    h.workflow.submit_payment().await.unwrap();
    assert_eq!(h.checkout.last_options().amount, 9900);
    assert_eq!(h.checkout.last_options().currency, "INR");
}

#[tokio::test]
async fn test_script_load_failure_returns_to_verified() {
    let mut h = Harness::new().verified().await;
    h.checkout
        .load_failures
        .lock()
        .unwrap()
        .push_back("Razorpay SDK failed to load".to_string());

    let err = h.workflow.submit_payment().await.unwrap_err();
    assert!(matches!(err, BookingError::ScriptLoadFailed { .. }));
    assert_eq!(h.workflow.state(), WorkflowState::OtpVerified);
    assert!(h.checkout.opened.lock().unwrap().is_empty());

    h.workflow.submit_payment().await.unwrap();
    assert_eq!(*h.checkout.loads.lock().unwrap(), 2);
}

#[tokio::test]
async fn test_submit_requires_verified_phone_first() {
    let mut h = Harness::new();
    h.fill_form();

    let err = h.workflow.submit_payment().await.unwrap_err();
    assert_eq!(err, BookingError::PhoneNotVerified);
    assert_eq!(h.orders.request_count(), 0);
}

#[tokio::test]
async fn test_submit_reports_missing_fields() {
    let mut h = Harness::new().verified().await;
    h.workflow.edit(DraftField::Email, "").unwrap();
    h.workflow.edit(DraftField::Time, "").unwrap();

    let err = h.workflow.submit_payment().await.unwrap_err();
    assert_eq!(
        err,
        BookingError::IncompleteForm {
            missing: vec!["email".to_string(), "time".to_string()]
        }
    );
    assert_eq!(h.workflow.state(), WorkflowState::OtpVerified);
}

#[tokio::test]
async fn test_declined_payment_returns_to_verified() {
    let mut h = Harness::new().verified().await;
    h.workflow.submit_payment().await.unwrap();

    h.checkout.decline("Card declined");
    let err = h.workflow.await_payment().await.unwrap_err();
    assert_eq!(
        err,
        BookingError::PaymentFailed {
            reason: "Card declined".to_string()
        }
    );
    assert_eq!(h.workflow.state(), WorkflowState::OtpVerified);
    assert!(h.workflow.confirmation().is_none());

    h.workflow.submit_payment().await.unwrap();
    assert_eq!(h.workflow.state(), WorkflowState::AwaitingPayment);
}

#[tokio::test]
async fn test_abandoned_checkout_is_a_payment_failure() {
    let mut h = Harness::new().verified().await;
    h.workflow.submit_payment().await.unwrap();

    h.checkout.abandon();
    let err = h.workflow.await_payment().await.unwrap_err();
    assert!(matches!(err, BookingError::PaymentFailed { .. }));
    assert_eq!(h.workflow.state(), WorkflowState::OtpVerified);
}

#[tokio::test(start_paused = true)]
async fn test_silent_checkout_times_out() {
    let settings = WorkflowSettings {
        payment_timeout: Some(Duration::from_secs(900)),
        ..WorkflowSettings::default()
    };
    let mut h = Harness::with_settings(settings).verified().await;
    h.workflow.submit_payment().await.unwrap();

    let started = tokio::time::Instant::now();
    let err = h.workflow.await_payment().await.unwrap_err();
    assert_eq!(
        err,
        BookingError::PaymentFailed {
            reason: "Payment was not completed in time".to_string()
        }
    );
    assert!(started.elapsed() >= Duration::from_secs(900));
    assert_eq!(h.workflow.state(), WorkflowState::OtpVerified);
}

#[tokio::test]
async fn test_poll_payment_is_non_blocking() {
    let mut h = Harness::new().verified().await;
    h.workflow.submit_payment().await.unwrap();

    assert!(h.workflow.poll_payment().is_none());
    h.checkout.pay("pay_7");

    let confirmation = h.workflow.poll_payment().unwrap().unwrap();
    assert_eq!(confirmation.payment_id, "pay_7");
    assert_eq!(h.workflow.state(), WorkflowState::Confirmed);
}

#[tokio::test(start_paused = true)]
async fn test_resend_is_blocked_during_cooldown() {
    let mut h = Harness::new();
    h.workflow.edit(DraftField::Phone, PHONE).unwrap();
    h.workflow.request_code().await.unwrap();
    assert_eq!(h.workflow.resend_cooldown_seconds(), 60);

    tokio::time::sleep(Duration::from_millis(30_500)).await;
    let err = h.workflow.request_code().await.unwrap_err();
    assert_eq!(err, BookingError::CooldownActive { remaining_secs: 30 });
    assert_eq!(h.workflow.resend_cooldown_seconds(), 30);
    assert_eq!(h.workflow.state(), WorkflowState::OtpPending);
    assert_eq!(h.otp.sent_count(), 1);

    tokio::time::sleep(Duration::from_secs(31)).await;
    h.workflow.request_code().await.unwrap();
    assert_eq!(h.otp.sent_count(), 2);
    assert_eq!(h.workflow.resend_cooldown_seconds(), 60);
}

#[tokio::test]
async fn test_wrong_code_keeps_otp_pending() {
    let mut h = Harness::new();
    h.workflow.edit(DraftField::Phone, PHONE).unwrap();
    h.workflow.request_code().await.unwrap();

    h.otp.queue_verify(Ok(OtpReply::rejected("Code expired")));
    let err = h.workflow.verify_code("9999").await.unwrap_err();
    assert_eq!(
        err,
        BookingError::InvalidCode {
            message: "Code expired".to_string()
        }
    );
    assert_eq!(h.workflow.state(), WorkflowState::OtpPending);

    h.otp
        .queue_verify(Err(GatewayError::Transport("connection reset".to_string())));
    let err = h.workflow.verify_code("1234").await.unwrap_err();
    assert!(matches!(err, BookingError::VerificationUnavailable { .. }));
    assert_eq!(h.workflow.state(), WorkflowState::OtpPending);

    h.workflow.verify_code(" 1234 ").await.unwrap();
    assert_eq!(h.otp.verified.lock().unwrap().last().unwrap().1, "1234");
}

#[tokio::test]
async fn test_short_code_is_rejected_locally() {
    let mut h = Harness::new();
    h.workflow.edit(DraftField::Phone, PHONE).unwrap();
    h.workflow.request_code().await.unwrap();

    let err = h.workflow.verify_code(" 12 ").await.unwrap_err();
    assert_eq!(err, BookingError::CodeTooShort { min_length: 3 });
    assert_eq!(h.otp.verified_count(), 0);
}

#[tokio::test]
async fn test_phone_edit_discards_verification() {
    let mut h = Harness::new().verified().await;

    assert!(h.workflow.edit(DraftField::Phone, "9123456780").unwrap());
    assert_eq!(h.workflow.state(), WorkflowState::Editing);
    assert_eq!(h.workflow.otp_status(), OtpStatus::Unsent);
    assert_eq!(h.workflow.resend_cooldown_seconds(), 0);

    let err = h.workflow.submit_payment().await.unwrap_err();
    assert_eq!(err, BookingError::PhoneNotVerified);
}

#[tokio::test]
async fn test_other_edits_keep_verification() {
    let mut h = Harness::new().verified().await;
    h.workflow.edit(DraftField::Time, "14:00").unwrap();
    h.workflow.select_service(ServiceKind::Repair).unwrap();
    assert_eq!(h.workflow.state(), WorkflowState::OtpVerified);
}

#[tokio::test]
async fn test_form_is_locked_while_awaiting_payment() {
    let mut h = Harness::new().verified().await;
    h.workflow.submit_payment().await.unwrap();

    let err = h.workflow.edit(DraftField::CustomerName, "Someone Else").unwrap_err();
    assert!(matches!(err, BookingError::InvalidState { .. }));
    assert!(h.workflow.submit_payment().await.is_err());
    assert_eq!(h.orders.request_count(), 1);
    assert_eq!(h.workflow.state(), WorkflowState::AwaitingPayment);
}

#[tokio::test]
async fn test_reset_from_every_reachable_state() {
    // Editing with data
    let mut h = Harness::new();
    h.fill_form();
    h.workflow.reset();
    assert_eq!(h.workflow.draft(), &BookingDraft::default());
    assert_eq!(h.workflow.otp_status(), OtpStatus::Unsent);

    // OtpPending
    let mut h = Harness::new();
    h.fill_form();
    h.workflow.request_code().await.unwrap();
    h.workflow.reset();
    assert_eq!(h.workflow.state(), WorkflowState::Editing);
    assert_eq!(h.workflow.otp_status(), OtpStatus::Unsent);
    assert_eq!(h.workflow.resend_cooldown_seconds(), 0);

    // OtpVerified
    let mut h = Harness::new().verified().await;
    h.workflow.reset();
    assert_eq!(h.workflow.draft(), &BookingDraft::default());
    assert_eq!(h.workflow.otp_status(), OtpStatus::Unsent);

    // Confirmed
    let mut h = Harness::new().verified().await;
    h.workflow.submit_payment().await.unwrap();
    h.checkout.pay("pay_1");
    h.workflow.await_payment().await.unwrap();
    h.workflow.reset();
    assert_eq!(h.workflow.state(), WorkflowState::Editing);
    assert!(h.workflow.confirmation().is_none());
}

#[tokio::test]
async fn test_reset_detaches_open_checkout() {
    let mut h = Harness::new().verified().await;
    h.workflow.submit_payment().await.unwrap();
    let mut events = h.workflow.subscribe();

    h.workflow.reset();
    assert_eq!(h.workflow.state(), WorkflowState::Editing);
    assert_eq!(h.workflow.draft(), &BookingDraft::default());
    assert_eq!(h.workflow.otp_status(), OtpStatus::Unsent);
    assert!(h.checkout.listener_gone());

    // A late success is ignored.
    h.checkout.pay("pay_late");
    assert!(h.workflow.poll_payment().is_none());
    assert!(h.workflow.confirmation().is_none());
    assert_eq!(
        drain(&mut events),
        vec![
            changed(WorkflowState::AwaitingPayment, WorkflowState::Editing),
            WorkflowEvent::Reset,
        ]
    );
}

#[tokio::test]
async fn test_dismiss_confirmation_starts_over() {
    let mut h = Harness::new().verified().await;
    h.workflow.submit_payment().await.unwrap();
    h.checkout.pay("pay_1");
    h.workflow.await_payment().await.unwrap();

    let confirmation = h.workflow.dismiss_confirmation().unwrap();
    assert_eq!(confirmation.order_id, "order_1");
    assert_eq!(h.workflow.state(), WorkflowState::Editing);
    assert_eq!(h.workflow.draft(), &BookingDraft::default());
}
