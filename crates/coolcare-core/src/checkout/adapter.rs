//! Checkout adapter port.

use super::callbacks::CheckoutCallbacks;
use super::model::CheckoutOptions;
use crate::error::BookingError;
use async_trait::async_trait;

/// Boundary to a third-party hosted payment UI.
///
/// # Implementation Notes
///
/// - `ensure_loaded` is idempotent: once the checkout library is present it
///   returns immediately, and concurrent callers share a single in-flight
///   load.
/// - `open` must eventually consume `callbacks` exactly once, through
///   `on_success` or `on_failure`. Dropping them unfired is reported to the
///   workflow as abandonment.
#[async_trait]
pub trait CheckoutAdapter: Send + Sync {
    /// Makes sure the checkout library is available.
    ///
    /// Fails with `BookingError::ScriptLoadFailed` when it cannot be loaded.
    async fn ensure_loaded(&self) -> Result<(), BookingError>;

    /// Presents the hosted checkout for `options`.
    fn open(&self, options: CheckoutOptions, callbacks: CheckoutCallbacks);
}
