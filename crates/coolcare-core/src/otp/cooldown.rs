//! Resend cooldown ticker.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;

/// A once-per-second countdown that blocks OTP resends while it is non-zero.
///
/// The countdown runs on a background task and is cancelled when the
/// cooldown is re-armed, explicitly cancelled, or dropped, so a discarded
/// session is never touched by a stale ticker.
#[derive(Debug, Default)]
pub struct ResendCooldown {
    remaining: Arc<AtomicU32>,
    cancel: Option<CancellationToken>,
}

impl ResendCooldown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds left before a resend is allowed.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining.load(Ordering::SeqCst)
    }

    pub fn is_active(&self) -> bool {
        self.remaining_secs() > 0
    }

    /// Starts a fresh countdown of `secs` seconds, replacing any running one.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn arm(&mut self, secs: u32) {
        self.cancel();
        if secs == 0 {
            return;
        }

        // Each countdown gets its own counter; a cancelled ticker keeps only
        // the counter it was started with.
        let remaining = Arc::new(AtomicU32::new(secs));
        let token = CancellationToken::new();
        self.remaining = Arc::clone(&remaining);
        self.cancel = Some(token.clone());

        tokio::spawn(async move {
            let period = Duration::from_secs(1);
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
            tracing::debug!(target: "otp", "Resend cooldown armed ({}s)", secs);

            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        tracing::debug!(target: "otp", "Resend cooldown cancelled");
                        break;
                    }
                    _ = ticker.tick() => {
                        let left = remaining.fetch_sub(1, Ordering::SeqCst).saturating_sub(1);
                        if left == 0 {
                            tracing::debug!(target: "otp", "Resend cooldown elapsed");
                            break;
                        }
                    }
                }
            }
        });
    }

    /// Stops the countdown and clears the remaining time.
    pub fn cancel(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
        self.remaining = Arc::new(AtomicU32::new(0));
    }
}

impl Drop for ResendCooldown {
    fn drop(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
    }
}
