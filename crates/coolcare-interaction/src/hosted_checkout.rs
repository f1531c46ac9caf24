//! HostedCheckout - the `CheckoutAdapter` for a third-party hosted payment UI.
//!
//! The library is fetched from a [`ScriptSource`] once; presenting the UI is
//! delegated to a [`CheckoutPresenter`] (a browser bridge, a terminal prompt,
//! a test double).

use crate::script_source::{LoadedScript, ScriptSource};
use async_trait::async_trait;
use coolcare_core::BookingError;
use coolcare_core::checkout::{CheckoutAdapter, CheckoutCallbacks, CheckoutFailure, CheckoutOptions};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;

/// Shows the hosted checkout and eventually fires one of the callbacks.
pub trait CheckoutPresenter: Send + Sync {
    fn present(
        &self,
        script: &LoadedScript,
        options: CheckoutOptions,
        callbacks: CheckoutCallbacks,
    );
}

type LoadResult = Result<LoadedScript, String>;

enum LoadState {
    Idle,
    /// A load is running; followers wait for its result here.
    Loading(watch::Receiver<Option<LoadResult>>),
    Loaded(LoadedScript),
}

enum Role {
    Leader(watch::Sender<Option<LoadResult>>),
    Follower(watch::Receiver<Option<LoadResult>>),
}

pub struct HostedCheckout {
    source: Arc<dyn ScriptSource>,
    presenter: Arc<dyn CheckoutPresenter>,
    state: Mutex<LoadState>,
}

impl HostedCheckout {
    pub fn new(source: Arc<dyn ScriptSource>, presenter: Arc<dyn CheckoutPresenter>) -> Self {
        Self {
            source,
            presenter,
            state: Mutex::new(LoadState::Idle),
        }
    }

    /// Creates an adapter whose library is already present; `ensure_loaded`
    /// never touches `source`.
    pub fn preloaded(
        script: LoadedScript,
        source: Arc<dyn ScriptSource>,
        presenter: Arc<dyn CheckoutPresenter>,
    ) -> Self {
        Self {
            source,
            presenter,
            state: Mutex::new(LoadState::Loaded(script)),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(*self.lock_state(), LoadState::Loaded(_))
    }

    fn loaded_script(&self) -> Option<LoadedScript> {
        match &*self.lock_state() {
            LoadState::Loaded(script) => Some(script.clone()),
            _ => None,
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, LoadState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Decides whether this caller runs the load or waits on a running one.
    fn join_or_start(&self) -> Option<Role> {
        let mut state = self.lock_state();
        match &*state {
            LoadState::Loaded(_) => None,
            // A closed channel means the leader was dropped mid-load.
            LoadState::Loading(rx) if rx.has_changed().is_ok() => Some(Role::Follower(rx.clone())),
            LoadState::Loading(_) | LoadState::Idle => {
                let (tx, rx) = watch::channel(None);
                *state = LoadState::Loading(rx);
                Some(Role::Leader(tx))
            }
        }
    }

    async fn lead_load(&self, tx: watch::Sender<Option<LoadResult>>) -> LoadResult {
        tracing::debug!(target: "checkout", "Loading checkout library");
        let result = self.source.fetch().await.map_err(|e| e.to_string());

        *self.lock_state() = match &result {
            Ok(script) => {
                tracing::info!(target: "checkout", "Checkout library loaded from {}", script.url);
                LoadState::Loaded(script.clone())
            }
            Err(message) => {
                tracing::warn!(target: "checkout", "Checkout library failed to load: {}", message);
                LoadState::Idle
            }
        };
        tx.send_replace(Some(result.clone()));
        result
    }

    async fn follow_load(mut rx: watch::Receiver<Option<LoadResult>>) -> LoadResult {
        let finished = rx.wait_for(Option::is_some).await.map(|value| value.clone());
        match finished {
            Ok(Some(result)) => result,
            Ok(None) => Err("load finished without a result".to_string()),
            Err(_) => Err("load was cancelled".to_string()),
        }
    }
}

#[async_trait]
impl CheckoutAdapter for HostedCheckout {
    async fn ensure_loaded(&self) -> Result<(), BookingError> {
        let result = match self.join_or_start() {
            None => return Ok(()),
            Some(Role::Leader(tx)) => self.lead_load(tx).await,
            Some(Role::Follower(rx)) => Self::follow_load(rx).await,
        };
        result
            .map(|_| ())
            .map_err(|message| BookingError::ScriptLoadFailed { message })
    }

    fn open(&self, options: CheckoutOptions, callbacks: CheckoutCallbacks) {
        match self.loaded_script() {
            Some(script) => {
                tracing::debug!(
                    target: "checkout",
                    "Opening checkout for order {}",
                    options.order_id
                );
                self.presenter.present(&script, options, callbacks);
            }
            None => callbacks.on_failure(CheckoutFailure::new("Checkout library is not loaded")),
        }
    }
}
