//! Hosted checkout domain module.
//!
//! # Module Structure
//!
//! - `model`: options handed to the hosted checkout and the outcomes it reports
//! - `callbacks`: one-shot completion callbacks (`CheckoutCallbacks`) and the
//!   receiving side held by the workflow (`PendingCheckout`)
//! - `adapter`: the `CheckoutAdapter` port wrapping a third-party checkout library

mod adapter;
mod callbacks;
mod model;

pub use adapter::CheckoutAdapter;
pub use callbacks::{CheckoutCallbacks, PendingCheckout};
pub use model::{
    CheckoutFailure, CheckoutOptions, CheckoutOutcome, CheckoutTheme, PaymentSuccess, Prefill,
};
