//! Booking domain module.
//!
//! # Module Structure
//!
//! - `model`: the customer-facing booking form (`BookingDraft`, `ServiceKind`)
//! - `phone`: contact number validation
//!
//! # Usage
//!
//! ```ignore
//! use coolcare_core::booking::{BookingDraft, DraftField, ServiceKind, is_valid_phone};
//! ```

mod model;
mod phone;

pub use model::{BookingDraft, DraftField, ServiceKind};
pub use phone::is_valid_phone;
