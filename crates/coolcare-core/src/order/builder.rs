//! Order request assembly.

use super::model::{Money, OrderRequest};
use crate::booking::BookingDraft;
use crate::error::BookingError;
use crate::otp::OtpStatus;

/// Builds advance-payment order requests for a fixed advance amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequestBuilder {
    advance: Money,
}

impl OrderRequestBuilder {
    pub fn new(advance: Money) -> Self {
        Self { advance }
    }

    pub fn advance(&self) -> &Money {
        &self.advance
    }

    /// Snapshots `draft` into an [`OrderRequest`].
    ///
    /// # Errors
    ///
    /// - `PhoneNotVerified` unless `otp_status` is `Verified`; checked first.
    /// - `IncompleteForm` when name, email, date or time is empty. The email
    ///   is only required to be non-empty.
    pub fn build(
        &self,
        draft: &BookingDraft,
        otp_status: OtpStatus,
    ) -> Result<OrderRequest, BookingError> {
        if otp_status != OtpStatus::Verified {
            return Err(BookingError::PhoneNotVerified);
        }

        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(BookingError::IncompleteForm {
                missing: missing.iter().map(ToString::to_string).collect(),
            });
        }

        Ok(OrderRequest::new(self.advance.clone(), draft.clone()))
    }
}
