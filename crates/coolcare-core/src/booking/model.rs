//! Booking form domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The services a customer can book.
///
/// Serialized (and displayed) as the label shown on the booking form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum ServiceKind {
    #[default]
    #[serde(rename = "AC Installation")]
    #[strum(serialize = "AC Installation")]
    Installation,
    #[serde(rename = "AC Repair")]
    #[strum(serialize = "AC Repair")]
    Repair,
    #[serde(rename = "AC Maintenance")]
    #[strum(serialize = "AC Maintenance")]
    Maintenance,
    #[serde(rename = "Gas Refilling")]
    #[strum(serialize = "Gas Refilling")]
    GasRefilling,
    #[serde(rename = "AC Cleaning")]
    #[strum(serialize = "AC Cleaning")]
    Cleaning,
}

/// Editable text fields of a [`BookingDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum DraftField {
    CustomerName,
    Email,
    Phone,
    Date,
    Time,
}

/// The booking form as filled in by the customer.
///
/// Owned by exactly one workflow for the lifetime of a booking attempt and
/// reset to `BookingDraft::default()` after confirmation or cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub service: ServiceKind,
    /// Preferred date as entered (`YYYY-MM-DD`).
    pub date: String,
    /// Preferred time as entered (`HH:MM`).
    pub time: String,
}

impl BookingDraft {
    /// Returns the current value of a text field.
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::CustomerName => &self.customer_name,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
            DraftField::Date => &self.date,
            DraftField::Time => &self.time,
        }
    }

    /// Overwrites a text field, returning whether the value changed.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = match field {
            DraftField::CustomerName => &mut self.customer_name,
            DraftField::Email => &mut self.email,
            DraftField::Phone => &mut self.phone,
            DraftField::Date => &mut self.date,
            DraftField::Time => &mut self.time,
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    /// Fields required before an order can be placed that are still empty.
    ///
    /// The phone number is not listed: it is gated by OTP verification instead.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        [
            DraftField::CustomerName,
            DraftField::Email,
            DraftField::Date,
            DraftField::Time,
        ]
        .into_iter()
        .filter(|field| self.field(*field).is_empty())
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
