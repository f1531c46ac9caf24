use crate::repository::{Entity, Searchable, contains_ignore_case};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Lifecycle of a booking as managed by staff.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Whether staff may move a booking from `self` to `next`.
    ///
    /// Any open booking may be confirmed, started or cancelled; only a
    /// started booking may be completed. Completed and cancelled bookings
    /// are final.
    pub fn can_transition_to(self, next: Self) -> bool {
        if self.is_terminal() {
            return false;
        }
        match next {
            Self::Confirmed | Self::InProgress | Self::Cancelled => true,
            Self::Completed => self == Self::InProgress,
            Self::Pending => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactCard {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: String,
    pub customer: ContactCard,
    pub service: String,
    pub date: String,
    pub time: String,
    pub status: BookingStatus,
    pub advance_paid: bool,
    /// Amount collected so far, in major units.
    pub amount_paid: u64,
}

impl Entity for BookingRecord {
    const ENTITY_TYPE: &'static str = "booking";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for BookingRecord {
    fn matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.customer.name, query)
            || self.customer.phone.contains(query)
            || contains_ignore_case(&self.service, query)
    }
}
