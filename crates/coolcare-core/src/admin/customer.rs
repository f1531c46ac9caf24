use crate::repository::{Entity, Searchable, contains_ignore_case};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CustomerStatus {
    #[default]
    Active,
    Lead,
    Blocked,
}

impl CustomerStatus {
    /// Status after one click on the status toggle: active -> blocked -> lead -> active.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Blocked,
            Self::Blocked => Self::Lead,
            Self::Lead => Self::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub total_bookings: u32,
    pub status: CustomerStatus,
    pub created_at: NaiveDate,
}

impl Entity for Customer {
    const ENTITY_TYPE: &'static str = "customer";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Customer {
    fn matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.name, query)
            || self.phone.contains(query)
            || contains_ignore_case(&self.email, query)
    }
}
