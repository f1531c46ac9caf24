//! Form bindings for the back-office entities.

use chrono::Local;
use coolcare_core::admin::{
    BookingRecord, BookingStatus, ContactCard, Customer, CustomerStatus, Package,
    ServiceOffering, new_record_id, parse_features,
};
use coolcare_core::error::{CoolcareError, Result};

/// The editable text of one entity, as held by an open modal.
pub trait EntityForm<T>: Default + Clone + Send + Sync {
    /// Pre-fills the form from a stored entity.
    fn from_entity(entity: &T) -> Self;

    /// Checks the required fields.
    fn validate(&self) -> Result<()>;

    /// Produces the entity to store.
    ///
    /// `existing` is the stored entity when editing; fields the form does
    /// not cover are carried over from it. When creating, those fields get
    /// their initial values and a fresh ID.
    fn build(&self, existing: Option<&T>) -> T;
}

/// Fails with the labels of every blank field.
fn require(fields: &[(&str, &str)]) -> Result<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoolcareError::validation(format!(
            "Required: {}",
            missing.join(", ")
        )))
    }
}

fn id_for<T>(existing: Option<&T>, id: impl Fn(&T) -> &str) -> String {
    existing.map(|e| id(e).to_string()).unwrap_or_else(new_record_id)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceForm {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

impl EntityForm<ServiceOffering> for ServiceForm {
    fn from_entity(entity: &ServiceOffering) -> Self {
        Self {
            title: entity.title.clone(),
            description: entity.description.clone(),
            image_url: entity.image_url.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        require(&[("title", self.title.as_str())])
    }

    fn build(&self, existing: Option<&ServiceOffering>) -> ServiceOffering {
        ServiceOffering {
            id: id_for(existing, |s| s.id.as_str()),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageForm {
    pub name: String,
    pub price: String,
    /// Comma separated feature list.
    pub features: String,
    pub badge: String,
    pub details: String,
}

impl EntityForm<Package> for PackageForm {
    fn from_entity(entity: &Package) -> Self {
        Self {
            name: entity.name.clone(),
            price: entity.price.clone(),
            features: entity.features.join(", "),
            badge: entity.badge.clone(),
            details: entity.details.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        require(&[("name", self.name.as_str()), ("price", self.price.as_str())])
    }

    fn build(&self, existing: Option<&Package>) -> Package {
        Package {
            id: id_for(existing, |p| p.id.as_str()),
            name: self.name.trim().to_string(),
            price: self.price.trim().to_string(),
            features: parse_features(&self.features),
            badge: self.badge.trim().to_string(),
            details: self.details.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl EntityForm<Customer> for CustomerForm {
    fn from_entity(entity: &Customer) -> Self {
        Self {
            name: entity.name.clone(),
            phone: entity.phone.clone(),
            email: entity.email.clone(),
            address: entity.address.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        require(&[
            ("name", self.name.as_str()),
            ("phone", self.phone.as_str()),
            ("address", self.address.as_str()),
        ])
    }

    fn build(&self, existing: Option<&Customer>) -> Customer {
        Customer {
            id: id_for(existing, |c| c.id.as_str()),
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address.trim().to_string(),
            total_bookings: existing.map_or(0, |c| c.total_bookings),
            status: existing.map_or(CustomerStatus::Active, |c| c.status),
            created_at: existing.map_or_else(|| Local::now().date_naive(), |c| c.created_at),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub customer_name: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub time: String,
}

impl EntityForm<BookingRecord> for BookingForm {
    fn from_entity(entity: &BookingRecord) -> Self {
        Self {
            customer_name: entity.customer.name.clone(),
            phone: entity.customer.phone.clone(),
            service: entity.service.clone(),
            date: entity.date.clone(),
            time: entity.time.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        require(&[
            ("customer name", self.customer_name.as_str()),
            ("service", self.service.as_str()),
            ("date", self.date.as_str()),
        ])
    }

    fn build(&self, existing: Option<&BookingRecord>) -> BookingRecord {
        BookingRecord {
            id: id_for(existing, |b| b.id.as_str()),
            customer: ContactCard {
                name: self.customer_name.trim().to_string(),
                phone: self.phone.trim().to_string(),
            },
            service: self.service.trim().to_string(),
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
            status: existing.map_or(BookingStatus::Pending, |b| b.status),
            advance_paid: existing.is_some_and(|b| b.advance_paid),
            amount_paid: existing.map_or(0, |b| b.amount_paid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_lists_blank_fields() {
        let form = CustomerForm {
            name: "Rahul".to_string(),
            phone: "  ".to_string(),
            ..Default::default()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Required: phone, address");
    }

    #[test]
    fn test_package_features_round_trip_through_text() {
        let package = Package {
            id: "1".to_string(),
            name: "Full Service".to_string(),
            price: "₹999".to_string(),
            features: vec!["Deep cleaning".to_string(), "Gas check".to_string()],
            badge: "Best Value".to_string(),
            details: String::new(),
        };
        let mut form = PackageForm::from_entity(&package);
        assert_eq!(form.features, "Deep cleaning, Gas check");

        form.features.push_str(", Coil clean ,");
        let rebuilt = form.build(Some(&package));
        assert_eq!(rebuilt.id, "1");
        assert_eq!(rebuilt.features, vec!["Deep cleaning", "Gas check", "Coil clean"]);
    }

    #[test]
    fn test_edit_keeps_fields_outside_the_form() {
        let existing = BookingRecord {
            id: "2".to_string(),
            customer: ContactCard {
                name: "Priya Sharma".to_string(),
                phone: "9123456780".to_string(),
            },
            service: "AC Repair".to_string(),
            date: "2025-10-29".to_string(),
            time: "14:00".to_string(),
            status: BookingStatus::Confirmed,
            advance_paid: true,
            amount_paid: 500,
        };
        let mut form = BookingForm::from_entity(&existing);
        form.time = "16:00".to_string();

        let updated = form.build(Some(&existing));
        assert_eq!(updated.time, "16:00");
        assert_eq!(updated.status, BookingStatus::Confirmed);
        assert_eq!(updated.amount_paid, 500);
        assert!(updated.advance_paid);
    }

    #[test]
    fn test_create_starts_with_initial_values() {
        let form = BookingForm {
            customer_name: "Ankit".to_string(),
            service: "AC Cleaning".to_string(),
            date: "2025-11-02".to_string(),
            ..Default::default()
        };
        let created = form.build(None);
        assert!(!created.id.is_empty());
        assert_eq!(created.status, BookingStatus::Pending);
        assert!(!created.advance_paid);
    }
}
