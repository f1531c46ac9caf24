//! Back-office domain module.
//!
//! Plain entities managed through [`Repository`](crate::repository::Repository)
//! by the admin screens.
//!
//! # Module Structure
//!
//! - `service_offering`: services shown on the public site
//! - `package`: priced maintenance packages
//! - `customer`: customer records and their lifecycle status
//! - `booking_record`: bookings as seen by staff, with status transitions
//! - `content`: editable copy of the public site

mod booking_record;
mod content;
mod customer;
mod package;
mod service_offering;

pub use booking_record::{BookingRecord, BookingStatus, ContactCard};
pub use content::{ContentItem, CtaBlock, HeroBlock, SiteContent, Testimonial};
pub use customer::{Customer, CustomerStatus};
pub use package::{Package, parse_features};
pub use service_offering::ServiceOffering;

/// Generates an identifier for a newly created back-office record.
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
