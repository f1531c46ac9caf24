//! Back-office screens.
//!
//! Every list screen is a [`CrudScreen`] over a [`Repository`] plus an
//! [`EntityForm`] binding the modal's text fields to the entity.
//!
//! [`Repository`]: coolcare_core::repository::Repository

mod content_editor;
mod crud_screen;
mod dashboard;
mod forms;

pub use content_editor::{ContentEditor, CtaField, HeroField};
pub use crud_screen::{CrudScreen, ModalState};
pub use dashboard::{DashboardSummary, PAGE_STEP, Paginated};
pub use forms::{BookingForm, CustomerForm, EntityForm, PackageForm, ServiceForm};

pub type ServiceScreen = CrudScreen<coolcare_core::admin::ServiceOffering, ServiceForm>;
pub type PackageScreen = CrudScreen<coolcare_core::admin::Package, PackageForm>;
pub type CustomerScreen = CrudScreen<coolcare_core::admin::Customer, CustomerForm>;
pub type BookingScreen = CrudScreen<coolcare_core::admin::BookingRecord, BookingForm>;
