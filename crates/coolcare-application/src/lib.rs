//! Application layer for coolcare.
//!
//! Coordinates the domain types with their collaborators: the booking
//! workflow controller and the back-office CRUD screens.

pub mod admin;
pub mod booking_workflow;

pub use booking_workflow::{BookingWorkflow, WorkflowEvent, WorkflowSettings, WorkflowState};
