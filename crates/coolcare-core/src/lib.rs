pub mod admin;
pub mod booking;
pub mod checkout;
pub mod config;
pub mod error;
pub mod order;
pub mod otp;
pub mod repository;

// Re-export common error types
pub use error::{BookingError, CoolcareError, GatewayError};
