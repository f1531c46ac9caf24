//! Phone verification domain module.
//!
//! # Module Structure
//!
//! - `model`: verification status and policy (`OtpStatus`, `OtpPolicy`)
//! - `gateway`: port to the external OTP dispatch/verification service
//! - `cooldown`: the resend countdown ticker
//! - `session`: the `Unsent -> Sent -> Verified` state machine (`OtpSession`)

mod cooldown;
mod gateway;
mod model;
mod session;

pub use cooldown::ResendCooldown;
pub use gateway::{OtpGateway, OtpReply};
pub use model::{OtpPolicy, OtpStatus};
pub use session::OtpSession;
