//! External collaborators of the booking workflow.
//!
//! HTTP clients for the booking backend and the admin API, plus the hosted
//! checkout adapter.

mod http;

pub mod hosted_checkout;
pub mod http_order_gateway;
pub mod http_otp_gateway;
pub mod http_service_catalog;
pub mod script_source;

#[cfg(test)]
mod test_server;

pub use hosted_checkout::{CheckoutPresenter, HostedCheckout};
pub use http_order_gateway::HttpOrderGateway;
pub use http_otp_gateway::HttpOtpGateway;
pub use http_service_catalog::HttpServiceCatalog;
pub use script_source::{HttpScriptSource, LoadedScript, ScriptSource};
