//! Application services
//!
//! Services orchestrating the checkout-time payment flow and the
//! asynchronous callback reconciliation.

pub mod callback_service;
pub mod checkout_service;

pub use callback_service::{CallbackOutcome, CallbackService};
pub use checkout_service::{CheckoutOutcome, CheckoutService};
