//! HTTP route handlers module
//!
//! This module contains separate route handlers for different endpoint
//! types, organized by functionality.

pub mod callback;
pub mod checkout;
pub mod health;

pub use callback::handle_callback;
pub use checkout::handle_checkout;
pub use health::{handle_gateway_info, handle_health_request};
