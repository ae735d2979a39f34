//! HTTP routes module
//!
//! This module contains all HTTP route configurations.

pub mod callback;
pub mod checkout;
pub mod health;

pub use callback::CallbackRoutes;
pub use checkout::CheckoutRoutes;
pub use health::HealthRoutes;
