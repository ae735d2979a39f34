//! EMIS Iframe Payment Gateway
//!
//! A standalone HTTP service that bridges a storefront checkout flow and the
//! EMIS payment processor: it requests one-time frame tokens, hands the
//! customer an iframe payment link, and reconciles the processor's
//! asynchronous outcome callbacks against order state exactly once.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::AppConfig;
pub use infrastructure::http::GatewayServer;
pub use shared::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
