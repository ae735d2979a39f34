//! Application layer - Use cases and application services
//!
//! This module contains the services that orchestrate domain logic for the
//! gateway's two operations: checkout submission and callback handling.

pub mod services;

pub use services::*;
