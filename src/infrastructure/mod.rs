//! Infrastructure layer - External concerns and adapters
//!
//! This module contains infrastructure concerns including the processor
//! client, collaborator adapters and HTTP handling.

pub mod adapters;
pub mod http;

pub use adapters::{EmisTokenClient, InMemoryCartGateway, InMemoryOrderStore, LoggingNotifier};
pub use http::GatewayServer;
