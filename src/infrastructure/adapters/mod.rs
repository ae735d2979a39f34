//! Infrastructure adapters module
//!
//! This module contains adapters for the processor endpoint and the
//! in-process collaborator implementations.

pub mod cart;
pub mod notifier;
pub mod order_store;
pub mod token_client;

pub use cart::InMemoryCartGateway;
pub use notifier::{AdminAlert, LoggingNotifier, RecordingNotifier};
pub use order_store::InMemoryOrderStore;
pub use token_client::{join_frame_token_url, EmisTokenClient};
