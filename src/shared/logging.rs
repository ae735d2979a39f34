//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use tracing::{info, warn};

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified configuration
    pub fn initialize(level: &str, _format: &str, _structured: bool) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| crate::shared::error::AppError::Internal(format!("Failed to initialize logging: {}", e)))?;

        Ok(())
    }

    /// Log an incoming processor callback before authentication, so rejected
    /// callbacks still leave an audit line.
    pub fn log_callback_received(order_id: &str, status: &str, source_ip: &str) {
        info!(
            order_id = %order_id,
            status = %status,
            source_ip = %source_ip,
            "Processor callback received"
        );
    }

    /// Log an applied order transition
    pub fn log_order_transition(order_id: &str, from: &str, to: &str, source_ip: &str) {
        info!(
            order_id = %order_id,
            from = %from,
            to = %to,
            source_ip = %source_ip,
            "Order status transition applied"
        );
    }

    /// Log a rejected callback
    pub fn log_callback_rejected(order_id: &str, received_ip: &str, allowed_ip: &str) {
        warn!(
            order_id = %order_id,
            received_ip = %received_ip,
            allowed_ip = %allowed_ip,
            "Callback rejected: source IP does not match the configured allow-list"
        );
    }
}
