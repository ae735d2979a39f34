//! Configuration validation module
//!
//! This module provides additional validation logic for configuration
//! beyond the basic validator crate validation.

use crate::config::AppConfig;
use crate::shared::error::AppError;

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> crate::Result<()> {
        // Endpoint URLs are optional until the gateway is configured by the
        // administrator, but when present they must be well-formed.
        Self::validate_url_if_set("gateway.api_url", &config.gateway.api_url)?;
        Self::validate_url_if_set("gateway.iframe_page_url", &config.gateway.iframe_page_url)?;
        Self::validate_url_if_set("gateway.public_base_url", &config.gateway.public_base_url)?;

        Self::validate_callback_ip(&config.gateway.callback_remote_ip)?;

        if config.gateway.is_checkout_ready() && config.gateway.public_base_url.is_empty() {
            return Err(AppError::Validation(
                "gateway.public_base_url must be set when the gateway is configured; \
                 the processor needs a callback URL"
                    .to_string(),
            ));
        }

        Ok(())
    }

    fn validate_url_if_set(name: &str, url: &str) -> crate::Result<()> {
        if url.is_empty() {
            return Ok(());
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::Validation(format!(
                "{} must start with http:// or https://",
                name
            )));
        }
        Ok(())
    }

    fn validate_callback_ip(ip: &str) -> crate::Result<()> {
        if ip.is_empty() {
            // Legal, but every callback will be rejected until it is set.
            tracing::warn!(
                "gateway.callback_remote_ip is not configured; all processor callbacks will be denied"
            );
            return Ok(());
        }
        ip.parse::<std::net::IpAddr>()
            .map(|_| ())
            .map_err(|_| AppError::Validation(format!("gateway.callback_remote_ip is not a valid IP address: {}", ip)))
    }
}
