//! Application configuration structures
//!
//! This module contains the main configuration structures for the gateway.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use validator::Validate;

/// Fixed webhook path the processor posts its outcome callbacks to.
/// The path identifies this gateway and is appended to the public base URL
/// when building the `callbackUrl` sent along with a token request.
pub const CALLBACK_PATH: &str = "wc-api/emis-iframe";

/// EMIS gateway settings
///
/// These mirror the admin-settable options of the payment method: display
/// title and description, the processor endpoints, the shared frame token
/// and the allow-listed callback source IP. All of them default to empty;
/// an empty `api_url` or `frame_token` leaves the gateway in an explicit
/// "not configured" state that refuses checkouts.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct GatewaySettings {
    /// Title shown to the customer during checkout
    pub title: String,

    /// Description shown to the customer during checkout
    pub description: String,

    /// Token-issuance API base URL provided by EMIS
    pub api_url: String,

    /// Page hosting the payment iframe
    pub iframe_page_url: String,

    /// Shared frame token provided by EMIS (authorization credential)
    pub frame_token: String,

    /// Allow-listed source IP for outcome callbacks; empty denies all
    pub callback_remote_ip: String,

    /// Public base URL of this service, used to build the callback URL
    pub public_base_url: String,

    /// Recipient for callback rejection alerts
    pub admin_email: String,
}

impl GatewaySettings {
    /// Whether the gateway holds everything it needs to start a checkout
    pub fn is_checkout_ready(&self) -> bool {
        !self.api_url.is_empty() && !self.frame_token.is_empty()
    }

    /// Callback URL the processor should post outcome notifications to
    pub fn callback_url(&self) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), CALLBACK_PATH)
    }

    /// Thank-you URL the checkout flow redirects to after a successful submission
    pub fn return_url(&self, order_id: &str) -> String {
        format!(
            "{}/checkout/order-received/{}",
            self.public_base_url.trim_end_matches('/'),
            order_id
        )
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Server address to bind to
    pub bind_address: IpAddr,

    /// Server port
    #[validate(range(min = 1, max = 65535))]
    pub port: u16,

    /// Maximum request size in bytes
    #[validate(range(min = 1024, max = 10485760))] // 1KB to 10MB
    pub max_request_size: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format
    #[validate(length(min = 1))]
    pub format: String,

    /// Enable structured logging
    pub structured: bool,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// EMIS gateway settings
    pub gateway: GatewaySettings,

    /// Server configuration
    pub server: ServerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".parse().unwrap(),
            port: 8080,
            max_request_size: 64 * 1024, // 64KB; bodies here are small JSON
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
            structured: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("Conf").required(false))
            .add_source(config::Environment::with_prefix("EMIS_GATEWAY").separator("__"))
            .build()
            .map_err(|e| crate::shared::error::AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config.try_deserialize()
            .map_err(|e| crate::shared::error::AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config.validate_config()
            .map_err(|e| crate::shared::error::AppError::Validation(format!("Configuration validation failed: {}", e)))?;

        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate_config(&self) -> Result<(), validator::ValidationErrors> {
        self.gateway.validate()?;
        self.server.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}
