//! HTTP models - Infrastructure concerns
//!
//! This module contains request/response shapes and the per-request context
//! used for logging.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::CheckoutOutcome;
use crate::domain::order::OrderStatus;

/// Checkout submission posted by the storefront
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckoutRequest {
    #[validate(length(min = 1, max = 64))]
    pub order_id: String,

    /// Reference to the customer's active cart
    #[validate(length(min = 1, max = 128))]
    pub customer_ref: String,
}

/// Checkout result returned to the storefront. The payment link is included
/// so the confirmation page can show it again.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    pub result: String,
    pub redirect: String,
    pub payment_link: String,
}

impl From<CheckoutOutcome> for CheckoutResponse {
    fn from(outcome: CheckoutOutcome) -> Self {
        Self {
            result: "success".to_string(),
            redirect: outcome.redirect_url,
            payment_link: outcome.payment_link,
        }
    }
}

/// Callback handling result returned to the processor
#[derive(Debug, Clone, Serialize)]
pub struct CallbackResponse {
    /// "applied" for a fresh transition, "ignored" for a duplicate
    pub outcome: String,
    pub order_status: OrderStatus,
}

/// Display information for the gateway, mirroring the admin-set title and
/// description. `configured` tells the storefront whether the payment
/// option can be offered at all.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayInfo {
    pub title: String,
    pub description: String,
    pub configured: bool,
}

/// Error body returned for failed requests
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// HTTP request context for tracking and logging
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique request ID
    pub request_id: String,

    /// Client IP address
    pub client_ip: String,

    /// Request timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl RequestContext {
    pub fn new(client_ip: String) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            client_ip,
            timestamp: chrono::Utc::now(),
        }
    }
}
