//! EMIS frame-token client
//!
//! Calls the processor's token-issuance endpoint and extracts the one-time
//! session token from the response.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::ports::FrameTokenIssuer;
use crate::shared::error::{AppError, AppResult};

/// Request timeout for the token call. The processor can be slow under
/// load.
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Maximum redirects followed on the token call
const MAX_REDIRECTS: usize = 5;

/// Join the configured API base URL with the fixed token path, normalizing
/// a trailing slash so neither a double nor a missing separator is produced.
pub fn join_frame_token_url(base_url: &str) -> String {
    format!("{}/frameToken", base_url.trim_end_matches('/'))
}

/// HTTP client for the processor's `frameToken` endpoint
pub struct EmisTokenClient {
    config: Arc<AppConfig>,
    client: reqwest::Client,
}

impl EmisTokenClient {
    pub fn new(config: Arc<AppConfig>) -> AppResult<Self> {
        // Certificate verification is disabled: the processor endpoint is
        // trusted as configured, without pinning. Known risk.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl FrameTokenIssuer for EmisTokenClient {
    async fn request_frame_token(&self, order_id: &str, amount: i64) -> AppResult<String> {
        let url = join_frame_token_url(&self.config.gateway.api_url);

        let payload = json!({
            "reference": order_id,
            "amount": amount,
            "token": self.config.gateway.frame_token,
            "mobile": "PAYMENT",
            "card": "DISABLED",
            "callbackUrl": self.config.gateway.callback_url(),
        });

        info!(
            order_id = %order_id,
            amount = %amount,
            "Requesting frame token from processor"
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::TokenRequest(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::TokenRequest(format!(
                "processor answered HTTP {}",
                response.status()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::TokenRequest(format!("invalid JSON response: {}", e)))?;

        body.get("id")
            .and_then(|v| v.as_str())
            .filter(|token| !token.is_empty())
            .map(|token| token.to_string())
            .ok_or_else(|| AppError::TokenRequest("response carries no token id".to_string()))
    }
}
