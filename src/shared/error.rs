//! Error handling module
//!
//! This module provides centralized error handling for the gateway.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Gateway not configured: {0}")]
    ConfigurationMissing(String),

    #[error("Frame token request failed: {0}")]
    TokenRequest(String),

    #[error("Unauthorized callback source: received {received}, allowed {allowed}")]
    UnauthorizedCallback { received: String, allowed: String },

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Invalid order transition: {0}")]
    InvalidTransition(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code for this error
    pub fn http_status_code(&self) -> warp::http::StatusCode {
        match self {
            AppError::ConfigurationMissing(_) => warp::http::StatusCode::SERVICE_UNAVAILABLE,
            AppError::TokenRequest(_) => warp::http::StatusCode::BAD_GATEWAY,
            AppError::UnauthorizedCallback { .. } => warp::http::StatusCode::FORBIDDEN,
            AppError::OrderNotFound(_) => warp::http::StatusCode::NOT_FOUND,
            AppError::InvalidTransition(_) => warp::http::StatusCode::CONFLICT,
            AppError::Validation(_) => warp::http::StatusCode::BAD_REQUEST,
            AppError::Json(_) => warp::http::StatusCode::BAD_REQUEST,
            _ => warp::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

// Implement warp::reject::Reject for AppError
impl warp::reject::Reject for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}
