//! HTTP utilities - Common helper functions
//!
//! Client IP extraction and route injection helpers shared by the route
//! builders.

use std::net::SocketAddr;
use std::sync::Arc;

use warp::Filter;

use crate::application::services::{CallbackService, CheckoutService};
use crate::config::AppConfig;

/// Sentinel used when no source address can be determined. It can never
/// match a configured allow-list entry.
pub const UNKNOWN_CLIENT_IP: &str = "unknown";

/// Resolve the client IP for a request. A forwarded header takes precedence
/// when present (reverse-proxy deployments), then the socket peer address.
pub fn resolve_client_ip(forwarded_for: Option<String>, remote: Option<SocketAddr>) -> String {
    if let Some(header) = forwarded_for {
        // First entry is the originating client.
        if let Some(first) = header.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    remote
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT_IP.to_string())
}

/// Filter extracting the client IP from the forwarded header or the socket
/// peer address.
pub fn client_ip() -> impl Filter<Extract = (String,), Error = warp::Rejection> + Clone {
    warp::header::optional::<String>("x-forwarded-for")
        .and(warp::addr::remote())
        .map(resolve_client_ip)
}

/// Helper function to inject the checkout service into a route
pub fn with_checkout_service(
    service: Arc<CheckoutService>,
) -> impl Filter<Extract = (Arc<CheckoutService>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || service.clone())
}

/// Helper function to inject the callback service into a route
pub fn with_callback_service(
    service: Arc<CallbackService>,
) -> impl Filter<Extract = (Arc<CallbackService>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || service.clone())
}

/// Helper function to inject configuration into a route
pub fn with_config(
    config: AppConfig,
) -> impl Filter<Extract = (AppConfig,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || config.clone())
}
