//! Health and gateway-description handlers

use warp::Reply;

use crate::config::AppConfig;
use crate::infrastructure::http::models::GatewayInfo;

/// Handle liveness requests
pub async fn handle_health_request() -> Result<impl Reply, warp::reject::Rejection> {
    Ok(warp::reply::json(&serde_json::json!({"status": "healthy"})))
}

/// Handle gateway-description requests. The storefront uses this to decide
/// whether to offer the payment option and what to show next to it.
pub async fn handle_gateway_info(config: AppConfig) -> Result<impl Reply, warp::reject::Rejection> {
    let configured = config.gateway.is_checkout_ready();
    let description = if configured {
        config.gateway.description.clone()
    } else {
        "This payment method is not yet configured.".to_string()
    };

    Ok(warp::reply::json(&GatewayInfo {
        title: config.gateway.title.clone(),
        description,
        configured,
    }))
}
