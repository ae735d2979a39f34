//! Checkout HTTP handler

use std::sync::Arc;

use tracing::{error, info};
use validator::Validate;
use warp::Reply;

use crate::application::services::CheckoutService;
use crate::infrastructure::http::models::{CheckoutRequest, CheckoutResponse, ErrorResponse, RequestContext};

pub async fn handle_checkout(
    body: CheckoutRequest,
    client_ip: String,
    service: Arc<CheckoutService>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let context = RequestContext::new(client_ip);

    if let Err(e) = body.validate() {
        return Ok(warp::reply::with_status(
            warp::reply::json(&ErrorResponse {
                error: format!("invalid checkout request: {}", e),
            }),
            warp::http::StatusCode::BAD_REQUEST,
        ));
    }

    info!(
        request_id = %context.request_id,
        order_id = %body.order_id,
        client_ip = %context.client_ip,
        "Processing checkout submission"
    );

    match service.process_payment(&body.order_id, &body.customer_ref).await {
        Ok(outcome) => Ok(warp::reply::with_status(
            warp::reply::json(&CheckoutResponse::from(outcome)),
            warp::http::StatusCode::OK,
        )),
        Err(e) => {
            error!(
                request_id = %context.request_id,
                order_id = %body.order_id,
                error = %e,
                "Checkout submission failed"
            );
            Ok(warp::reply::with_status(
                warp::reply::json(&ErrorResponse { error: e.to_string() }),
                e.http_status_code(),
            ))
        }
    }
}
