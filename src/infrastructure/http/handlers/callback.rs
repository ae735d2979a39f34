//! Processor callback HTTP handler
//!
//! The body is read raw and parsed here so a malformed payload gets an
//! explicit 400 instead of a framework rejection, and so the notification
//! reaches the service exactly as the processor sent it.

use std::sync::Arc;

use bytes::Bytes;
use warp::Reply;

use crate::application::services::{CallbackOutcome, CallbackService};
use crate::domain::session::CallbackNotification;
use crate::infrastructure::http::models::{CallbackResponse, ErrorResponse};

pub async fn handle_callback(
    body: Bytes,
    client_ip: String,
    service: Arc<CallbackService>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let notification: CallbackNotification = match serde_json::from_slice(&body) {
        Ok(notification) => notification,
        Err(e) => {
            return Ok(warp::reply::with_status(
                warp::reply::json(&ErrorResponse {
                    error: format!("invalid callback body: {}", e),
                }),
                warp::http::StatusCode::BAD_REQUEST,
            ));
        }
    };

    match service.handle(&notification, &client_ip).await {
        Ok(CallbackOutcome::Applied(status)) => Ok(warp::reply::with_status(
            warp::reply::json(&CallbackResponse {
                outcome: "applied".to_string(),
                order_status: status,
            }),
            warp::http::StatusCode::OK,
        )),
        Ok(CallbackOutcome::Ignored(status)) => Ok(warp::reply::with_status(
            warp::reply::json(&CallbackResponse {
                outcome: "ignored".to_string(),
                order_status: status,
            }),
            warp::http::StatusCode::OK,
        )),
        Err(e) => Ok(warp::reply::with_status(
            warp::reply::json(&ErrorResponse { error: e.to_string() }),
            e.http_status_code(),
        )),
    }
}
