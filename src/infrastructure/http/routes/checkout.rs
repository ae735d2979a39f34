//! Checkout routes

use std::sync::Arc;
use warp::Filter;

use crate::application::services::CheckoutService;
use crate::config::AppConfig;
use crate::infrastructure::http::handlers::handle_checkout;
use crate::infrastructure::http::utils::{client_ip, with_checkout_service};

pub struct CheckoutRoutes;

impl CheckoutRoutes {
    pub fn create_routes(
        config: AppConfig,
        service: Arc<CheckoutService>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path("checkout")
            .and(warp::path("pay"))
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::content_length_limit(config.server.max_request_size as u64))
            .and(warp::body::json())
            .and(client_ip())
            .and(with_checkout_service(service))
            .and_then(handle_checkout)
    }
}
