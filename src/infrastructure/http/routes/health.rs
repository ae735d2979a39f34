//! Health and gateway-description routes

use warp::Filter;

use crate::config::AppConfig;
use crate::infrastructure::http::handlers::{handle_gateway_info, handle_health_request};
use crate::infrastructure::http::utils::with_config;

pub struct HealthRoutes;

impl HealthRoutes {
    pub fn create_routes(
        config: AppConfig,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let health = warp::path("health")
            .and(warp::path::end())
            .and(warp::get())
            .and_then(handle_health_request);

        let gateway = warp::path("gateway")
            .and(warp::path::end())
            .and(warp::get())
            .and(with_config(config))
            .and_then(handle_gateway_info);

        health.or(gateway)
    }
}
