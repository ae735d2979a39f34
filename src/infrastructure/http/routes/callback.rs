//! Processor callback routes
//!
//! The webhook lives at the fixed path the processor was given as
//! `callbackUrl` (see `config::CALLBACK_PATH`).

use std::sync::Arc;
use warp::Filter;

use crate::application::services::CallbackService;
use crate::config::AppConfig;
use crate::infrastructure::http::handlers::handle_callback;
use crate::infrastructure::http::utils::{client_ip, with_callback_service};

pub struct CallbackRoutes;

impl CallbackRoutes {
    pub fn create_routes(
        config: AppConfig,
        service: Arc<CallbackService>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path("wc-api")
            .and(warp::path("emis-iframe"))
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::content_length_limit(config.server.max_request_size as u64))
            .and(warp::body::bytes())
            .and(client_ip())
            .and(with_callback_service(service))
            .and_then(handle_callback)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::CALLBACK_PATH;

    #[test]
    fn test_route_matches_the_advertised_callback_path() {
        assert_eq!(CALLBACK_PATH, "wc-api/emis-iframe");
    }
}
