//! Gateway server
//!
//! Wires the configuration, collaborator adapters and services together and
//! serves the HTTP surface.

use std::sync::Arc;

use tracing::{info, instrument};
use warp::{Filter, Reply};

use crate::application::services::{CallbackService, CheckoutService};
use crate::config::{AppConfig, ConfigValidator};
use crate::infrastructure::adapters::{
    EmisTokenClient, InMemoryCartGateway, InMemoryOrderStore, LoggingNotifier,
};
use crate::infrastructure::http::routes::{CallbackRoutes, CheckoutRoutes, HealthRoutes};
use crate::shared::error::{AppError, AppResult};

/// Main server implementation
pub struct GatewayServer {
    config: AppConfig,
    checkout: Arc<CheckoutService>,
    callback: Arc<CallbackService>,
}

impl GatewayServer {
    /// Create a new server instance with the in-process collaborator
    /// adapters.
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        ConfigValidator::validate_config(&config)?;

        let config_arc = Arc::new(config.clone());

        let orders = Arc::new(InMemoryOrderStore::default());
        let cart = Arc::new(InMemoryCartGateway::default());
        let token_client = Arc::new(EmisTokenClient::new(config_arc.clone())?);
        let notifier = Arc::new(LoggingNotifier::new(config_arc.gateway.admin_email.clone()));

        let checkout = Arc::new(CheckoutService::new(
            config_arc.clone(),
            orders.clone(),
            cart,
            token_client,
        ));
        let callback = Arc::new(CallbackService::new(config_arc, orders, notifier));

        Ok(Self {
            config,
            checkout,
            callback,
        })
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the server
    #[instrument(skip(self))]
    pub async fn run(self) -> AppResult<()> {
        let addr = self.config.server_address();
        info!("Starting server on {}", addr);

        let addr: std::net::SocketAddr = addr
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;

        let routes = self.create_routes();

        warp::serve(routes).run(addr).await;

        Ok(())
    }

    /// Create the application routes
    fn create_routes(self) -> impl Filter<Extract = impl Reply> + Clone {
        CheckoutRoutes::create_routes(self.config.clone(), self.checkout)
            .or(CallbackRoutes::create_routes(self.config.clone(), self.callback))
            .or(HealthRoutes::create_routes(self.config))
    }
}
