//! Checkout service orchestrating the payment-session flow
//!
//! One invocation per checkout submission: compute the amount, obtain the
//! frame token, put the order on hold, record the iframe link and clear the
//! cart. Token acquisition strictly precedes the on-hold transition so a
//! failed or timed-out token call leaves the order untouched.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::checkout::chargeable_amount;
use crate::domain::order::OrderStatus;
use crate::domain::ports::{CartGateway, FrameTokenIssuer, OrderStore};
use crate::domain::session::{iframe_link, PaymentSession};
use crate::shared::error::{AppError, AppResult};

/// Result of a successful checkout submission. The payment link travels in
/// the outcome so the confirmation page can redisplay it; it is not stashed
/// in any ambient session state.
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    pub redirect_url: String,
    pub payment_link: String,
    pub session: PaymentSession,
}

pub struct CheckoutService {
    config: Arc<AppConfig>,
    orders: Arc<dyn OrderStore>,
    cart: Arc<dyn CartGateway>,
    token_issuer: Arc<dyn FrameTokenIssuer>,
}

impl CheckoutService {
    pub fn new(
        config: Arc<AppConfig>,
        orders: Arc<dyn OrderStore>,
        cart: Arc<dyn CartGateway>,
        token_issuer: Arc<dyn FrameTokenIssuer>,
    ) -> Self {
        Self {
            config,
            orders,
            cart,
            token_issuer,
        }
    }

    /// Run the checkout-time payment flow for one order.
    pub async fn process_payment(&self, order_id: &str, customer_ref: &str) -> AppResult<CheckoutOutcome> {
        if !self.config.gateway.is_checkout_ready() {
            return Err(AppError::ConfigurationMissing(
                "api_url and frame_token must be configured before accepting payments".to_string(),
            ));
        }

        let order = self
            .orders
            .get(order_id)
            .await?
            .ok_or_else(|| AppError::OrderNotFound(order_id.to_string()))?;

        if !order.status.can_transition_to(OrderStatus::OnHold) {
            return Err(AppError::InvalidTransition(format!(
                "order {} is {} and cannot enter on-hold",
                order_id, order.status
            )));
        }

        let totals = self.cart.totals(customer_ref).await?;
        let amount = chargeable_amount(&totals);

        let token = self.token_issuer.request_frame_token(order_id, amount).await?;
        if token.is_empty() {
            return Err(AppError::TokenRequest(
                "processor returned an empty token".to_string(),
            ));
        }

        let link = iframe_link(&self.config.gateway.iframe_page_url, order_id, &token)
            .ok_or_else(|| AppError::TokenRequest("cannot build payment link without a token".to_string()))?;

        // Token in hand; only now does the order change state.
        self.orders.update_status(order_id, OrderStatus::OnHold).await?;

        self.orders
            .add_note(order_id, &format!("Payment address: {}", link), true)
            .await?;

        self.cart.empty_cart(customer_ref).await?;

        info!(
            order_id = %order_id,
            amount = %amount,
            "Payment session created, order on hold"
        );

        let session = PaymentSession {
            order_id: order_id.to_string(),
            amount,
            token,
            iframe_link: link.clone(),
            created_at: Utc::now(),
        };

        Ok(CheckoutOutcome {
            redirect_url: self.config.gateway.return_url(order_id),
            payment_link: link,
            session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::Order;
    use crate::infrastructure::adapters::{InMemoryCartGateway, InMemoryOrderStore};
    use async_trait::async_trait;
    use crate::domain::checkout::CartTotals;

    struct StubTokenIssuer {
        token: Option<String>,
    }

    #[async_trait]
    impl FrameTokenIssuer for StubTokenIssuer {
        async fn request_frame_token(&self, _order_id: &str, _amount: i64) -> AppResult<String> {
            match &self.token {
                Some(token) => Ok(token.clone()),
                None => Err(AppError::TokenRequest("connection refused".to_string())),
            }
        }
    }

    fn test_config() -> Arc<AppConfig> {
        let mut config = AppConfig::default();
        config.gateway.api_url = "https://api.emis.example".to_string();
        config.gateway.frame_token = "shared-secret".to_string();
        config.gateway.iframe_page_url = "https://shop.example/pay".to_string();
        config.gateway.public_base_url = "https://shop.example".to_string();
        Arc::new(config)
    }

    fn test_totals() -> CartTotals {
        CartTotals {
            cart_total: 100.0,
            prices_include_tax: true,
            tax_total: 0.0,
            shipping_total: 10.0,
        }
    }

    async fn service_with(
        config: Arc<AppConfig>,
        token: Option<&str>,
    ) -> (CheckoutService, Arc<InMemoryOrderStore>, Arc<InMemoryCartGateway>) {
        let orders = Arc::new(InMemoryOrderStore::default());
        orders.insert(Order::new("1042")).await;
        let cart = Arc::new(InMemoryCartGateway::default());
        cart.set_totals("cust-1", test_totals()).await;
        let issuer = Arc::new(StubTokenIssuer {
            token: token.map(|t| t.to_string()),
        });
        let service = CheckoutService::new(config, orders.clone(), cart.clone(), issuer);
        (service, orders, cart)
    }

    #[tokio::test]
    async fn test_happy_path_marks_on_hold_and_returns_link() {
        let (service, orders, cart) = service_with(test_config(), Some("tok-1")).await;

        let outcome = service.process_payment("1042", "cust-1").await.unwrap();

        assert_eq!(
            outcome.payment_link,
            "https://shop.example/pay/?order-nr=1042&payment-key=tok-1"
        );
        assert_eq!(
            outcome.redirect_url,
            "https://shop.example/checkout/order-received/1042"
        );
        assert_eq!(outcome.session.amount, 121);

        let order = orders.get("1042").await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::OnHold);
        assert!(order.notes.iter().any(|n| n.text.contains("payment-key=tok-1")));
        assert!(cart.is_empty("cust-1").await);
    }

    #[tokio::test]
    async fn test_missing_configuration_is_an_explicit_error() {
        let (service, orders, _) = service_with(Arc::new(AppConfig::default()), Some("tok-1")).await;

        let err = service.process_payment("1042", "cust-1").await.unwrap_err();
        assert!(matches!(err, AppError::ConfigurationMissing(_)));

        let order = orders.get("1042").await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::New);
    }

    #[tokio::test]
    async fn test_token_failure_leaves_order_untouched() {
        let (service, orders, cart) = service_with(test_config(), None).await;

        let err = service.process_payment("1042", "cust-1").await.unwrap_err();
        assert!(matches!(err, AppError::TokenRequest(_)));

        let order = orders.get("1042").await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::New);
        assert!(order.notes.is_empty());
        assert!(!cart.is_empty("cust-1").await);
    }

    #[tokio::test]
    async fn test_empty_token_aborts_checkout() {
        let (service, orders, _) = service_with(test_config(), Some("")).await;

        let err = service.process_payment("1042", "cust-1").await.unwrap_err();
        assert!(matches!(err, AppError::TokenRequest(_)));

        let order = orders.get("1042").await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::New);
    }

    #[tokio::test]
    async fn test_unknown_order_is_not_found() {
        let (service, _, _) = service_with(test_config(), Some("tok-1")).await;

        let err = service.process_payment("9999", "cust-1").await.unwrap_err();
        assert!(matches!(err, AppError::OrderNotFound(_)));
    }

    #[tokio::test]
    async fn test_resolved_order_cannot_restart_checkout() {
        let (service, orders, _) = service_with(test_config(), Some("tok-1")).await;
        orders.set_status("1042", OrderStatus::OnHold).await;
        orders.set_status("1042", OrderStatus::Processing).await;

        let err = service.process_payment("1042", "cust-1").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidTransition(_)));
    }
}
