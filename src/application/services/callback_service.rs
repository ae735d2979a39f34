//! Callback service applying processor outcome notifications
//!
//! Stateless per invocation. Every callback is logged before authentication,
//! the source IP is checked against the configured allow-list (an unset
//! allow-list fails closed), and the outcome is applied to the order at most
//! once: the first non-on-hold status wins, later callbacks are ignored.

use std::net::IpAddr;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::order::OrderStatus;
use crate::domain::ports::{AdminNotifier, OrderStore};
use crate::domain::session::CallbackNotification;
use crate::shared::error::{AppError, AppResult};
use crate::shared::logging::LoggingUtils;

/// Sentinel reported in logs and alerts when the allow-list is unset. It can
/// never equal a real source address.
const UNSET_ALLOWED_IP: &str = "<unset>";

/// What the callback did to the order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// The outcome was applied and the order transitioned
    Applied(OrderStatus),
    /// The order was already resolved; the duplicate was logged and dropped
    Ignored(OrderStatus),
}

pub struct CallbackService {
    config: Arc<AppConfig>,
    orders: Arc<dyn OrderStore>,
    notifier: Arc<dyn AdminNotifier>,
}

impl CallbackService {
    pub fn new(config: Arc<AppConfig>, orders: Arc<dyn OrderStore>, notifier: Arc<dyn AdminNotifier>) -> Self {
        Self {
            config,
            orders,
            notifier,
        }
    }

    /// Authenticate and apply one outcome notification.
    pub async fn handle(&self, notification: &CallbackNotification, source_ip: &str) -> AppResult<CallbackOutcome> {
        let order_id = notification.merchant_reference_number.as_str();

        // Audit line first, even for callbacks that end up rejected.
        LoggingUtils::log_callback_received(order_id, &notification.status, source_ip);

        let allowed_ip = &self.config.gateway.callback_remote_ip;
        if !Self::is_allowed_source(allowed_ip, source_ip) {
            let allowed = if allowed_ip.is_empty() {
                UNSET_ALLOWED_IP.to_string()
            } else {
                allowed_ip.clone()
            };

            LoggingUtils::log_callback_rejected(order_id, source_ip, &allowed);

            let body = format!(
                "The EMIS payment callback was invoked from an unexpected IP: {}. \
                 The configured callback IP is {}.",
                source_ip, allowed
            );
            if let Err(e) = self.notifier.notify("EMIS callback from a different IP", &body).await {
                warn!(error = %e, "Failed to dispatch callback rejection alert");
            }

            return Err(AppError::UnauthorizedCallback {
                received: source_ip.to_string(),
                allowed,
            });
        }

        let order = self
            .orders
            .get(order_id)
            .await?
            .ok_or_else(|| AppError::OrderNotFound(order_id.to_string()))?;

        if order.status.is_resolved() {
            info!(
                order_id = %order_id,
                status = %order.status,
                callback_status = %notification.status,
                "Order already resolved; duplicate callback ignored"
            );
            return Ok(CallbackOutcome::Ignored(order.status));
        }

        let target = if notification.is_accepted() {
            OrderStatus::Processing
        } else {
            OrderStatus::Failed
        };

        let updated = self.orders.update_status(order_id, target).await?;
        LoggingUtils::log_order_transition(order_id, order.status.as_str(), target.as_str(), source_ip);

        Ok(CallbackOutcome::Applied(updated.status))
    }

    /// Compare the callback source against the allow-list. An unset
    /// allow-list denies everything, including `0.0.0.0`. Textual forms are
    /// normalized through `IpAddr` so equivalent spellings still match.
    fn is_allowed_source(allowed: &str, remote: &str) -> bool {
        if allowed.is_empty() {
            return false;
        }
        if allowed == remote {
            return true;
        }
        match (allowed.parse::<IpAddr>(), remote.parse::<IpAddr>()) {
            (Ok(a), Ok(r)) => a == r,
            _ => false,
        }
    }
}
