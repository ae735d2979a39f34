//! In-memory order store adapter
//!
//! Backs the order collaborator port for this service and for tests. Status
//! changes are applied under a single write lock, which stands in for the
//! collaborator's atomic transition API.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::order::{Order, OrderNote, OrderStatus};
use crate::domain::ports::OrderStore;
use crate::shared::error::{AppError, AppResult};

#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<String, Order>>>,
}

impl InMemoryOrderStore {
    /// Seed an order, replacing any existing one with the same id.
    pub async fn insert(&self, order: Order) {
        self.orders.write().await.insert(order.order_id.clone(), order);
    }

    /// Force a status without transition checks. Seeding helper for tests
    /// and for mirroring state owned by the real collaborator.
    pub async fn set_status(&self, order_id: &str, status: OrderStatus) {
        if let Some(order) = self.orders.write().await.get_mut(order_id) {
            order.status = status;
        }
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn get(&self, order_id: &str) -> AppResult<Option<Order>> {
        Ok(self.orders.read().await.get(order_id).cloned())
    }

    async fn update_status(&self, order_id: &str, status: OrderStatus) -> AppResult<Order> {
        let mut orders = self.orders.write().await;
        let order = orders
            .get_mut(order_id)
            .ok_or_else(|| AppError::OrderNotFound(order_id.to_string()))?;

        if !order.status.can_transition_to(status) {
            return Err(AppError::InvalidTransition(format!(
                "order {}: {} -> {}",
                order_id, order.status, status
            )));
        }

        order.status = status;
        Ok(order.clone())
    }

    async fn add_note(&self, order_id: &str, text: &str, customer_visible: bool) -> AppResult<()> {
        let mut orders = self.orders.write().await;
        let order = orders
            .get_mut(order_id)
            .ok_or_else(|| AppError::OrderNotFound(order_id.to_string()))?;

        order.notes.push(OrderNote {
            text: text.to_string(),
            customer_visible,
            created_at: Utc::now(),
        });
        Ok(())
    }
}
