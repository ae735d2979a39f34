//! Collaborator ports
//!
//! The storefront pieces this gateway depends on (order store, cart engine,
//! processor token endpoint, administrator alerts) are reached through these
//! traits. In-process adapters back them in this service; a real deployment
//! can substitute its own.

use async_trait::async_trait;

use crate::domain::checkout::CartTotals;
use crate::domain::order::{Order, OrderStatus};
use crate::shared::error::AppResult;

/// Order lookup and mutation, owned by the order collaborator. Status
/// changes are atomic on the collaborator's side.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn get(&self, order_id: &str) -> AppResult<Option<Order>>;

    /// Apply a status transition, returning the updated order. Fails with
    /// `OrderNotFound` for unknown ids and `InvalidTransition` when the
    /// one-way rules forbid the change.
    async fn update_status(&self, order_id: &str, status: OrderStatus) -> AppResult<Order>;

    /// Append an audit note to the order.
    async fn add_note(&self, order_id: &str, text: &str, customer_visible: bool) -> AppResult<()>;
}

/// Cart totals and clearing, owned by the cart collaborator.
#[async_trait]
pub trait CartGateway: Send + Sync {
    async fn totals(&self, customer_ref: &str) -> AppResult<CartTotals>;

    async fn empty_cart(&self, customer_ref: &str) -> AppResult<()>;
}

/// One-time frame token issuance against the processor.
#[async_trait]
pub trait FrameTokenIssuer: Send + Sync {
    async fn request_frame_token(&self, order_id: &str, amount: i64) -> AppResult<String>;
}

/// Administrator alert channel for rejected callbacks.
#[async_trait]
pub trait AdminNotifier: Send + Sync {
    async fn notify(&self, subject: &str, body: &str) -> AppResult<()>;
}
