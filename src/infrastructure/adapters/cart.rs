//! In-memory cart gateway adapter
//!
//! Backs the cart collaborator port: totals lookup for the amount
//! calculation and cart clearing after a successful submission.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::checkout::CartTotals;
use crate::domain::ports::CartGateway;
use crate::shared::error::{AppError, AppResult};

#[derive(Default)]
pub struct InMemoryCartGateway {
    carts: Arc<RwLock<HashMap<String, CartTotals>>>,
}

impl InMemoryCartGateway {
    pub async fn set_totals(&self, customer_ref: &str, totals: CartTotals) {
        self.carts.write().await.insert(customer_ref.to_string(), totals);
    }

    pub async fn is_empty(&self, customer_ref: &str) -> bool {
        !self.carts.read().await.contains_key(customer_ref)
    }
}

#[async_trait]
impl CartGateway for InMemoryCartGateway {
    async fn totals(&self, customer_ref: &str) -> AppResult<CartTotals> {
        self.carts
            .read()
            .await
            .get(customer_ref)
            .cloned()
            .ok_or_else(|| AppError::Validation(format!("no active cart for customer {}", customer_ref)))
    }

    async fn empty_cart(&self, customer_ref: &str) -> AppResult<()> {
        self.carts.write().await.remove(customer_ref);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_totals_then_empty() {
        let cart = InMemoryCartGateway::default();
        cart.set_totals(
            "cust-1",
            CartTotals {
                cart_total: 10.0,
                prices_include_tax: true,
                tax_total: 0.0,
                shipping_total: 0.0,
            },
        )
        .await;

        assert_eq!(cart.totals("cust-1").await.unwrap().cart_total, 10.0);

        cart.empty_cart("cust-1").await.unwrap();
        assert!(cart.is_empty("cust-1").await);
        assert!(cart.totals("cust-1").await.is_err());
    }
}
