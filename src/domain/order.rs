//! Order domain model
//!
//! Orders live in the collaborating order system; this gateway only reads
//! them and drives the `new/pending -> on-hold -> {processing, failed}`
//! slice of their lifecycle. Transitions are one-way.

use serde::{Deserialize, Serialize};

/// Order status as exposed by the order collaborator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    New,
    Pending,
    OnHold,
    Processing,
    Failed,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Pending => "pending",
            OrderStatus::OnHold => "on-hold",
            OrderStatus::Processing => "processing",
            OrderStatus::Failed => "failed",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Whether a payment outcome has already been applied. Once resolved an
    /// order never goes back to `on-hold` or `new`; later callbacks are
    /// ignored (first non-on-hold status wins).
    pub fn is_resolved(&self) -> bool {
        matches!(
            self,
            OrderStatus::Processing
                | OrderStatus::Failed
                | OrderStatus::Completed
                | OrderStatus::Cancelled
        )
    }

    /// One-way transition rules for the slice of the lifecycle this gateway
    /// touches.
    pub fn can_transition_to(&self, to: OrderStatus) -> bool {
        match (self, to) {
            (OrderStatus::New, OrderStatus::OnHold)
            | (OrderStatus::Pending, OrderStatus::OnHold) => true,
            (OrderStatus::OnHold, OrderStatus::Processing)
            | (OrderStatus::OnHold, OrderStatus::Failed)
            | (OrderStatus::OnHold, OrderStatus::Cancelled) => true,
            // Fulfilment transition owned by the storefront, kept for
            // collaborator compatibility.
            (OrderStatus::Processing, OrderStatus::Completed) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit note attached to an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderNote {
    pub text: String,
    /// Whether the note is shown to the customer
    pub customer_visible: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Order snapshot as consumed from the order collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub status: OrderStatus,
    pub notes: Vec<OrderNote>,
}

impl Order {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            status: OrderStatus::New,
            notes: Vec::new(),
        }
    }
}
