//! Domain layer - Core business logic and domain models
//!
//! This module contains the order state machine, amount calculation, payment
//! session model and the collaborator ports, independent of infrastructure
//! concerns like HTTP or the processor's wire protocol.

pub mod checkout;
pub mod order;
pub mod ports;
pub mod session;

pub use checkout::{chargeable_amount, CartTotals};
pub use order::{Order, OrderNote, OrderStatus};
pub use ports::{AdminNotifier, CartGateway, FrameTokenIssuer, OrderStore};
pub use session::{iframe_link, CallbackNotification, PaymentSession, ACCEPTED_STATUS};
