//! Checkout amount calculation
//!
//! Derives the chargeable total from the cart collaborator's totals using
//! the processor's fixed rounding convention.

use serde::{Deserialize, Serialize};

/// Cart totals as reported by the cart collaborator. Values are assumed
/// non-negative; the cart engine owns their consistency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Line-item total of the cart contents
    pub cart_total: f64,
    /// Whether `cart_total` already includes tax
    pub prices_include_tax: bool,
    /// Tax total, added only for tax-exclusive carts
    pub tax_total: f64,
    /// Shipping total before the processor surcharge
    pub shipping_total: f64,
}

/// Fixed markup applied on top of the shipping total.
const SHIPPING_MARKUP: f64 = 1.14;

/// Compute the amount to charge, in whole currency units.
///
/// Tax-inclusive carts charge the cart total as-is; tax-exclusive carts add
/// the tax total. Shipping is charged plus a fixed 14% markup surcharge of
/// `shipping_total * 1.14`. The result is rounded half-away-from-zero to the
/// nearest whole unit, which is the only granularity the processor accepts.
pub fn chargeable_amount(totals: &CartTotals) -> i64 {
    let base = if totals.prices_include_tax {
        totals.cart_total
    } else {
        totals.cart_total + totals.tax_total
    };

    let total = base + totals.shipping_total * SHIPPING_MARKUP + totals.shipping_total;

    total.round() as i64
}
