//! Pricing Calculator
//!
//! Pipeline steps for pricing an order, each a pure function of its inputs,
//! composed left-to-right by [`process_order`]. All arithmetic uses
//! `rust_decimal` for precision; `f64` inputs cross into `Decimal` once,
//! after validation. The core never rounds — currency rounding policy
//! belongs to the integration layer.

use crate::error::PricingError;
use crate::models::{BULK_PURCHASE_THRESHOLD, Customer, DISCOUNTS, Order, OrderItem};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Maximum allowed price per item (currency units)
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line
const MAX_QUANTITY: i32 = 9999;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> Result<(), PricingError> {
    if !value.is_finite() {
        return Err(PricingError::InvalidAmount(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
///
/// Input values are pre-validated via `require_finite()` at the boundary.
/// If NaN/Infinity somehow reaches here, logs an error and returns ZERO
/// to avoid silent data corruption in monetary calculations.
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Validate an OrderItem before processing
pub fn validate_item(item: &OrderItem) -> Result<(), PricingError> {
    require_finite(item.price, "price")?;
    if item.price <= 0.0 {
        return Err(PricingError::InvalidAmount(format!(
            "price must be positive, got {}",
            item.price
        )));
    }
    if item.price > MAX_PRICE {
        return Err(PricingError::InvalidAmount(format!(
            "price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, item.price
        )));
    }

    if item.quantity <= 0 {
        return Err(PricingError::InvalidQuantity(format!(
            "quantity must be positive, got {}",
            item.quantity
        )));
    }
    if item.quantity > MAX_QUANTITY {
        return Err(PricingError::InvalidQuantity(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, item.quantity
        )));
    }

    if item.category.trim().is_empty() {
        return Err(PricingError::InvalidCategory(
            "category must not be empty".to_string(),
        ));
    }

    Ok(())
}

// ==================== Pipeline Steps ====================

/// Per-unit effective price after the book discount (full precision)
///
/// Book-category lines are priced at `price * BOOK`; everything else
/// passes through unchanged.
pub fn effective_unit_price(item: &OrderItem) -> Decimal {
    let price = to_decimal(item.price);
    if item.is_book() {
        price * DISCOUNTS.book
    } else {
        price
    }
}

/// Sum of effective unit price × quantity over all items
///
/// An empty item sequence yields zero.
pub fn calculate_subtotal(items: &[OrderItem]) -> Decimal {
    items
        .iter()
        .map(|item| effective_unit_price(item) * Decimal::from(item.quantity))
        .sum()
}

/// Apply the premium customer factor iff the customer is premium
pub fn apply_customer_discount(subtotal: Decimal, customer: &Customer) -> Decimal {
    if customer.is_premium {
        subtotal * DISCOUNTS.premium_customer
    } else {
        subtotal
    }
}

/// Apply the bulk purchase factor iff the total strictly exceeds the threshold
///
/// A total of exactly the threshold does not qualify.
pub fn apply_bulk_discount(total: Decimal) -> Decimal {
    if total > BULK_PURCHASE_THRESHOLD {
        total * DISCOUNTS.bulk_purchase
    } else {
        total
    }
}

// ==================== Order Processing ====================

/// Result of running the pricing pipeline over an order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PricingBreakdown {
    /// Sum of effective item prices × quantity, before order-level discounts
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    /// Amount removed by the premium customer factor (zero if not premium)
    #[serde(with = "rust_decimal::serde::float")]
    pub customer_discount_amount: Decimal,
    /// Subtotal after the customer discount
    #[serde(with = "rust_decimal::serde::float")]
    pub after_customer_discount: Decimal,
    /// Amount removed by the bulk factor (zero at or below the threshold)
    #[serde(with = "rust_decimal::serde::float")]
    pub bulk_discount_amount: Decimal,
    /// Final order total, full precision
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Whether the premium customer factor was applied
    pub premium_applied: bool,
    /// Whether the bulk purchase factor was applied
    pub bulk_applied: bool,
}

/// Price an order through the full pipeline
///
/// # Calculation Steps
/// 1. Validate every item (finite positive price, positive quantity, bounds)
/// 2. Per-item book discount
/// 3. Subtotal (sum of effective price × quantity)
/// 4. Premium customer discount
/// 5. Bulk purchase discount, on the customer-discounted total
///
/// The input order is never mutated. Validation failures surface before any
/// arithmetic runs.
pub fn process_order(order: &Order) -> Result<PricingBreakdown, PricingError> {
    for item in &order.items {
        validate_item(item)?;
    }

    let subtotal = calculate_subtotal(&order.items);
    let after_customer_discount = apply_customer_discount(subtotal, &order.customer);
    let total = apply_bulk_discount(after_customer_discount);

    Ok(PricingBreakdown {
        subtotal,
        customer_discount_amount: subtotal - after_customer_discount,
        after_customer_discount,
        bulk_discount_amount: after_customer_discount - total,
        total,
        premium_applied: order.customer.is_premium,
        bulk_applied: after_customer_discount > BULK_PURCHASE_THRESHOLD,
    })
}
