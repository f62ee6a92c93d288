//! Order Model
//!
//! Immutable input for the pricing pipeline. The pipeline borrows the order
//! and never mutates it.

use serde::{Deserialize, Serialize};

/// Category tag that triggers the per-item book discount (exact, case-sensitive)
pub const BOOK_CATEGORY: &str = "book";

/// A single order line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Unit price before any discount (currency units), must be positive
    pub price: f64,
    /// Number of units, must be positive
    pub quantity: i32,
    /// Free-form category tag; `"book"` gets the book discount
    pub category: String,
}

impl OrderItem {
    pub fn new(price: f64, quantity: i32, category: impl Into<String>) -> Self {
        Self {
            price,
            quantity,
            category: category.into(),
        }
    }

    /// Whether this line qualifies for the book discount
    pub fn is_book(&self) -> bool {
        self.category == BOOK_CATEGORY
    }
}

/// Customer profile fields relevant to pricing
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    /// Premium customers get a fixed percentage off the whole order
    pub is_premium: bool,
}

/// An order to price: line items plus the purchasing customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub items: Vec<OrderItem>,
    pub customer: Customer,
}

impl Order {
    pub fn new(items: Vec<OrderItem>, customer: Customer) -> Self {
        Self { items, customer }
    }
}
