//! Discount Policy
//!
//! Fixed discount factors and the bulk purchase threshold. The table is a
//! compile-time constant and cannot be altered at runtime.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Named discount factors, each in (0, 1]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiscountTable {
    /// Per-item factor for book-category lines
    #[serde(with = "rust_decimal::serde::float")]
    pub book: Decimal,
    /// Whole-order factor for premium customers
    #[serde(with = "rust_decimal::serde::float")]
    pub premium_customer: Decimal,
    /// Whole-order factor when the subtotal exceeds the bulk threshold
    #[serde(with = "rust_decimal::serde::float")]
    pub bulk_purchase: Decimal,
}

impl DiscountTable {
    /// Check that every factor lies in (0, 1]
    pub fn is_valid(&self) -> bool {
        [self.book, self.premium_customer, self.bulk_purchase]
            .iter()
            .all(|f| *f > Decimal::ZERO && *f <= Decimal::ONE)
    }
}

/// Process-wide discount policy:
/// BOOK = 0.9, PREMIUM_CUSTOMER = 0.95, BULK_PURCHASE = 0.98
pub const DISCOUNTS: DiscountTable = DiscountTable {
    book: Decimal::from_parts(9, 0, 0, false, 1),
    premium_customer: Decimal::from_parts(95, 0, 0, false, 2),
    bulk_purchase: Decimal::from_parts(98, 0, 0, false, 2),
};

/// Customer-discounted total above which (strictly) the bulk factor applies
pub const BULK_PURCHASE_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_factors_in_range() {
        assert!(DISCOUNTS.is_valid());
    }

    #[test]
    fn test_discount_factor_values() {
        assert_eq!(DISCOUNTS.book, Decimal::new(9, 1));
        assert_eq!(DISCOUNTS.premium_customer, Decimal::new(95, 2));
        assert_eq!(DISCOUNTS.bulk_purchase, Decimal::new(98, 2));
        assert_eq!(BULK_PURCHASE_THRESHOLD, Decimal::from(100));
    }

    #[test]
    fn test_out_of_range_factor_rejected() {
        let table = DiscountTable {
            book: Decimal::ZERO,
            ..DISCOUNTS
        };
        assert!(!table.is_valid());

        let table = DiscountTable {
            bulk_purchase: Decimal::new(101, 2),
            ..DISCOUNTS
        };
        assert!(!table.is_valid());
    }
}
