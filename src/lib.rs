//! Tally Core
//!
//! Stateless computation library for order checkout:
//! - [`pricing`]: order pricing pipeline (book discount, premium customer
//!   discount, bulk purchase discount)
//! - [`calc`]: named arithmetic operation dispatcher
//!
//! Both components are pure and synchronous. They read only compile-time
//! constant policy tables and their own arguments, so they may be called
//! from any number of threads without coordination.

pub mod calc;
pub mod error;
pub mod models;
pub mod pricing;

// Re-exports
pub use calc::{Operation, apply};
pub use error::{CalcError, PricingError};
pub use models::{BULK_PURCHASE_THRESHOLD, Customer, DISCOUNTS, DiscountTable, Order, OrderItem};
pub use pricing::{PricingBreakdown, process_order};
