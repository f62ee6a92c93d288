//! Pricing Pipeline Module
//!
//! Order pricing as a chain of rules: per-item book discount, subtotal,
//! premium customer discount, bulk purchase discount.

mod calculator;

pub use calculator::*;
