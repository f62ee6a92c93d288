//! Data models for the pricing pipeline

mod discount;
mod order;

pub use discount::*;
pub use order::*;
