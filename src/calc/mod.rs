//! Arithmetic Operation Dispatcher
//!
//! Fixed table of four named binary operations, dispatched by wire name.
//! The table is a sealed enum with an exhaustive match, so it is fixed at
//! compile time and cannot be altered through any runtime path.

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Named binary operation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Wire name of this operation
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Subtract => "SUBTRACT",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
        }
    }

    /// Apply this operation to the operands
    ///
    /// Divide rejects a zero divisor before evaluating.
    pub fn apply(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADD" => Ok(Self::Add),
            "SUBTRACT" => Ok(Self::Subtract),
            "MULTIPLY" => Ok(Self::Multiply),
            "DIVIDE" => Ok(Self::Divide),
            other => Err(CalcError::UnknownOperation(other.to_string())),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolve `operation_name` against the fixed table and apply it
///
/// The lookup result is validated: an unrecognized name fails with
/// [`CalcError::UnknownOperation`] naming the requested operation.
pub fn apply(a: f64, b: f64, operation_name: &str) -> Result<f64, CalcError> {
    let operation = Operation::from_str(operation_name)?;
    operation.apply(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(apply(6.0, 3.0, "ADD").unwrap(), 9.0);
        assert_eq!(apply(6.0, 3.0, "SUBTRACT").unwrap(), 3.0);
        assert_eq!(apply(6.0, 3.0, "MULTIPLY").unwrap(), 18.0);
        assert_eq!(apply(6.0, 3.0, "DIVIDE").unwrap(), 2.0);
    }

    #[test]
    fn test_division_by_zero_rejected() {
        assert_eq!(apply(6.0, 0.0, "DIVIDE"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_negative_zero_divisor_rejected() {
        // IEEE-754 -0.0 == 0.0, so it must also be rejected
        assert_eq!(apply(6.0, -0.0, "DIVIDE"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_unknown_operation_names_the_request() {
        let err = apply(1.0, 2.0, "MOD").unwrap_err();
        assert_eq!(err, CalcError::UnknownOperation("MOD".to_string()));
        assert_eq!(err.to_string(), "Unknown operation: MOD");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(matches!(
            apply(1.0, 2.0, "add"),
            Err(CalcError::UnknownOperation(_))
        ));
    }

    #[test]
    fn test_negative_operands() {
        assert_eq!(apply(-6.0, 3.0, "DIVIDE").unwrap(), -2.0);
        assert_eq!(apply(0.0, 3.0, "DIVIDE").unwrap(), 0.0);
        assert_eq!(apply(-2.0, -4.0, "MULTIPLY").unwrap(), 8.0);
    }

    #[test]
    fn test_wire_names_match_serde() {
        for op in [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ] {
            let json = serde_json::to_value(op).unwrap();
            assert_eq!(json, serde_json::Value::String(op.name().to_string()));
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(apply(7.5, 2.5, "ADD"), apply(7.5, 2.5, "ADD"));
    }
}
