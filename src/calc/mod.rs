//! The four arithmetic operations.
//!
//! Every operation is a pure function over `f64`. Only division can fail,
//! and only when the divisor is exactly zero; everything else follows
//! IEEE-754 semantics, including infinities and NaN.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;
use tracing::trace;

/// Errors produced by the calculator and by anything composed from it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("{0}")]
    InvalidInput(String),
}

/// Returns `a + b`.
pub fn add(a: f64, b: f64) -> f64 {
    trace!(a, b, "add");
    a + b
}

/// Returns `a - b`.
pub fn subtract(a: f64, b: f64) -> f64 {
    trace!(a, b, "subtract");
    a - b
}

/// Returns `a * b`.
pub fn multiply(a: f64, b: f64) -> f64 {
    trace!(a, b, "multiply");
    a * b
}

/// Returns `a / b`.
///
/// Fails with [`CalcError::DivisionByZero`] when `b` is zero (either sign),
/// regardless of `a`. Infinite or NaN operands are not rejected.
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    trace!(a, b, "divide");
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// A stateless calculator.
///
/// The operations are available both as associated functions
/// (`Calculator::add(1.0, 2.0)`) and through an instance, for callers that
/// want to pass a calculator around as a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(a: f64, b: f64) -> f64 {
        add(a, b)
    }

    pub fn subtract(a: f64, b: f64) -> f64 {
        subtract(a, b)
    }

    pub fn multiply(a: f64, b: f64) -> f64 {
        multiply(a, b)
    }

    pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
        divide(a, b)
    }

    /// Apply `op` to the operands.
    pub fn apply(&self, op: Operation, a: f64, b: f64) -> Result<f64, CalcError> {
        op.apply(a, b)
    }
}

/// One of the four supported binary operations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Apply the operation to `a` and `b`.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Operation::Add => Ok(add(a, b)),
            Operation::Subtract => Ok(subtract(a, b)),
            Operation::Multiply => Ok(multiply(a, b)),
            Operation::Divide => divide(a, b),
        }
    }

    /// The infix symbol for this operation.
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// Lowercase name, e.g. `"multiply"`.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "sum" | "plus" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "minus" | "-" => Ok(Operation::Subtract),
            "multiply" | "mul" | "times" | "*" | "x" => Ok(Operation::Multiply),
            "divide" | "div" | "/" => Ok(Operation::Divide),
            other => {
                let supported: Vec<&str> = Operation::iter().map(Operation::name).collect();
                Err(format!(
                    "unsupported operation: '{other}'. Supported: {} (or + - * /)",
                    supported.join(", ")
                ))
            }
        }
    }
}
