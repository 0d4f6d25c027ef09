//! Result records shared by the library, the renderers and the CLI.
//!
//! Renderers consume these rather than calling into `calc` or `game`
//! themselves, so every output format sees the same numbers.

use serde::{Deserialize, Serialize};

use crate::calc::Operation;

/// Name recorded on evaluations produced by the think-of-a-number trick.
pub const INVARIANT_OPERATION: &str = "invariant";

/// One intermediate step of a composed calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Zero-based position in the sequence.
    pub index: usize,
    pub operation: Operation,
    pub lhs: f64,
    pub rhs: f64,
    pub result: f64,
}

/// The outcome of one command: what was computed, from what, and the answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Operation name: one of the [`Operation`] names, or
    /// [`INVARIANT_OPERATION`].
    pub operation: String,
    pub operands: Vec<f64>,
    pub result: f64,
    /// Intermediate steps; empty for single operations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

impl Evaluation {
    /// Record a single binary operation.
    pub fn binary(operation: Operation, a: f64, b: f64, result: f64) -> Self {
        Self {
            operation: operation.name().to_string(),
            operands: vec![a, b],
            result,
            steps: Vec::new(),
        }
    }

    /// Record a run of the think-of-a-number trick.
    pub fn invariant(n: f64, result: f64, steps: Vec<Step>) -> Self {
        Self {
            operation: INVARIANT_OPERATION.to_string(),
            operands: vec![n],
            result,
            steps,
        }
    }

    /// The binary operation this evaluation records, if any.
    pub fn binary_operation(&self) -> Option<Operation> {
        if self.operands.len() != 2 {
            return None;
        }
        self.operation.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn binary_records_operands() {
        let eval = Evaluation::binary(Operation::Divide, 10.0, 2.0, 5.0);
        assert_eq!(eval.operation, "divide");
        assert_eq!(eval.operands, vec![10.0, 2.0]);
        assert_eq!(eval.result, 5.0);
        assert!(eval.steps.is_empty());
        assert_eq!(eval.binary_operation(), Some(Operation::Divide));
    }

    #[test]
    fn invariant_has_no_binary_operation() {
        let eval = Evaluation::invariant(4.0, 3.0, Vec::new());
        assert_eq!(eval.operation, INVARIANT_OPERATION);
        assert_eq!(eval.binary_operation(), None);
    }

    #[test]
    fn serde_skips_empty_steps() {
        let eval = Evaluation::binary(Operation::Add, 1.0, 2.0, 3.0);
        let json = serde_json::to_value(&eval).unwrap();
        assert!(json.get("steps").is_none());
        assert_eq!(json["operation"], "add");
        assert_eq!(json["result"], 3.0);

        let back: Evaluation = serde_json::from_value(json).unwrap();
        assert_eq!(back, eval);
    }

    #[test]
    fn serde_includes_steps() {
        let step = Step {
            index: 0,
            operation: Operation::Add,
            lhs: 1.0,
            rhs: 5.0,
            result: 6.0,
        };
        let eval = Evaluation::invariant(1.0, 3.0, vec![step]);
        let json = serde_json::to_value(&eval).unwrap();
        assert_eq!(json["steps"][0]["operation"], "add");
        assert_eq!(json["steps"][0]["result"], 6.0);
    }
}
