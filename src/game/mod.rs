//! The "think of a number" trick.
//!
//! Take any number, add 5, double it, subtract 4, halve it, then subtract
//! the number you started with: the answer is always 3, because
//! `((n + 5) * 2 - 4) / 2 - n = n + 3 - n`.
//!
//! Two entry points compute the formula. [`compute_invariant`] refuses
//! negative input; [`compute_invariant_unguarded`] accepts any `f64`. Both
//! behaviours are part of the public contract.

use tracing::debug;

use crate::calc::{self, CalcError, Operation};
use crate::models::Step;

/// Message carried by [`CalcError::InvalidInput`] when a negative number is
/// given to the guarded entry point.
pub const NEGATIVE_INPUT_MESSAGE: &str = "Número precisa ser positivo!";

/// The value the formula always produces.
pub const EXPECTED_RESULT: f64 = 3.0;

pub const ADDEND: f64 = 5.0;
pub const FACTOR: f64 = 2.0;
pub const SUBTRAHEND: f64 = 4.0;
pub const DIVISOR: f64 = 2.0;

/// Run the trick on `n`, rejecting negative input.
///
/// Returns [`CalcError::InvalidInput`] when `n < 0`. `-0.0` and NaN are not
/// negative and pass through; NaN yields NaN.
pub fn compute_invariant(n: f64) -> Result<f64, CalcError> {
    reject_negative(n)?;

    let step0 = calc::add(n, ADDEND);
    let step1 = calc::multiply(step0, FACTOR);
    let step2 = calc::subtract(step1, SUBTRAHEND);
    let step3 = calc::divide(step2, DIVISOR)?;
    let step4 = calc::subtract(step3, n);

    debug!(n, result = step4, "invariant computed");
    Ok(step4)
}

/// Run the trick on `n` as a single expression, without sign validation.
///
/// Every step goes through the calculator. `calc::divide` only fails on a
/// zero divisor and [`DIVISOR`] is a non-zero constant, so the `NaN`
/// fallback is never taken.
pub fn compute_invariant_unguarded(n: f64) -> f64 {
    calc::subtract(
        calc::divide(
            calc::subtract(calc::multiply(calc::add(n, ADDEND), FACTOR), SUBTRAHEND),
            DIVISOR,
        )
        .unwrap_or(f64::NAN),
        n,
    )
}

/// Run the guarded trick on `n` and return every intermediate step.
///
/// The result of the last step is what [`compute_invariant`] returns.
pub fn trace(n: f64) -> Result<Vec<Step>, CalcError> {
    reject_negative(n)?;
    run_plan(n)
}

/// Step-by-step counterpart of [`compute_invariant_unguarded`].
///
/// Accepts any sign. The only fallible step is the division by the
/// constant [`DIVISOR`], so in practice this never fails.
pub fn trace_unguarded(n: f64) -> Result<Vec<Step>, CalcError> {
    run_plan(n)
}

fn run_plan(n: f64) -> Result<Vec<Step>, CalcError> {
    let plan = [
        (Operation::Add, ADDEND),
        (Operation::Multiply, FACTOR),
        (Operation::Subtract, SUBTRAHEND),
        (Operation::Divide, DIVISOR),
        (Operation::Subtract, n),
    ];

    let mut steps = Vec::with_capacity(plan.len());
    let mut acc = n;
    for (index, (operation, rhs)) in plan.into_iter().enumerate() {
        let result = operation.apply(acc, rhs)?;
        steps.push(Step {
            index,
            operation,
            lhs: acc,
            rhs,
            result,
        });
        acc = result;
    }

    Ok(steps)
}

fn reject_negative(n: f64) -> Result<(), CalcError> {
    if n < 0.0 {
        debug!(n, "rejecting negative input");
        return Err(CalcError::InvalidInput(NEGATIVE_INPUT_MESSAGE.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn guarded_returns_three_for_positive_input() {
        for n in [0.0, 1.0, 5.0, 9.0, 11.0, 65.0, 100.0] {
            assert_eq!(compute_invariant(n).unwrap(), EXPECTED_RESULT, "n = {n}");
        }
    }

    #[test]
    fn guarded_rejects_negative_input() {
        for n in [-1.0, -4.0, -0.1, -100.0] {
            let err = compute_invariant(n).unwrap_err();
            assert_eq!(err, CalcError::InvalidInput(NEGATIVE_INPUT_MESSAGE.into()));
            assert_eq!(err.to_string(), "Número precisa ser positivo!");
        }
    }

    #[test]
    fn guarded_accepts_negative_zero() {
        assert_eq!(compute_invariant(-0.0).unwrap(), EXPECTED_RESULT);
    }

    #[test]
    fn guarded_passes_nan_through() {
        assert!(compute_invariant(f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn unguarded_accepts_negative_input() {
        for n in [-1.0, -5.0, -10.0, -0.5] {
            assert_relative_eq!(compute_invariant_unguarded(n), EXPECTED_RESULT, max_relative = 1e-9);
        }
    }

    #[test]
    fn unguarded_matches_step_by_step_calculator_composition() {
        for n in [-7.25, -1.0, 0.0, 2.7, 65.0, 1e10] {
            let step3 = calc::divide(
                calc::subtract(calc::multiply(calc::add(n, ADDEND), FACTOR), SUBTRAHEND),
                DIVISOR,
            )
            .unwrap();
            assert_eq!(compute_invariant_unguarded(n), calc::subtract(step3, n), "n = {n}");
            assert_eq!(
                compute_invariant_unguarded(n),
                trace_unguarded(n).unwrap()[4].result,
                "n = {n}"
            );
        }
    }

    #[test]
    fn divisor_is_non_zero() {
        assert_ne!(DIVISOR, 0.0);
        assert!(calc::divide(1.0, DIVISOR).is_ok());
    }

    #[test]
    fn trace_records_each_step() {
        let steps = trace(10.0).unwrap();
        let results: Vec<f64> = steps.iter().map(|s| s.result).collect();
        assert_eq!(results, vec![15.0, 30.0, 26.0, 13.0, 3.0]);

        let ops: Vec<Operation> = steps.iter().map(|s| s.operation).collect();
        assert_eq!(
            ops,
            vec![
                Operation::Add,
                Operation::Multiply,
                Operation::Subtract,
                Operation::Divide,
                Operation::Subtract,
            ]
        );
        assert_eq!(steps[0].lhs, 10.0);
        assert_eq!(steps[4].rhs, 10.0);
        assert_eq!(steps[4].index, 4);
    }

    #[test]
    fn trace_ends_with_guarded_result() {
        for n in [0.0, 0.5, 7.0, 1234.56] {
            let steps = trace(n).unwrap();
            assert_eq!(steps.len(), 5);
            assert_eq!(steps[4].result, compute_invariant(n).unwrap());
        }
    }

    #[test]
    fn trace_steps_chain() {
        let steps = trace(2.7).unwrap();
        for pair in steps.windows(2) {
            assert_eq!(pair[0].result, pair[1].lhs);
        }
    }

    #[test]
    fn trace_rejects_negative_input() {
        assert!(matches!(trace(-3.0), Err(CalcError::InvalidInput(_))));
    }

    #[test]
    fn trace_unguarded_accepts_negative_input() {
        let steps = trace_unguarded(-3.0).unwrap();
        let results: Vec<f64> = steps.iter().map(|s| s.result).collect();
        assert_eq!(results, vec![2.0, 4.0, 0.0, 0.0, 3.0]);
        assert_eq!(steps[4].result, compute_invariant_unguarded(-3.0));
    }
}
