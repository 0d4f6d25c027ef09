//! thinknum — a four-operation calculator and the think-of-a-number trick
//! (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod calc;
pub mod config;
pub mod constants;
pub mod env;
pub mod game;
pub mod logging;
pub mod models;
pub mod output;

pub use calc::{CalcError, Calculator, Operation, add, divide, multiply, subtract};
pub use game::{compute_invariant, compute_invariant_unguarded};
