//! Clap argument types.

use clap::Parser;

use thinknum::calc::Operation;
use thinknum::output::OutputFormat;

/// Four-operation calculator and the think-of-a-number trick.
#[derive(Parser, Debug)]
#[command(name = "thinknum", version = thinknum::constants::VERSION)]
pub struct Cli {
    /// Output format (overrides config and THINKNUM_FORMAT).
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Maximum fractional digits in terminal output.
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Add two numbers.
    Add(BinaryArgs),

    /// Subtract the second number from the first.
    Subtract(BinaryArgs),

    /// Multiply two numbers.
    Multiply(BinaryArgs),

    /// Divide the first number by the second.
    Divide(BinaryArgs),

    /// Evaluate `A OP B`, where OP is a name (add, minus, ...) or a symbol.
    Eval(EvalArgs),

    /// Think of a number: the answer is always 3.
    Think(ThinkArgs),

    /// Print version information.
    Version,
}

/// Two operands for a binary operation.
#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct BinaryArgs {
    pub a: f64,
    pub b: f64,
}

/// Arguments for the `eval` subcommand.
#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct EvalArgs {
    pub a: f64,
    /// Operation name or symbol. Quote `*` to keep the shell from expanding it.
    #[arg(allow_hyphen_values = true)]
    pub op: Operation,
    pub b: f64,
}

/// Arguments for the `think` subcommand.
#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct ThinkArgs {
    /// The number you thought of.
    pub number: f64,

    /// Skip the negative-number check.
    #[arg(long, default_value_t = false)]
    pub unguarded: bool,

    /// Show every intermediate step.
    #[arg(long, default_value_t = false)]
    pub steps: bool,
}

impl Command {
    /// The operation behind the four single-operation subcommands.
    pub fn binary(&self) -> Option<(Operation, &BinaryArgs)> {
        match self {
            Command::Add(args) => Some((Operation::Add, args)),
            Command::Subtract(args) => Some((Operation::Subtract, args)),
            Command::Multiply(args) => Some((Operation::Multiply, args)),
            Command::Divide(args) => Some((Operation::Divide, args)),
            _ => None,
        }
    }
}
